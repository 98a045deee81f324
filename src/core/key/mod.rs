//! Repository public key handling.
//!
//! Travis publishes one RSA public key per repository. This module fetches
//! it and turns the PEM text into something the cipher can use.
//!
//! ## Sources
//!
//! - **HTTP**: `GET {api}/repos/{owner}/{name}/key`, the production path.
//! - Anything implementing [`KeySource`], which is how tests avoid the network.

use crate::error::Result;

mod fetch;
mod pem;

pub use fetch::{key_url, parse_key_response, HttpKeySource};
pub use pem::{load_public_key, normalize_labels};

/// Supplier of a repository's PEM-encoded public key.
pub trait KeySource {
    /// Return the PEM text of the public key registered for `repo`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` when the provider has no key for the
    /// repository, or another `KeyError` if the lookup itself fails.
    fn fetch(&self, repo: &str) -> Result<String>;
}
