//! travis-encrypt - Store a deploy password in `.travis.yml` encrypted.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # The one command: run the pipeline and report
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── key/          # Public key retrieval
//!     │   ├── fetch     # Travis API client
//!     │   └── pem       # PEM parsing with the RSA label workaround
//!     ├── encrypt       # PKCS#1 v1.5 encryption + base64
//!     ├── travis        # .travis.yml rewriting
//!     ├── prompt        # Masked password entry
//!     ├── settings      # Resolved run settings
//!     └── pipeline      # fetch -> encrypt -> rewrite
//! ```
//!
//! # Pipeline
//!
//! 1. Fetch the repository's RSA public key from the Travis API
//! 2. Parse it, retrying once without the non-standard `RSA` PEM label
//! 3. Encrypt the password with PKCS#1 v1.5 and base64 encode it
//! 4. Write it to `deploy.password.secure` in `.travis.yml`

pub mod cli;
pub mod core;
pub mod error;
