//! PEM parsing with the Travis header workaround.
//!
//! Travis serves SubjectPublicKeyInfo keys under an `RSA PUBLIC KEY` label,
//! which strict parsers reject. See travis-ci/travis-api#196.

use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;
use tracing::debug;

use crate::error::{KeyError, Result};

/// Parse a PEM public key, retrying once with the `RSA` label removed.
///
/// Both SubjectPublicKeyInfo (`PUBLIC KEY`) and PKCS#1 (`RSA PUBLIC KEY`)
/// documents are accepted as-is.
///
/// # Errors
///
/// Returns `KeyError::InvalidKey` if neither the original nor the
/// relabelled text parses.
pub fn load_public_key(pem: &str) -> Result<RsaPublicKey> {
    let pem = pem.trim();

    match parse_pem(pem) {
        Ok(key) => Ok(key),
        Err(err) => {
            debug!(error = %err, "retrying key parse without RSA label");
            parse_pem(&normalize_labels(pem)).map_err(|e| KeyError::InvalidKey(e).into())
        }
    }
}

fn parse_pem(pem: &str) -> std::result::Result<RsaPublicKey, String> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| e.to_string())
}

/// Rewrite `BEGIN RSA`/`END RSA` boundaries to their plain form.
pub fn normalize_labels(pem: &str) -> String {
    pem.replace("BEGIN RSA", "BEGIN").replace("END RSA", "END")
}
