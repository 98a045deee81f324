//! RSA encryption of the deploy password.
//!
//! Travis decrypts `secure` values with the repository's private key using
//! PKCS#1 v1.5, so that is the only padding offered here. The ciphertext is
//! base64 encoded for embedding in YAML.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};
use tracing::trace;

use crate::core::constants::PKCS1_V15_OVERHEAD;
use crate::error::{CipherError, Result};

/// Largest plaintext, in bytes, that fits in one block for `key`.
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(PKCS1_V15_OVERHEAD)
}

/// Encrypt `plaintext` for `key` and return the base64 ciphertext.
///
/// # Errors
///
/// Returns `CipherError::EmptyPlaintext` for empty input,
/// `CipherError::MessageTooLong` if the input does not fit in a single
/// block, or `CipherError::EncryptionFailed` if the primitive fails.
pub fn encrypt(key: &RsaPublicKey, plaintext: &[u8]) -> Result<String> {
    if plaintext.is_empty() {
        return Err(CipherError::EmptyPlaintext.into());
    }

    let max = max_plaintext_len(key);
    if plaintext.len() > max {
        return Err(CipherError::MessageTooLong {
            len: plaintext.len(),
            max,
        }
        .into());
    }

    trace!(
        modulus_bytes = key.size(),
        plaintext_len = plaintext.len(),
        "encrypting"
    );

    let ciphertext = key
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    trace!(ciphertext_len = ciphertext.len(), "encrypted");

    Ok(STANDARD.encode(ciphertext))
}
