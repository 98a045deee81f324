//! The fetch, encrypt, rewrite pipeline.

use std::path::PathBuf;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::PASSWORD_PROMPT;
use crate::core::encrypt::encrypt;
use crate::core::key::{load_public_key, KeySource};
use crate::core::prompt::SecretPrompt;
use crate::core::settings::Settings;
use crate::core::travis::update_deploy_password;
use crate::error::{Result, ValidationError};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Config file that was rewritten
    pub config_path: PathBuf,
    /// Base64 ciphertext stored under `deploy.password.secure`
    pub secure: String,
}

/// Run the whole pipeline once.
///
/// Fetches the repository key from `source`, takes the password from
/// `password` or asks `prompt` for it, encrypts it and rewrites the config
/// file named in `settings`.
///
/// # Errors
///
/// Returns the first error from any stage; the config file is left
/// untouched unless the final write succeeds.
pub fn run(
    settings: &Settings,
    source: &dyn KeySource,
    prompt: &dyn SecretPrompt,
    password: Option<Zeroizing<String>>,
) -> Result<Outcome> {
    debug!(repo = %settings.repo(), "starting");

    let pem = source.fetch(settings.repo())?;
    debug!(pem_len = pem.len(), "public key fetched");

    let password = match password {
        Some(password) => password,
        None => prompt.secret(PASSWORD_PROMPT)?,
    };
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }

    let key = load_public_key(&pem)?;
    let secure = encrypt(&key, password.as_bytes())?;
    debug!(secure_len = secure.len(), "password encrypted");

    update_deploy_password(settings.config_path(), &secure)?;

    Ok(Outcome {
        config_path: settings.config_path().to_path_buf(),
        secure,
    })
}
