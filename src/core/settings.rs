//! Run settings.
//!
//! Everything the pipeline needs to know about where to read from and write
//! to, resolved once from flags and environment.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{Result, ValidationError};

/// Settings for a single encryption run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Repository slug (`owner/name`)
    repo: String,
    /// Path of the Travis configuration file to rewrite
    config_path: PathBuf,
    /// Base URL of the Travis API, without trailing slash
    api_url: String,
}

impl Settings {
    /// Build settings, rejecting an empty repository.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyRepo` if `repo` is blank.
    pub fn new(
        repo: impl Into<String>,
        config_path: impl Into<PathBuf>,
        api_url: impl Into<String>,
    ) -> Result<Self> {
        let repo = repo.into().trim().to_string();
        if repo.is_empty() {
            return Err(ValidationError::EmptyRepo.into());
        }

        let api_url = api_url.into().trim_end_matches('/').to_string();
        let config_path = config_path.into();

        debug!(
            repo = %repo,
            config = %config_path.display(),
            api_url = %api_url,
            "settings resolved"
        );

        Ok(Self {
            repo,
            config_path,
            api_url,
        })
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo: constants::DEFAULT_REPO.to_string(),
            config_path: PathBuf::from(constants::CONFIG_FILE),
            api_url: constants::DEFAULT_API_URL.to_string(),
        }
    }
}
