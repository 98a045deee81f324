//! Travis configuration file rewriting.
//!
//! Loads `.travis.yml`, swaps the deploy password for an encrypted
//! `secure` value and writes the file back with a warning header.

use serde_yaml::{Mapping, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::constants::WARNING_LINE;
use crate::error::{ConfigError, Result};

/// An in-memory `.travis.yml` document bound to its path on disk.
#[derive(Debug)]
pub struct TravisConfig {
    path: PathBuf,
    document: Value,
}

impl TravisConfig {
    /// Load and parse the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file can't be read, or
    /// `ConfigError::Parse` if the YAML is malformed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!(path = %path.display(), "loading travis config");

        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let document: Value = serde_yaml::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(Self { path, document })
    }

    /// Replace `deploy.password` with `{secure: <payload>}`.
    ///
    /// Any previous value at that path is discarded, not merged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSection` if there is no `deploy` key, or
    /// `ConfigError::NotAMapping` if the document or `deploy` is not a mapping.
    pub fn set_secure_password(&mut self, payload: &str) -> Result<()> {
        let root = match &mut self.document {
            Value::Mapping(root) => root,
            Value::Null => return Err(ConfigError::MissingSection("deploy").into()),
            _ => return Err(ConfigError::NotAMapping("document").into()),
        };

        let deploy = root
            .get_mut("deploy")
            .ok_or(ConfigError::MissingSection("deploy"))?
            .as_mapping_mut()
            .ok_or(ConfigError::NotAMapping("deploy"))?;

        let mut secure = Mapping::new();
        secure.insert(Value::from("secure"), Value::from(payload));
        deploy.insert(Value::from("password"), Value::Mapping(secure));

        Ok(())
    }

    /// Serialized file contents: the warning line followed by block-style YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the document can't be serialized.
    pub fn render(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.document).map_err(ConfigError::Serialize)?;
        Ok(format!("{}\n{}", WARNING_LINE, yaml))
    }

    /// Write the document back to its path in one atomic replace.
    ///
    /// The new contents go to a temporary file next to the target, which is
    /// then renamed over it. The original file's permissions are kept, and a
    /// symlinked path updates the file it points to.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` or `ConfigError::WriteFile`.
    pub fn save(&self) -> Result<()> {
        let contents = self.render()?;
        let target = std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(ConfigError::WriteFile)?;
        tmp.write_all(contents.as_bytes())
            .map_err(ConfigError::WriteFile)?;

        if let Ok(metadata) = std::fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(ConfigError::WriteFile)?;
        }

        tmp.persist(&target)
            .map_err(|e| ConfigError::WriteFile(e.error))?;

        debug!(path = %target.display(), bytes = contents.len(), "travis config written");
        Ok(())
    }
}

/// Load `path`, embed `payload` as the deploy password and save it.
///
/// # Errors
///
/// Propagates any `ConfigError` from loading, updating or saving.
pub fn update_deploy_password(path: &Path, payload: &str) -> Result<()> {
    let mut config = TravisConfig::load(path)?;
    config.set_secure_password(payload)?;
    config.save()
}
