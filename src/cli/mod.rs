//! Command-line interface.

pub mod encrypt;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

use crate::core::constants;
use crate::core::settings::Settings;
use crate::error::Result;

/// Update the encrypted deploy password in a Travis config file.
#[derive(Parser)]
#[command(
    name = "travis-encrypt",
    about = "Update the encrypted deploy password in .travis.yml",
    version
)]
pub struct Cli {
    /// GitHub repository (owner/name)
    #[arg(long, default_value = constants::DEFAULT_REPO)]
    pub repo: String,

    /// PyPI password (will prompt if not provided)
    #[arg(long)]
    pub password: Option<String>,

    /// Travis config file to update
    #[arg(long, env = "TRAVIS_ENCRYPT_CONFIG", default_value = constants::CONFIG_FILE)]
    pub config: PathBuf,

    /// Travis API base URL
    #[arg(long, env = "TRAVIS_API_URL", default_value = constants::DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve flags into run settings.
    pub fn settings(&self) -> Result<Settings> {
        Settings::new(self.repo.as_str(), self.config.as_path(), self.api_url.as_str())
    }
}

/// Execute the command line.
pub fn execute(cli: Cli) -> Result<()> {
    encrypt::execute(cli)
}
