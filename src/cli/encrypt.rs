//! Encrypt command.
//!
//! Fetches the repository key, encrypts the password and rewrites the
//! config file.

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, Cli};
use crate::core::key::HttpKeySource;
use crate::core::pipeline;
use crate::core::prompt::TerminalPrompt;
use crate::error::Result;

/// Run the pipeline against the live Travis API.
pub fn execute(cli: Cli) -> Result<()> {
    let settings = cli.settings()?;
    info!("Encrypting deploy password for {}", settings.repo());

    let source = HttpKeySource::new(settings.api_url())?;
    let password = cli.password.map(Zeroizing::new);

    let outcome = pipeline::run(&settings, &source, &TerminalPrompt, password)?;

    output::success(&format!(
        "wrote encrypted password to {}, you're ready to deploy",
        output::path(&outcome.config_path.display().to_string())
    ));

    Ok(())
}
