//! Secret entry.
//!
//! The pipeline asks a [`SecretPrompt`] for the password when none was
//! given on the command line, so tests can supply one without a terminal.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Result;

/// Source of a secret typed (or piped) by the user.
pub trait SecretPrompt {
    /// Ask for a secret labelled `label`.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret cannot be read.
    fn secret(&self, label: &str) -> Result<Zeroizing<String>>;
}

/// Masked terminal input, or one line of stdin when it is piped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn secret(&self, label: &str) -> Result<Zeroizing<String>> {
        if io::stdin().is_terminal() {
            let value = Password::new().with_prompt(label).interact()?;
            return Ok(Zeroizing::new(value));
        }

        debug!("stdin is not a terminal, reading secret from pipe");
        let mut line = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// A prompt that always answers with the same secret.
#[derive(Clone)]
pub struct FixedSecret(Zeroizing<String>);

impl FixedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }
}

impl std::fmt::Debug for FixedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FixedSecret(***)")
    }
}

impl SecretPrompt for FixedSecret {
    fn secret(&self, _label: &str) -> Result<Zeroizing<String>> {
        Ok(self.0.clone())
    }
}
