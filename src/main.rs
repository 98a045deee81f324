//! travis-encrypt - Store a deploy password in `.travis.yml` encrypted.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use travis_encrypt::cli::output;
use travis_encrypt::cli::{execute, Cli};
use travis_encrypt::core::constants::LOG_ENV;
use travis_encrypt::error::{ConfigError, Error, KeyError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("travis_encrypt=debug")
        } else {
            EnvFilter::new("travis_encrypt=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Key(KeyError::NotFound { .. }) => {
                Some("have you already added your GitHub repo to Travis?")
            }
            Error::Config(ConfigError::MissingSection(_)) => {
                Some("add a deploy section to your config first")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
