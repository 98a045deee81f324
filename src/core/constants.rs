//! Constants used throughout travis-encrypt.
//!
//! Centralizes magic strings and default settings.

/// Repository used when `--repo` is not given.
pub const DEFAULT_REPO: &str = "davidhickman/calendary";

/// Travis configuration file name (.travis.yml).
pub const CONFIG_FILE: &str = ".travis.yml";

/// Base URL of the Travis CI API.
pub const DEFAULT_API_URL: &str = "https://api.travis-ci.org";

/// Comment written as the first line of every rewritten config file.
pub const WARNING_LINE: &str =
    "# This file was autogenerated and will overwrite each time you run travis-encrypt";

/// Label shown when prompting for the deploy password.
pub const PASSWORD_PROMPT: &str = "PyPI password";

/// Bytes of PKCS#1 v1.5 padding overhead per encrypted block.
pub const PKCS1_V15_OVERHEAD: usize = 11;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "TRAVIS_ENCRYPT_LOG";
