//! Core library components.
//!
//! This module contains the reusable logic for fetching repository keys,
//! encrypting the deploy password and rewriting the Travis configuration.

pub mod constants;
pub mod encrypt;
pub mod key;
pub mod pipeline;
pub mod prompt;
pub mod settings;
pub mod travis;
