//! pd-cli library
//!
//! Command definitions and the runner behind the `pd` binary, exported for
//! tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
pub use runner::{SIGN_UP_CONFIRMATION_MESSAGE, execute};
