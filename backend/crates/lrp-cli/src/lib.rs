//! lrp-cli library
//!
//! Exports the HTTP client and argument parser for the `lrp` binary and tests.

pub mod cli;
pub(crate) mod client;
pub mod commands;


pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, SubmitAction};
pub use commands::Commands;
