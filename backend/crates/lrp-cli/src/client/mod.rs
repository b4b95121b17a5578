pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, SubmitAction};
pub use error::{ClientError, Result as CliClientResult};
