use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// One or more required submission fields were absent or empty.
    #[error("Missing required fields: {} {location}", missing.join(", "))]
    MissingField {
        missing: Vec<&'static str>,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
