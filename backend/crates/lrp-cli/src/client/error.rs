use error_location::ErrorLocation;
use serde::Deserialize;
use std::panic::Location;
use thiserror::Error;

/// Failure body returned by lrp-server on any non-2xx status.
#[derive(Debug, Default, Deserialize)]
struct RejectionBody {
    error: Option<String>,
    details: Option<String>,
    #[serde(default)]
    missing: Vec<String>,
}

fn detail_suffix(details: &Option<String>) -> String {
    details
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

/// Errors that can occur talking to the relay
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Could not reach {url}: {source} {location}")]
    Unreachable {
        url: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Server rejected request ({status}): {error}{} {location}", detail_suffix(.details))]
    Rejected {
        status: u16,
        error: String,
        details: Option<String>,
        missing: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Unreadable response body: {source} {location}")]
    Decode {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    #[track_caller]
    pub fn unreachable(url: impl Into<String>, source: reqwest::Error) -> Self {
        ClientError::Unreachable {
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Interpret a non-2xx response.
    ///
    /// The server's `{ error, details, missing }` body is unpacked when it
    /// parses; any other body becomes the error text verbatim.
    #[track_caller]
    pub fn rejected(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<RejectionBody>(body)
            .ok()
            .filter(|b| b.error.is_some())
            .unwrap_or_default();

        ClientError::Rejected {
            status,
            error: parsed.error.unwrap_or_else(|| body.to_string()),
            details: parsed.details,
            missing: parsed.missing,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Server-side message joined with its details, without status or location.
    pub fn summary(&self) -> String {
        match self {
            ClientError::Rejected {
                error,
                details: Some(details),
                ..
            } => format!("{}: {}", error, details),
            ClientError::Rejected { error, .. } => error.clone(),
            ClientError::Unreachable { source, .. } => source.to_string(),
            ClientError::Decode { source, .. } => source.to_string(),
        }
    }

    /// True when the server refused the submission for missing fields.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Rejected { status: 400, missing, .. } if !missing.is_empty())
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::Decode {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
