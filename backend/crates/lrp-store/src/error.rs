use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Requisition {id} not found {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Document store returned {status}: {message} {location}")]
    Remote {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode document: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credentials error: {message} {location}")]
    Credentials {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        StoreError::NotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        StoreError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credentials<S: Into<String>>(message: S) -> Self {
        StoreError::Credentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote<S: Into<String>>(status: u16, message: S) -> Self {
        StoreError::Remote {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The underlying failure message, without source location.
    ///
    /// This is what callers of the HTTP API get to see.
    pub fn details(&self) -> String {
        match self {
            StoreError::NotFound { id, .. } => format!("No document to update: {}", id),
            StoreError::Sqlx { source, .. } => source.to_string(),
            StoreError::Migration { message, .. }
            | StoreError::Http { message, .. }
            | StoreError::Decode { message, .. }
            | StoreError::Credentials { message, .. } => message.clone(),
            StoreError::Remote {
                status, message, ..
            } => format!("{} {}", status, message),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
