use serde::Serialize;

/// Message returned once an update has been written.
pub const ACTION_SENT_MESSAGE: &str = "Action sent to workflow";

/// Successful submission response
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn sent() -> Self {
        Self {
            ok: true,
            message: ACTION_SENT_MESSAGE.into(),
        }
    }
}
