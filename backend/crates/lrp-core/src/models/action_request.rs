//! Body of a submitted action, exactly as the caller sent it.

use crate::{CoreError, Result as CoreErrorResult, ValidatedAction, fields};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Unvalidated action payload. Every key is optional on the wire; unknown
/// keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    #[serde(default)]
    pub req_id: Option<String>,

    #[serde(default)]
    pub pending_action: Option<String>,

    #[serde(default)]
    pub action_by: Option<String>,

    #[serde(default)]
    pub action_reason: Option<String>,

    #[serde(default)]
    pub assignee_email: Option<String>,

    #[serde(default)]
    pub lifting_plan_drive_file_id: Option<String>,
}

impl ActionRequest {
    /// Check the required fields.
    ///
    /// `reqId`, `pendingAction` and `actionBy` must be present and non-empty.
    /// Nothing else is inspected: the action label is not checked against the
    /// known set and `actionBy` is not checked for email shape.
    #[track_caller]
    pub fn validate(self) -> CoreErrorResult<ValidatedAction> {
        let mut missing = Vec::new();

        let req_id = required(self.req_id, fields::REQ_ID, &mut missing);
        let pending_action = required(self.pending_action, fields::PENDING_ACTION, &mut missing);
        let action_by = required(self.action_by, fields::ACTION_BY, &mut missing);

        match (req_id, pending_action, action_by) {
            (Some(req_id), Some(pending_action), Some(action_by)) => Ok(ValidatedAction {
                req_id,
                pending_action,
                action_by,
                action_reason: self.action_reason,
                assignee_email: self.assignee_email,
                lifting_plan_drive_file_id: self.lifting_plan_drive_file_id,
            }),
            _ => Err(CoreError::MissingField {
                missing,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

fn required(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(name);
            None
        }
    }
}
