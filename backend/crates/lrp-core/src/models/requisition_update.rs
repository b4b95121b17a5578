//! The reconciled set of fields one submission writes onto a document.

use crate::fields;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Partial overwrite for the document keyed by `req_id`.
///
/// Fields that are `None` are not part of the overwrite and keep whatever
/// value the stored document already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequisitionUpdate {
    pub req_id: String,
    pub pending_action: String,
    pub action_by: String,
    pub action_reason: String,
    pub assignee_email: Option<String>,
    pub lifting_plan_drive_file_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl RequisitionUpdate {
    /// String-valued fields being written, keyed by document field name.
    pub fn string_fields(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![
            (fields::PENDING_ACTION, self.pending_action.as_str()),
            (fields::ACTION_BY, self.action_by.as_str()),
            (fields::ACTION_REASON, self.action_reason.as_str()),
        ];

        if let Some(ref email) = self.assignee_email {
            out.push((fields::ASSIGNEE_EMAIL, email.as_str()));
        }
        if let Some(ref file_id) = self.lifting_plan_drive_file_id {
            out.push((fields::LIFTING_PLAN_DRIVE_FILE_ID, file_id.as_str()));
        }

        out
    }

    /// Every field path the update touches, `updatedAt` last.
    pub fn field_paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<&'static str> =
            self.string_fields().into_iter().map(|(name, _)| name).collect();
        paths.push(fields::UPDATED_AT);
        paths
    }

    /// `updatedAt` as an RFC 3339 string with millisecond precision.
    pub fn updated_at_rfc3339(&self) -> String {
        self.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The overwrite as a JSON object, suitable for a merge patch.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for (name, value) in self.string_fields() {
            map.insert(name.to_string(), Value::String(value.to_string()));
        }
        map.insert(
            fields::UPDATED_AT.to_string(),
            Value::String(self.updated_at_rfc3339()),
        );
        map
    }
}
