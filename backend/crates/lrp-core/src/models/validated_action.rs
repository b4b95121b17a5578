use crate::RequisitionUpdate;

use chrono::{DateTime, Utc};

/// An action whose required fields are known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAction {
    pub req_id: String,
    pub pending_action: String,
    pub action_by: String,
    pub action_reason: Option<String>,
    pub assignee_email: Option<String>,
    pub lifting_plan_drive_file_id: Option<String>,
}

impl ValidatedAction {
    /// Decide which document fields this action overwrites.
    ///
    /// - `actionReason` is always written, empty when not supplied.
    /// - `updatedAt` is always written with `now`.
    /// - `assigneeEmail` and `liftingPlanDriveFileId` are written only when
    ///   non-empty. An empty string leaves the stored value alone rather than
    ///   erasing it.
    pub fn reconcile(self, now: DateTime<Utc>) -> RequisitionUpdate {
        RequisitionUpdate {
            req_id: self.req_id,
            pending_action: self.pending_action,
            action_by: self.action_by,
            action_reason: self.action_reason.unwrap_or_default(),
            assignee_email: non_empty(self.assignee_email),
            lifting_plan_drive_file_id: non_empty(self.lifting_plan_drive_file_id),
            updated_at: now,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
