//! Document field names as stored in the `requisitions` collection.

pub const REQ_ID: &str = "reqId";
pub const ID: &str = "id";
pub const PENDING_ACTION: &str = "pendingAction";
pub const ACTION_BY: &str = "actionBy";
pub const ACTION_REASON: &str = "actionReason";
pub const ASSIGNEE_EMAIL: &str = "assigneeEmail";
pub const LIFTING_PLAN_DRIVE_FILE_ID: &str = "liftingPlanDriveFileId";
pub const UPDATED_AT: &str = "updatedAt";

