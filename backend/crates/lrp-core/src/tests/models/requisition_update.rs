use crate::{ActionRequest, RequisitionUpdate};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

fn reconcile(request: ActionRequest) -> RequisitionUpdate {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    request.validate().unwrap().reconcile(now)
}

fn base_request() -> ActionRequest {
    ActionRequest {
        req_id: Some("REQ-1".into()),
        pending_action: Some("ADMIN_ASSIGN".into()),
        action_by: Some("a@b.com".into()),
        ..Default::default()
    }
}

#[test]
fn given_no_reason_when_reconcile_then_reason_is_empty_string() {
    let update = reconcile(base_request());

    assert_that!(update.action_reason, eq(""));
    assert_that!(update.to_fields().get("actionReason"), some(eq(&serde_json::json!(""))));
}

#[test]
fn given_empty_assignee_email_when_reconcile_then_field_not_written() {
    let update = reconcile(ActionRequest {
        assignee_email: Some(String::new()),
        lifting_plan_drive_file_id: Some(String::new()),
        ..base_request()
    });

    assert_that!(update.assignee_email, none());
    assert_that!(update.lifting_plan_drive_file_id, none());
    assert_that!(
        update.field_paths(),
        elements_are![
            eq(&"pendingAction"),
            eq(&"actionBy"),
            eq(&"actionReason"),
            eq(&"updatedAt")
        ]
    );
}

#[test]
fn given_assignee_email_and_file_id_when_reconcile_then_both_written() {
    let update = reconcile(ActionRequest {
        assignee_email: Some("x@y.com".into()),
        lifting_plan_drive_file_id: Some("drive-9".into()),
        action_reason: Some("handover".into()),
        ..base_request()
    });

    let fields = update.to_fields();
    assert_that!(fields.get("assigneeEmail"), some(eq(&serde_json::json!("x@y.com"))));
    assert_that!(
        fields.get("liftingPlanDriveFileId"),
        some(eq(&serde_json::json!("drive-9")))
    );
    assert_that!(fields.get("actionReason"), some(eq(&serde_json::json!("handover"))));
    assert_that!(update.field_paths().len(), eq(6));
}

#[test]
fn given_update_when_to_fields_then_updated_at_is_rfc3339_millis() {
    let update = reconcile(base_request());

    assert_that!(update.updated_at_rfc3339(), eq("2026-10-19T08:30:00.000Z"));
    assert_that!(
        update.to_fields().get("updatedAt"),
        some(eq(&serde_json::json!("2026-10-19T08:30:00.000Z")))
    );
}

#[test]
fn given_update_when_to_fields_then_req_id_is_not_a_document_field() {
    let update = reconcile(base_request());

    let fields = update.to_fields();
    assert_that!(fields.contains_key("reqId"), eq(false));
    assert_that!(fields.contains_key("id"), eq(false));
}
