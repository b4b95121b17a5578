use crate::{ActionRequest, CoreError};

use googletest::prelude::*;

fn full_request() -> ActionRequest {
    ActionRequest {
        req_id: Some("REQ-1".into()),
        pending_action: Some("ADMIN_ASSIGN".into()),
        action_by: Some("a@b.com".into()),
        action_reason: None,
        assignee_email: None,
        lifting_plan_drive_file_id: None,
    }
}

#[test]
fn given_all_required_fields_when_validate_then_ok() {
    // When
    let result = full_request().validate();

    // Then
    assert_that!(result, ok(anything()));
    let action = result.unwrap();
    assert_that!(action.req_id, eq("REQ-1"));
    assert_that!(action.pending_action, eq("ADMIN_ASSIGN"));
    assert_that!(action.action_by, eq("a@b.com"));
}

#[test]
fn given_missing_req_id_when_validate_then_missing_field_names_it() {
    // Given
    let request = ActionRequest {
        req_id: None,
        ..full_request()
    };

    // When
    let result = request.validate();

    // Then
    match result {
        Err(CoreError::MissingField { missing, .. }) => {
            assert_that!(missing, elements_are![eq(&"reqId")]);
        }
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn given_empty_strings_when_validate_then_all_reported_in_order() {
    // Given
    let request = ActionRequest {
        req_id: Some(String::new()),
        pending_action: Some(String::new()),
        action_by: None,
        ..full_request()
    };

    // When
    let result = request.validate();

    // Then
    match result {
        Err(CoreError::MissingField { missing, .. }) => {
            assert_that!(
                missing,
                elements_are![eq(&"reqId"), eq(&"pendingAction"), eq(&"actionBy")]
            );
        }
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn given_unknown_action_label_when_validate_then_still_ok() {
    // Given
    let request = ActionRequest {
        pending_action: Some("SOMETHING_ELSE".into()),
        ..full_request()
    };

    // When
    let result = request.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_whitespace_only_req_id_when_validate_then_accepted_as_is() {
    // Given - only absent or empty values count as missing
    let request = ActionRequest {
        req_id: Some("  ".into()),
        ..full_request()
    };

    // When
    let result = request.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_camel_case_json_when_deserialize_then_fields_populated() {
    // Given
    let body = r#"{
        "reqId": "REQ-7",
        "pendingAction": "ASSIGNEE_COMPLETE",
        "actionBy": "worker@site.com",
        "assigneeEmail": "",
        "liftingPlanDriveFileId": "drive-123",
        "somethingUnrelated": true
    }"#;

    // When
    let request: ActionRequest = serde_json::from_str(body).unwrap();

    // Then
    assert_that!(request.req_id, some(eq("REQ-7")));
    assert_that!(request.assignee_email, some(eq("")));
    assert_that!(request.lifting_plan_drive_file_id, some(eq("drive-123")));
    assert_that!(request.action_reason, none());
}

#[test]
fn given_null_required_field_when_deserialize_and_validate_then_missing() {
    // Given
    let body = r#"{"reqId": null, "pendingAction": "X", "actionBy": "a@b.com"}"#;
    let request: ActionRequest = serde_json::from_str(body).unwrap();

    // When
    let result = request.validate();

    // Then
    assert_that!(result, err(anything()));
    let msg = result.unwrap_err().to_string();
    assert_that!(msg, contains_substring("Missing required fields: reqId"));
}
