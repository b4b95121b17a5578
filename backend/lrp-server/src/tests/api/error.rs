use crate::ApiError;

use lrp_core::{ActionRequest, CoreError};
use lrp_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_missing_field_returns_400_with_fixed_message_and_names() {
    let error = ApiError::MissingField {
        missing: vec!["reqId"],
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
    assert_eq!(
        json["error"],
        "Missing required fields: reqId, pendingAction, actionBy"
    );
    assert_eq!(json["missing"], serde_json::json!(["reqId"]));
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_bad_request_returns_400_with_message() {
    let error = ApiError::BadRequest {
        message: "Expected request with `Content-Type: application/json`".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
    assert!(json["error"].as_str().unwrap().contains("application/json"));
    assert!(json.get("missing").is_none());
}

#[tokio::test]
async fn test_store_error_returns_500_with_details_without_location() {
    let error = ApiError::from(StoreError::not_found("REQ-404"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "Server error");
    assert_eq!(json["details"], "No document to update: REQ-404");
}

#[tokio::test]
async fn test_remote_store_error_details_carry_status() {
    let error = ApiError::from(StoreError::remote(403, "Missing or insufficient permissions."));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["details"], "403 Missing or insufficient permissions.");
}

#[test]
fn test_core_missing_field_maps_to_missing_field() {
    let core: CoreError = ActionRequest {
        pending_action: Some("ADMIN_ASSIGN".into()),
        ..Default::default()
    }
    .validate()
    .unwrap_err();

    let error = ApiError::from(core);

    match error {
        ApiError::MissingField { missing, .. } => {
            assert_eq!(missing, vec!["reqId", "actionBy"]);
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}
