//! Action submission handler
//!
//! A submission overwrites the workflow fields of one existing requisition.
//! The workflow engine watching the collection picks the change up from there.

use crate::{ActionResponse, ApiResult, AppState};

use lrp_core::{ActionRequest, PendingAction};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use log::{info, warn};

/// POST /action
///
/// Validate the body, stamp it with the receipt time and apply it to the
/// `requisitions/{reqId}` document.
pub async fn submit_action(
    State(state): State<AppState>,
    payload: Result<Json<ActionRequest>, JsonRejection>,
) -> ApiResult<Json<ActionResponse>> {
    let received_at = Utc::now();
    let Json(request) = payload?;

    let action = request.validate()?;

    if !PendingAction::is_known(&action.pending_action) {
        warn!(
            "Requisition {}: unrecognised pendingAction '{}' passed through",
            action.req_id, action.pending_action
        );
    }

    info!(
        "Requisition {}: {} by {}",
        action.req_id, action.pending_action, action.action_by
    );

    let update = action.reconcile(received_at);
    state.store.apply_update(&update).await?;

    Ok(Json(ActionResponse::sent()))
}
