use crate::{ApiResult, AppState, RequisitionListResponse};

use lrp_store::LIST_LIMIT;

use axum::{Json, extract::State};
use log::debug;

/// GET /requisitions
///
/// The most recently updated requisitions, capped at [`LIST_LIMIT`].
pub async fn list_requisitions(
    State(state): State<AppState>,
) -> ApiResult<Json<RequisitionListResponse>> {
    let rows = state.store.list_recent(LIST_LIMIT).await?;
    debug!("Listing {} requisitions", rows.len());

    Ok(Json(RequisitionListResponse { ok: true, rows }))
}
