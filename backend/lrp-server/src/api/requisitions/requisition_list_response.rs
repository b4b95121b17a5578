use lrp_core::Requisition;

use serde::Serialize;

/// Latest requisitions, newest first
#[derive(Debug, Serialize)]
pub struct RequisitionListResponse {
    pub ok: bool,
    pub rows: Vec<Requisition>,
}
