use lrp_store::RequisitionStore;

use std::sync::Arc;

/// Shared handler state. The store client is built once at startup and
/// never reconfigured.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RequisitionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RequisitionStore>) -> Self {
        Self { store }
    }
}
