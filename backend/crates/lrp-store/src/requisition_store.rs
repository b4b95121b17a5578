use crate::Result as StoreResult;

use lrp_core::{Requisition, RequisitionUpdate};

use async_trait::async_trait;

/// Access to the `requisitions` collection.
///
/// Implementations never create or delete documents. One call maps to one
/// round trip against the backing store.
#[async_trait]
pub trait RequisitionStore: Send + Sync {
    /// Overwrite the fields named by `update` on an existing document.
    ///
    /// Fields not carried by the update keep their stored values. Fails with
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) when no document
    /// has the id.
    async fn apply_update(&self, update: &RequisitionUpdate) -> StoreResult<()>;

    /// Point read by document id.
    async fn get(&self, id: &str) -> StoreResult<Option<Requisition>>;

    /// Documents that carry an `updatedAt`, newest first, at most `limit`.
    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<Requisition>>;

    /// Short backend label for logs and health output.
    fn backend_name(&self) -> &'static str;
}
