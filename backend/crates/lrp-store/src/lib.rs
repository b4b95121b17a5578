pub mod error;
pub mod firestore;
pub mod requisition_store;
pub mod sqlite;


pub use error::{Result, StoreError};
pub use firestore::credentials::{Credentials, MetadataTokenSource};
pub use firestore::firestore_requisition_store::{FirestoreRequisitionStore, FirestoreSettings};
pub use requisition_store::RequisitionStore;
pub use sqlite::sqlite_requisition_store::SqliteRequisitionStore;

/// Name of the collection holding requisition documents.
pub const COLLECTION: &str = "requisitions";

/// Hard cap on rows returned by a listing.
pub const LIST_LIMIT: usize = 50;
