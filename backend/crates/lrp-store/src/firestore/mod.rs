//! Firestore REST (v1) backend.

pub mod credentials;
pub mod firestore_requisition_store;
pub mod firestore_value;
