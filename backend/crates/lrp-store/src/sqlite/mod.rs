pub mod sqlite_requisition_store;
