pub mod requisition_list_response;
#[allow(clippy::module_inception)]
pub mod requisitions;
