pub mod error;
pub mod fields;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::action_request::ActionRequest;
pub use models::pending_action::PendingAction;
pub use models::requisition::Requisition;
pub use models::requisition_update::RequisitionUpdate;
pub use models::validated_action::ValidatedAction;
