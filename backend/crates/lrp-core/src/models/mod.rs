pub mod action_request;
pub mod pending_action;
pub mod requisition;
pub mod requisition_update;
pub mod validated_action;
