mod action_request;
mod pending_action;
mod requisition_update;
