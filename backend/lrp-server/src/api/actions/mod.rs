pub mod action_response;
#[allow(clippy::module_inception)]
pub mod actions;
