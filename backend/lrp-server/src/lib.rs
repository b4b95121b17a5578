pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod store_factory;

#[cfg(test)]
mod tests;

pub use api::{
    actions::{action_response::ActionResponse, actions::submit_action},
    error::ApiError,
    error::Result as ApiResult,
    requisitions::{
        requisition_list_response::RequisitionListResponse, requisitions::list_requisitions,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
