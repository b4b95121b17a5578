pub mod actions;
pub mod error;
pub mod requisitions;
