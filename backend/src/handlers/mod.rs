//! HTTP handlers

pub mod assistant;
pub mod health;

pub use assistant::{show_page, submit_message};
pub use health::health_check;
