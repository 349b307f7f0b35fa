pub mod auth_service;
pub mod task_service;

pub use auth_service::*;
pub use task_service::*;
