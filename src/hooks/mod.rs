pub mod use_auth;
pub mod use_tasks;

pub use use_auth::*;
pub use use_tasks::*;
