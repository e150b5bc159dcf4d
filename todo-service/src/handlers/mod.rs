pub mod health;
pub mod todos;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use todos::{complete_todo, create_todo, delete_todo, list_todos};
