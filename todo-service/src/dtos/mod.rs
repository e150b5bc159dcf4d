pub mod todos;

pub use todos::{CreateTodoRequest, SuccessResponse, TodoListResponse, TodoResponse};
