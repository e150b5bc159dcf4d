use crate::models::Todo;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/todos`. An `_id` sent by the client is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Todo data is required !"))]
    pub data: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
}

impl From<CreateTodoRequest> for Todo {
    fn from(req: CreateTodoRequest) -> Self {
        Todo::new(req.data, req.is_completed)
    }
}

/// Wire form of a todo. `_id` is the 24-char hex string usable in paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    pub data: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.map(|id| id.to_hex()),
            is_completed: todo.is_completed,
            data: todo.data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub data: Vec<TodoResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
