use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use thiserror::Error;

/// A todo as stored in the `todos` collection.
///
/// `_id` is left out on insert so the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
    pub data: String,
}

impl Todo {
    pub fn new(data: String, is_completed: bool) -> Self {
        Self {
            id: None,
            is_completed,
            data,
        }
    }
}

/// Client-side failures of the todo handlers.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo data is required !")]
    MissingData,

    #[error("Invalid ToDo ID!")]
    InvalidId(#[source] mongodb::bson::oid::Error),
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        AppError::BadRequest(anyhow::anyhow!(err.to_string()))
    }
}

/// Format check only: a well-formed id may still match nothing.
pub fn parse_todo_id(raw: &str) -> Result<ObjectId, TodoError> {
    ObjectId::parse_str(raw).map_err(TodoError::InvalidId)
}
