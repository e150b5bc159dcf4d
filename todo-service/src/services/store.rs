use crate::models::Todo;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Persistence seam for todos. Each method is a single store operation.
///
/// `mark_completed` and `delete` return how many documents matched; zero is
/// not an error.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Todo>, AppError>;
    async fn insert(&self, todo: Todo) -> Result<Todo, AppError>;
    async fn mark_completed(&self, id: ObjectId) -> Result<u64, AppError>;
    async fn delete(&self, id: ObjectId) -> Result<u64, AppError>;
    async fn health_check(&self) -> Result<(), AppError>;
}
