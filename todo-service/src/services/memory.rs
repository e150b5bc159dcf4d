use crate::models::Todo;
use crate::services::TodoStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::{Mutex, MutexGuard};

/// Process-local store keeping todos in insertion order.
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: Mutex<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Todo>>, AppError> {
        self.todos.lock().map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Todo store mutex poisoned: {}", e))
        })
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.lock()?.clone())
    }

    async fn insert(&self, mut todo: Todo) -> Result<Todo, AppError> {
        todo.id = Some(ObjectId::new());
        self.lock()?.push(todo.clone());
        Ok(todo)
    }

    async fn mark_completed(&self, id: ObjectId) -> Result<u64, AppError> {
        let mut todos = self.lock()?;
        match todos.iter_mut().find(|todo| todo.id == Some(id)) {
            Some(todo) => {
                todo.is_completed = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, AppError> {
        let mut todos = self.lock()?;
        let before = todos.len();
        todos.retain(|todo| todo.id != Some(id));
        Ok((before - todos.len()) as u64)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryTodoStore::new();
        let a = store.insert(Todo::new("a".into(), false)).await.unwrap();
        let b = store.insert(Todo::new("b".into(), false)).await.unwrap();

        assert!(a.id.is_some());
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn mark_completed_is_idempotent() {
        let store = InMemoryTodoStore::new();
        let todo = store.insert(Todo::new("a".into(), false)).await.unwrap();
        let id = todo.id.unwrap();

        assert_eq!(store.mark_completed(id).await.unwrap(), 1);
        assert_eq!(store.mark_completed(id).await.unwrap(), 1);
        assert!(store.list().await.unwrap()[0].is_completed);
    }

    #[tokio::test]
    async fn unknown_ids_match_nothing() {
        let store = InMemoryTodoStore::new();
        store.insert(Todo::new("a".into(), false)).await.unwrap();

        let missing = ObjectId::new();
        assert_eq!(store.mark_completed(missing).await.unwrap(), 0);
        assert_eq!(store.delete(missing).await.unwrap(), 0);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = InMemoryTodoStore::new();
        let a = store.insert(Todo::new("a".into(), false)).await.unwrap();
        let b = store.insert(Todo::new("b".into(), true)).await.unwrap();

        assert_eq!(store.delete(a.id.unwrap()).await.unwrap(), 1);
        assert_eq!(store.list().await.unwrap(), vec![b]);
    }
}
