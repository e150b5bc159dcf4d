use crate::models::Todo;
use crate::services::TodoStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoTodoStore {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoTodoStore {
    /// Connects and pings the deployment; an unreachable server fails here
    /// rather than on the first request.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);

        let store = Self {
            client,
            db,
            collection: collection.to_string(),
        };
        store.health_check().await?;

        tracing::info!(database = %database, collection = %collection, "Connected to MongoDB");
        Ok(store)
    }

    pub fn todos(&self) -> Collection<Todo> {
        self.db.collection(&self.collection)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl TodoStore for MongoTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        let cursor = self.todos().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to list todos: {}", e);
            AppError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect todos: {}", e);
            AppError::from(e)
        })
    }

    async fn insert(&self, mut todo: Todo) -> Result<Todo, AppError> {
        let result = self.todos().insert_one(&todo, None).await.map_err(|e| {
            tracing::error!("Failed to insert todo: {}", e);
            AppError::from(e)
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "Inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;
        todo.id = Some(id);
        Ok(todo)
    }

    async fn mark_completed(&self, id: ObjectId) -> Result<u64, AppError> {
        let result = self
            .todos()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "isCompleted": true } },
                None,
            )
            .await
            .map_err(|e| {
                tracing::error!(todo_id = %id, "Failed to complete todo: {}", e);
                AppError::from(e)
            })?;
        Ok(result.matched_count)
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, AppError> {
        let result = self
            .todos()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(todo_id = %id, "Failed to delete todo: {}", e);
                AppError::from(e)
            })?;
        Ok(result.deleted_count)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
