#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use todo_service::config::{MongoConfig, StoreBackend, StoreConfig, TodoConfig};
use todo_service::services::{InMemoryTodoStore, TodoStore};
use todo_service::{build_router, AppState};
use tower::util::ServiceExt;

pub fn test_config(backend: StoreBackend) -> TodoConfig {
    TodoConfig {
        common: CoreConfig { port: 0 },
        mongodb: MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: format!("todo_test_{}", uuid::Uuid::new_v4().simple()),
            collection: "todos".to_string(),
        },
        store: StoreConfig { backend },
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn TodoStore>,
}

impl TestApp {
    /// Router over a fresh in-memory store.
    pub fn spawn() -> Self {
        Self::with_store(Arc::new(InMemoryTodoStore::new()))
    }

    pub fn with_store(store: Arc<dyn TodoStore>) -> Self {
        let state = AppState {
            config: test_config(StoreBackend::Memory),
            store: store.clone(),
        };
        Self {
            router: build_router(state),
            store,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    pub async fn list(&self) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, "/api/todos", None).await
    }

    pub async fn create(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, "/api/todos", Some(body)).await
    }

    pub async fn complete(&self, id: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::PATCH, &format!("/api/todos/{}", id), None)
            .await
    }

    pub async fn delete(&self, id: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::DELETE, &format!("/api/todos/{}", id), None)
            .await
    }
}
