//! Application startup and lifecycle management.

use crate::config::{StoreBackend, TodoConfig};
use crate::handlers;
use crate::services::{InMemoryTodoStore, MongoTodoStore, TodoStore};
use axum::{
    middleware::from_fn,
    routing::{get, patch},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, with_request_tracing};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared application state. The store handle is the only process-wide
/// resource and is shared by every in-flight request.
#[derive(Clone)]
pub struct AppState {
    pub config: TodoConfig,
    pub store: Arc<dyn TodoStore>,
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/:id",
            patch(handlers::complete_todo).delete(handlers::delete_todo),
        )
        .layer(from_fn(metrics_middleware));

    with_request_tracing(router).with_state(state)
}

/// Opens the configured store. For MongoDB this connects and pings, so an
/// invalid URI or unreachable server aborts startup.
pub async fn connect_store(config: &TodoConfig) -> Result<Arc<dyn TodoStore>, AppError> {
    match config.store.backend {
        StoreBackend::Mongo => {
            let store = MongoTodoStore::connect(
                &config.mongodb.uri,
                &config.mongodb.database,
                &config.mongodb.collection,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory todo store; data is lost on restart");
            Ok(Arc::new(InMemoryTodoStore::new()))
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: TodoConfig) -> Result<Self, AppError> {
        let store = connect_store(&config).await?;
        Self::build_with_store(config, store).await
    }

    /// Binds the listener (port 0 picks a free port) around an existing store.
    pub async fn build_with_store(
        config: TodoConfig,
        store: Arc<dyn TodoStore>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(AppState { config, store });

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serves until `shutdown` resolves, letting in-flight requests finish.
    pub async fn run_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
