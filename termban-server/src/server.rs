//! REST API surface: router, handlers, and server startup.
//!
//! Four endpoints, matching what the termban client speaks:
//!
//! - `GET /api/tasks` -- full collection as a JSON array
//! - `POST /api/tasks` -- create (or replace by id) a task
//! - `DELETE /api/tasks/{id}` -- remove a task, idempotent
//! - `POST /api/reset-tasks` -- restore the default fixture

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{delete, get, post};

use crate::store::{BoardStore, NewTask};

/// GET /api/tasks
async fn list_tasks(State(store): State<Arc<BoardStore>>) -> impl IntoResponse {
    Json(store.list().await)
}

/// POST /api/tasks
///
/// `201 Created` with the stored task on success; `422` when the content
/// is blank.
async fn create_task(
    State(store): State<Arc<BoardStore>>,
    Json(body): Json<NewTask>,
) -> impl IntoResponse {
    match store.insert(body).await {
        Some(task) => {
            tracing::debug!(task_id = %task.id, "task created");
            (StatusCode::CREATED, Json(task)).into_response()
        }
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": "content must not be blank" })),
        )
            .into_response(),
    }
}

/// DELETE /api/tasks/{id}
///
/// Always `204`: deleting an id that is already gone is not an error.
async fn delete_task(
    State(store): State<Arc<BoardStore>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let existed = store.remove(&id).await;
    tracing::debug!(task_id = %id, existed, "task delete");
    StatusCode::NO_CONTENT
}

/// POST /api/reset-tasks
async fn reset_tasks(State(store): State<Arc<BoardStore>>) -> impl IntoResponse {
    let tasks = store.reset().await;
    tracing::info!(count = tasks.len(), "board reset to defaults");
    StatusCode::NO_CONTENT
}

/// Builds the API router over a shared store.
#[must_use]
pub fn router(store: Arc<BoardStore>) -> axum::Router {
    axum::Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", delete(delete_task))
        .route("/api/reset-tasks", post(reset_tasks))
        .with_state(store)
}

/// Starts the server with a fixture-seeded store.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server(
    addr: &str,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    start_server_with_state(addr, Arc::new(BoardStore::new())).await
}

/// Starts the server with a pre-built [`BoardStore`].
///
/// Binds the listener before spawning, so passing port `0` yields an
/// OS-assigned port in the returned address. Used by tests to run an
/// in-process backend.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server_with_state(
    addr: &str,
    store: Arc<BoardStore>,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "server error");
        }
    });

    Ok((bound_addr, handle))
}
