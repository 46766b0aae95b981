use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /todos handler - List all todos
///
/// Returns the whole collection in storage order (creation order, minus
/// deletions). There is no filtering or pagination.
#[utoipa::path(
    get,
    path = routes::TODOS,
    responses(
        (status = 200, description = "All todos", body = Vec<Todo>),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Todo>>), ApiError> {
    let todos = {
        let _guard = state.store.lock().await;
        state.store.load().await?
    };

    tracing::info!("Listed {} todos", todos.len());
    Ok((StatusCode::OK, Json(todos)))
}
