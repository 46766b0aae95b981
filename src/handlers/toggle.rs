use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use crate::store::find_by_id_mut;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PATCH /todos/{id}/toggle handler - Flip a todo's completed flag
#[utoipa::path(
    patch,
    path = routes::TODO_TOGGLE,
    params(
        ("id" = String, Path, description = "Todo identifier")
    ),
    responses(
        (status = 200, description = "Todo toggled", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn toggle_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let _guard = state.store.lock().await;
    let mut todos = state.store.load().await?;

    let todo = find_by_id_mut(&mut todos, &id).ok_or_else(|| ApiError::TodoNotFound(id.clone()))?;
    todo.completed = !todo.completed;
    let toggled = todo.clone();

    state.store.save(&todos).await?;

    tracing::info!("Toggled todo {} to completed={}", id, toggled.completed);
    Ok((StatusCode::OK, Json(toggled)))
}
