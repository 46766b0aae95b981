use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::find_by_id;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /todos/{id} handler - Remove a todo
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo identifier")
    ),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.store.lock().await;
    let mut todos = state.store.load().await?;

    if find_by_id(&todos, &id).is_none() {
        return Err(ApiError::TodoNotFound(id));
    }
    todos.retain(|todo| todo.id != id);
    state.store.save(&todos).await?;

    tracing::info!("Deleted todo with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
