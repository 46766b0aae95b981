use crate::error::{ApiError, ErrorResponse};
use crate::models::{Todo, TodoUpdate};
use crate::routes;
use crate::state::AppState;
use crate::store::find_by_id_mut;
use crate::extract::JsonBody;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PUT /todos/{id} handler - Partially update a todo
///
/// Only the fields present in the body are changed; `{}` is a valid no-op
/// update. A provided title obeys the same 1-200 character rule as create,
/// and is checked before the collection is loaded.
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo identifier")
    ),
    request_body = TodoUpdate,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Invalid title or body", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<TodoUpdate>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    payload.validate()?;

    let _guard = state.store.lock().await;
    let mut todos = state.store.load().await?;

    let todo = find_by_id_mut(&mut todos, &id).ok_or_else(|| ApiError::TodoNotFound(id.clone()))?;
    payload.apply_to(todo);
    let updated = todo.clone();

    state.store.save(&todos).await?;

    tracing::info!("Updated todo with id: {}", id);
    Ok((StatusCode::OK, Json(updated)))
}
