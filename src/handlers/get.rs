use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use crate::store::find_by_id;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /todos/{id} handler - Retrieve a single todo
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo identifier")
    ),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todos = {
        let _guard = state.store.lock().await;
        state.store.load().await?
    };

    match find_by_id(&todos, &id) {
        Some(todo) => {
            tracing::info!("Retrieved todo with id: {}", id);
            Ok((StatusCode::OK, Json(todo.clone())))
        }
        None => Err(ApiError::TodoNotFound(id)),
    }
}
