use crate::error::{ApiError, ErrorResponse};
use crate::models::{Todo, TodoCreate};
use crate::routes;
use crate::state::AppState;
use crate::extract::JsonBody;
use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// POST /todos handler - Create a todo
///
/// The title must be 1-200 characters. The new todo gets a fresh UUIDv4 id,
/// starts out not completed, and is appended to the end of the collection.
#[utoipa::path(
    post,
    path = routes::TODOS,
    request_body = TodoCreate,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 422, description = "Malformed body, missing or invalid title", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TodoCreate>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    payload.validate()?;

    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        title: payload.title,
        completed: false,
    };

    let _guard = state.store.lock().await;
    let mut todos = state.store.load().await?;
    todos.push(todo.clone());
    state.store.save(&todos).await?;

    tracing::info!("Created todo with id: {}", todo.id);
    Ok((StatusCode::CREATED, Json(todo)))
}
