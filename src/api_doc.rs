use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{Todo, TodoCreate, TodoUpdate};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "1.0.0",
        description = "A minimal todo list API backed by a JSON file"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler,
        handlers::toggle::toggle_handler
    ),
    components(
        schemas(
            Todo,
            TodoCreate,
            TodoUpdate,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "todos", description = "Todo item operations")
    )
)]
pub struct ApiDoc;
