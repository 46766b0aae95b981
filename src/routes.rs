// Route path constants - single source of truth for all API paths.
// Everything below is mounted under the configured API prefix.

use axum::{
    http::HeaderValue,
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const HEALTH_SLASH: &str = "/health/";
pub const TODOS: &str = "/todos";
pub const TODOS_SLASH: &str = "/todos/";
pub const TODO_ITEM: &str = "/todos/{id}";
pub const TODO_TOGGLE: &str = "/todos/{id}/toggle";

pub const DOCS: &str = "/docs";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router: API routes under the configured
/// prefix, Swagger UI at the root, CORS and request tracing on everything.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(HEALTH_SLASH, get(handlers::health_handler))
        .route(
            TODOS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            TODOS_SLASH,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            TODO_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .route(TODO_TOGGLE, patch(handlers::toggle_handler));

    let prefix = state.config.api_prefix.clone();
    let api = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(&prefix, api)
    };

    let mut openapi = ApiDoc::openapi();
    if !prefix.is_empty() {
        openapi.servers = Some(vec![Server::new(prefix)]);
    }

    let cors = build_cors(&state.config.cors_allowed_origins);

    api.merge(SwaggerUi::new(DOCS).url(OPENAPI_JSON, openapi))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Credentials are allowed, so methods and headers are mirrored from the
/// request instead of using a wildcard.
fn build_cors(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::{ErrorResponse, HealthResponse};
    use crate::models::Todo;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn setup_test_app(dir: &TempDir, api_prefix: &str) -> Router {
        let config = Config {
            data_file: dir.path().join("todos.json"),
            api_prefix: api_prefix.to_string(),
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
            service_port: 8000,
            service_host: "127.0.0.1".to_string(),
        };
        build_router(AppState::new(config))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_buy_milk_scenario() {
        let dir = TempDir::new().unwrap();
        let app = setup_test_app(&dir, "/api");

        let (status, body) = send(&app, "POST", "/api/todos", Some(r#"{"title":"Buy milk"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Todo = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.title, "Buy milk");
        assert!(!created.completed);

        let (status, body) =
            send(&app, "PATCH", &format!("/api/todos/{}/toggle", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let toggled: Todo = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            toggled,
            Todo {
                id: created.id.clone(),
                title: "Buy milk".to_string(),
                completed: true,
            }
        );

        let (status, body) = send(&app, "DELETE", &format!("/api/todos/{}", created.id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, body) = send(&app, "GET", &format!("/api/todos/{}", created.id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.detail, "Todo not found");
    }

    #[tokio::test]
    async fn test_trailing_slash_routes() {
        let dir = TempDir::new().unwrap();
        let app = setup_test_app(&dir, "/api");

        let (status, _) = send(&app, "POST", "/api/todos/", Some(r#"{"title":"slash"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "GET", "/api/todos/", None).await;
        assert_eq!(status, StatusCode::OK);
        let todos: Vec<Todo> = serde_json::from_slice(&body).unwrap();
        assert_eq!(todos.len(), 1);

        let (status, body) = send(&app, "GET", "/api/health/", None).await;
        assert_eq!(status, StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_body_decoding_ignores_content_type() {
        let dir = TempDir::new().unwrap();
        let app = setup_test_app(&dir, "/api");

        let raw = |method: &str, uri: &str, body: &'static str| {
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::from(body))
                .unwrap()
        };

        let response = app
            .clone()
            .oneshot(raw("POST", "/api/todos", r#"{"title":"x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(raw("POST", "/api/todos", "{invalid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = app
            .oneshot(raw("PUT", "/api/todos/x", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_routes_require_prefix() {
        let dir = TempDir::new().unwrap();
        let app = setup_test_app(&dir, "/api");

        let (status, _) = send(&app, "GET", "/todos", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_prefix_mounts_at_root() {
        let dir = TempDir::new().unwrap();
        let app = setup_test_app(&dir, "");

        let (status, _) = send(&app, "GET", "/todos", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let dir = TempDir::new().unwrap();
        let app = setup_test_app(&dir, "/api");

        let (status, body) = send(&app, "GET", OPENAPI_JSON, None).await;
        assert_eq!(status, StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["paths"].get("/todos/{id}/toggle").is_some());
        assert_eq!(doc["servers"][0]["url"], "/api");
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let dir = TempDir::new().unwrap();
        let app = setup_test_app(&dir, "/api");

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/todos")
                    .header("origin", "http://localhost:5173")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            headers.get("access-control-allow-credentials").unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_cors_rejects_unknown_origin() {
        let dir = TempDir::new().unwrap();
        let app = setup_test_app(&dir, "/api");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/todos")
                    .header("origin", "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
