use std::any::Any;

use axum::Json;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::errors::AppError;
use crate::handlers::{health, movies};
use crate::state::AppState;

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/healthcheck", get(health::healthcheck_handler))
        .route(
            "/v1/movies",
            get(movies::list_movies_handler).post(movies::create_movie_handler),
        )
        .route(
            "/v1/movies/{id}",
            get(movies::show_movie_handler)
                .patch(movies::update_movie_handler)
                .delete(movies::delete_movie_handler),
        )
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        // Outermost: panics anywhere below still produce a well-formed 500.
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn not_found_handler() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed_handler(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}

/// Last-resort safety net: log the panic payload and answer with the
/// opaque 500 envelope, closing the connection rather than leaving it
/// half-written.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONNECTION, "close")],
        Json(json!({
            "error": "the server encountered a problem and could not process your request"
        })),
    )
        .into_response()
}
