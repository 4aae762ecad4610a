//! HTTP surface of the task tracker.
//!
//! Routes:
//!
//! - `POST /api/tasks` creates a task
//! - `GET /api/tasks` lists tasks, newest first
//! - `GET /api/tasks/{id}` fetches one task
//! - `PATCH /api/tasks/{id}` toggles completion
//! - `GET /health` reports liveness
//!
//! Every other path answers `404 {"error":"Route not found"}` unless a
//! static directory is configured and holds a matching file.

mod error;
pub mod handlers;
mod server;

pub use error::{ApiError, ErrorBody, INTERNAL_ERROR_MESSAGE};
pub use server::serve;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::{HeaderName, Method, header},
    response::{IntoResponse, Response},
    routing::get,
};
use mockable::Clock;
use std::any::Any;
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};

/// Builds the task API router.
pub fn create_api_router<R, C>(service: TaskLifecycleService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/api/tasks/{id}",
            get(handlers::get_task::<R, C>).patch(handlers::toggle_task::<R, C>),
        )
        .route("/health", get(handlers::health))
        .method_not_allowed_fallback(handlers::route_not_found)
        .with_state(Arc::new(service))
}

/// Builds the full application: API routes, optional static files, CORS,
/// request tracing and panic containment.
pub fn create_router<R, C>(
    service: TaskLifecycleService<R, C>,
    static_dir: Option<&Path>,
) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let api_router = create_api_router(service);

    let router = if let Some(dir) = static_dir {
        let serve_dir = ServeDir::new(dir)
            .call_fallback_on_method_not_allowed(true)
            .not_found_service(handlers::route_not_found.into_service());
        api_router.fallback_service(serve_dir)
    } else {
        api_router.fallback(handlers::route_not_found)
    };

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    ApiError::internal(format!("handler panicked: {detail}")).into_response()
}
