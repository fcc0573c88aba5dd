//! HTTP transport - maps routes onto registry operations.
//!
//! Uses axum for routing; the registry is passed in as router state.
//!
//! ## Routes
//!
//! - `GET /` - welcome message.
//! - `GET /health` - `{ "ok": true, "items": <count> }`.
//! - `GET /items`, `POST /items` - list, create.
//! - `GET|PUT|DELETE /items/:item_id` - read, replace, remove.
//!
//! Errors are JSON bodies of the form `{ "detail": "..." }`; see [`ApiError`].
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use item_registry::{http, registry::InMemoryRegistry};
//!
//! let app = http::router(Arc::new(InMemoryRegistry::new()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! ```

mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::registry::Registry;

pub use error::ApiError;

/// Build an axum `Router` serving the given registry.
pub fn router<R: Registry + 'static>(registry: Arc<R>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health::<R>))
        .route(
            "/items",
            get(handlers::list_items::<R>).post(handlers::create_item::<R>),
        )
        .route(
            "/items/:item_id",
            get(handlers::get_item::<R>)
                .put(handlers::update_item::<R>)
                .delete(handlers::delete_item::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}
