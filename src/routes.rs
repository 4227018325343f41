//! HTTP router.
//!
//! Shared by `main.rs` and the integration tests so both run the exact same
//! routes and middleware stack.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{db::DbPool, handlers, middleware};

/// Build the application router.
///
/// # Layers (innermost first)
///
/// 1. `CatchPanicLayer` turns a panicking handler into a plain 500
/// 2. `map_response` converts every error response into the JSON envelope
/// 3. `TraceLayer` records a span per request
/// 4. `CorsLayer` allows any origin
pub fn router(pool: DbPool) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Album routes
        .route("/albums", post(handlers::albums::post_album))
        .route(
            "/albums/{id}",
            get(handlers::albums::get_album_by_id)
                .put(handlers::albums::put_album_by_id)
                .delete(handlers::albums::delete_album_by_id),
        )
        // Song routes
        .route(
            "/songs",
            post(handlers::songs::post_song).get(handlers::songs::get_songs),
        )
        .route(
            "/songs/{id}",
            get(handlers::songs::get_song_by_id)
                .put(handlers::songs::put_song_by_id)
                .delete(handlers::songs::delete_song_by_id),
        )
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::new())
        .layer(axum_middleware::from_fn(
            middleware::response_mapper::map_response,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Share database pool with all handlers via State extraction
        .with_state(pool)
}
