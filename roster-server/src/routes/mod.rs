use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::{
    AppState,
    handlers::{pages, user_handlers},
};

/// Create the application router.
///
/// The collection endpoints live at `/users/` with the trailing slash, the
/// path the registry has always exposed.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index_handler))
        .route("/users/", post(user_handlers::create_user_handler))
        .route("/users/", get(user_handlers::list_users_handler))
        .route("/users/{id}", put(user_handlers::update_user_handler))
        .route("/users/{id}", delete(user_handlers::delete_user_handler))
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
