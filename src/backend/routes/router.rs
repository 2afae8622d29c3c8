/**
 * Router Configuration
 *
 * Combines the route modules into one Axum router and applies the
 * cross-cutting layers.
 *
 * # Route Order
 *
 * 1. `/api` and `/api/` - service banner
 * 2. `/api/chat` - live chat REST endpoints
 * 3. `/api` - everything else in the JSON API
 * 4. `/ws` - live chat websocket
 * 5. Fallback - JSON 404
 *
 * # Layers
 *
 * - `TraceLayer` logs every request through `tracing`
 * - `CorsLayer` allows the configured origins with credentials, so the
 *   browser sends the session cookie cross-origin
 */
use axum::http::{HeaderValue, StatusCode};
use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::health::root;
use crate::backend::routes::api_routes::api_routes;
use crate::backend::routes::chat_routes::{chat_api_routes, chat_socket_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config.cors_origins);

    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .nest("/api/chat", chat_api_routes())
        .nest("/api", api_routes())
        .nest("/ws", chat_socket_routes())
        .fallback(|| async { BackendError::handler(StatusCode::NOT_FOUND, "Not found") })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// CORS for the configured origins
///
/// `*` mirrors the request origin: a literal wildcard cannot be combined
/// with credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
