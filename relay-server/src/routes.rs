use crate::state::AppState;
use crate::{assets, health};

use crate::api::chat::relay_chat;
use crate::api::identity::identity::{link_line_email, lookup_line_user, receive_webhook};
use crate::api::reminders::reminders::{check_reminders, submit_reminder};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Generation payloads can carry inline media, so allow up to 5 MiB
const JSON_BODY_LIMIT: usize = 5 * 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Liveness / health
        .route("/", get(health::liveness))
        .route("/health", get(health::health_check))
        // Front-end service worker
        .route("/sw.js", get(assets::service_worker))
        // Relay endpoints
        .route("/api/chat", post(relay_chat))
        // Identity links
        .route("/api/line-user", get(lookup_line_user))
        .route("/api/line-webhook", post(receive_webhook))
        .route("/api/link-line-email", post(link_line_email))
        // Reminders
        .route("/api/reminder", post(submit_reminder))
        .route("/api/check-reminders", get(check_reminders));

    // Static assets with SPA fallback, when a front-end dir is configured
    let router = match state.static_dir.clone() {
        Some(dir) => router.fallback_service(assets::static_service(&dir)),
        None => router,
    };

    router
        .with_state(state)
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        // CORS middleware (front-end may be served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
