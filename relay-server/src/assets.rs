//! Front-end asset endpoints: the generated service worker and the
//! static-file service with SPA fallback.

use crate::state::AppState;

use std::path::Path;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tower_http::services::{ServeDir, ServeFile};

/// GET /sw.js
///
/// Served no-store so a cache-version bump in config reaches clients on
/// the next load instead of being trapped by its own cache.
pub async fn service_worker(State(state): State<AppState>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        state.cache_policy.render_service_worker(),
    )
        .into_response()
}

/// Static files with SPA fallback: unknown paths get index.html so
/// front-end routes survive a hard refresh.
pub fn static_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
