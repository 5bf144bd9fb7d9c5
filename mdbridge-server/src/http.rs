//! HTTP routes and handlers for the bridge server.
//!
//! Routing is deliberately not path-sensitive: a POST to any path submits
//! content, a GET to any path fetches the rendered document. The editor-side
//! clients that post here are configured with a bare host:port and should
//! not care about paths. `/health` is the single carve-out, serving a JSON
//! liveness probe.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/", get(fetch).post(submit))
        // Any other path gets the same fetch/submit semantics.
        .fallback(any_path)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "mdbridge-server"
    }))
}

/// Method-dispatching fallback so that every path behaves like `/`.
async fn any_path(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    match method {
        Method::GET => fetch(State(state)).await.into_response(),
        // HEAD gets the same headers as GET with the body stripped; the
        // registered `get()` route does this automatically, the fallback
        // has to do it by hand.
        Method::HEAD => {
            let mut response = fetch(State(state)).await.into_response();
            *response.body_mut() = Body::empty();
            response
        }
        Method::POST => submit(State(state), body).await.into_response(),
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

/// Submit: overwrite the snapshot and replace the rendered cache.
///
/// The body is decoded best-effort: invalid UTF-8 sequences are replaced,
/// never rejected. The response carries no body.
async fn submit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, (StatusCode, String)> {
    let text = String::from_utf8_lossy(&body).into_owned();

    // Hold the write guard across save + cache swap so concurrent
    // submissions are serialized.
    let mut cache = state.cache.write().await;
    if let Err(e) = state.store.save(&text) {
        error!("Submit failed: {}", e);
        return Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)));
    }
    *cache = Some(state.renderer.render_page(&text));

    info!(bytes = body.len(), "content submitted");
    Ok(StatusCode::OK)
}

/// Fetch: return the cached document, populating it from disk on first use.
async fn fetch(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    if let Some(page) = state.cache.read().await.clone() {
        return Ok(Html(page));
    }

    let mut cache = state.cache.write().await;
    // Another request may have populated the cache while we waited.
    if let Some(page) = cache.clone() {
        return Ok(Html(page));
    }

    let page = match state.store.load() {
        Ok(Some(text)) => state.renderer.render_page(&text),
        Ok(None) => state.renderer.placeholder_page(),
        Err(e) => {
            error!("Fetch failed: {}", e);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)));
        }
    };
    *cache = Some(page.clone());
    Ok(Html(page))
}
