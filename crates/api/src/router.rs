//! Application router: route tree plus the middleware stack.
//!
//! `main.rs` and `tests/common/mod.rs` both go through [`build_app_router`],
//! so tests see the same CORS, request-id, timeout and panic handling as
//! the running server.

use std::time::Duration;

use anyhow::{bail, Context};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Preflight responses may be cached by browsers for this long.
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the complete, state-bound application router.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> anyhow::Result<Router> {
    let router = with_middleware(app_routes(), config)?;
    Ok(router.with_state(state))
}

/// `/health` at the root, everything else under `/api/v1`.
fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
}

/// Wrap `router` in the middleware stack.
///
/// Layers added later run first, so a request passes through CORS, request
/// id assignment, tracing, request id propagation, the timeout and finally
/// panic recovery before reaching a handler.
fn with_middleware(
    router: Router<AppState>,
    config: &ServerConfig,
) -> anyhow::Result<Router<AppState>> {
    let cors = build_cors_layer(config)?;
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let tracing = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(tracing)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors))
}

/// CORS for the configured browser origins.
///
/// Credentials are allowed, so every origin must be listed explicitly: a
/// `*` entry or an origin that is not a valid header value is a startup
/// error.
pub fn build_cors_layer(config: &ServerConfig) -> anyhow::Result<CorsLayer> {
    let mut origins = Vec::with_capacity(config.cors_origins.len());
    for origin in &config.cors_origins {
        if origin == "*" {
            bail!("CORS_ORIGINS may not contain '*' when credentials are allowed");
        }
        let value = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid CORS origin '{origin}'"))?;
        origins.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE))
}
