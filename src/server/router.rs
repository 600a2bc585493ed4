//! Application state and top-level router assembly.

use std::time::Instant;

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::db::DbActorHandle;
use crate::server::routes::books;

const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Upper bound on a client-supplied request id; anything longer is replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Shared per-request state, handed to the router explicitly.
///
/// Cloning is cheap: the storage handle is an actor reference.
#[derive(Clone)]
pub struct ShelfState {
    pub books: DbActorHandle,
    pub track_progress: bool,
}

impl ShelfState {
    pub fn new(books: DbActorHandle, config: &Config) -> Self {
        Self {
            books,
            track_progress: config.books.track_progress,
        }
    }
}

/// Build the application router: book routes, a plain 404 fallback and the
/// access log layer, all over the given state.
pub fn shelf_router(state: ShelfState) -> Router {
    Router::new()
        .merge(books::router(state.track_progress))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// One log line per request, tagged with a request id.
///
/// A client-supplied `x-request-id` is kept (within limits) so upstream
/// proxies can correlate; otherwise a fresh id is generated. The id is
/// echoed on the response either way.
async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(generate_request_id, str::to_owned);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;
    let path = uri.path();

    if resp.status().is_server_error() {
        error!(
            status,
            request_id = %request_id,
            method = %method,
            path = %path,
            latency_ms,
            user_agent = %user_agent,
            "request"
        );
    } else if resp.status().is_client_error() {
        warn!(
            status,
            request_id = %request_id,
            method = %method,
            path = %path,
            latency_ms,
            user_agent = %user_agent,
            "request"
        );
    } else {
        info!(
            status,
            request_id = %request_id,
            method = %method,
            path = %path,
            latency_ms,
            user_agent = %user_agent,
            "request"
        );
    }

    resp
}

/// 96 random bits, base64url without padding (16 chars).
fn generate_request_id() -> String {
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
