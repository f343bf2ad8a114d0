//! HTTP front door: landing page for browsers, MCP transport for everyone else.
//!
//! Only `/sse` and `/sse/message` are served. On those paths every response,
//! including preflights and panics, carries permissive CORS headers; any other
//! path is a bare 404.

use std::any::Any;
use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::any_service,
    Router,
};
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tower::Service;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::core::error::RouteError;
use crate::core::landing::render_landing_page;
use crate::domain::{Profile, MB_CROSIER};
use crate::infra::runtime::mcp_transport::{self, SsePaths};
use crate::tools::profile::profile_factory;

pub const SSE_PATH: &str = "/sse";
pub const MESSAGE_PATH: &str = "/sse/message";

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type,Authorization";

/// Production app: the shipped profile behind rmcp's HTTP+SSE transport.
///
/// Needs a running Tokio runtime. Cancelling `ct` ends every open SSE stream.
pub fn build_app(bind: SocketAddr, ct: CancellationToken) -> Router {
    let paths = SsePaths { stream: SSE_PATH, message: MESSAGE_PATH };
    let mcp_service = mcp_transport::make_sse_service(profile_factory, paths, bind, ct);
    build_app_with_transport(&MB_CROSIER, mcp_service)
}

/// Router around an arbitrary protocol transport. Both protocol paths share
/// the one transport instance (and so its sessions).
pub fn build_app_with_transport<T>(profile: &'static Profile, transport: T) -> Router
where
    T: Service<Request, Error = Infallible> + Clone + Send + 'static,
    T::Response: IntoResponse + 'static,
    T::Future: Send + 'static,
{
    let protocol = Router::new()
        .route_service(SSE_PATH, any_service(transport.clone()))
        .route_service(MESSAGE_PATH, any_service(transport))
        // Innermost first: negotiate runs inside the panic guard, CORS wraps both.
        .route_layer(middleware::from_fn_with_state(profile, negotiate))
        .route_layer(CatchPanicLayer::custom(handle_panic))
        .route_layer(middleware::from_fn(cors))
        .fallback(not_found);
    with_app_layers(protocol)
}

/// App-wide guards: a CORS-less 500 for panics outside the protocol routes,
/// and request tracing.
fn with_app_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Preflight and browser handling ahead of the transport.
async fn negotiate(State(profile): State<&'static Profile>, req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    if req.uri().path() == SSE_PATH && accepts_html(req.headers()) {
        tracing::debug!("serving landing page");
        return landing_page(profile);
    }
    next.run(req).await
}

async fn cors(req: Request, next: Next) -> Response {
    let mut resp = next.run(req).await;
    apply_cors(resp.headers_mut());
    resp
}

async fn not_found() -> RouteError {
    RouteError::NotFound
}

/// Overwrites any CORS headers already present.
pub fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

/// True when any `Accept` header value mentions `text/html`.
pub fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.contains("text/html"))
}

fn landing_page(profile: &Profile) -> Response {
    (
        [(header::CONTENT_TYPE, "text/html")],
        render_landing_page(profile, Utc::now()),
    )
        .into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic".to_owned()
    };
    RouteError::Internal(detail).into_response()
}
