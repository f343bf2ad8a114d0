//! MCP transports for a `(handler, tools)` factory: HTTP+SSE for remote
//! clients, stdio for local ones.
//!
//! The SSE flow: `GET <stream>` opens an event stream whose first event is
//! `endpoint`, carrying `<message>?sessionId=<id>`. Clients POST JSON-RPC frames
//! there (answered `202 Accepted`) and read replies off the stream.

use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::{any_service, MethodRouter};
use rmcp::handler::server::router::Router as McpRouter;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::serve_server;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tokio_util::sync::CancellationToken;

pub use rmcp::ServerHandler;

const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);

/// Where the SSE transport listens, relative to the HTTP root.
#[derive(Debug, Clone, Copy)]
pub struct SsePaths {
    pub stream: &'static str,
    pub message: &'static str,
}

/// Start rmcp's SSE server and hand back its HTTP side as a routable service.
///
/// Each SSE connection gets a fresh handler from `factory`. Must be called
/// inside a Tokio runtime: the session acceptor is spawned immediately and
/// runs until `ct` is cancelled, which also closes open streams.
pub fn make_sse_service<H>(
    factory: impl Fn() -> (H, ToolRouter<H>) + Send + 'static,
    paths: SsePaths,
    bind: SocketAddr,
    ct: CancellationToken,
) -> MethodRouter
where
    H: ServerHandler,
{
    let config = SseServerConfig {
        bind,
        sse_path: paths.stream.to_owned(),
        post_path: paths.message.to_owned(),
        ct,
        sse_keep_alive: Some(SSE_KEEP_ALIVE),
    };
    tracing::debug!(stream = paths.stream, message = paths.message, "starting SSE transport");
    let (sse_server, http_side) = SseServer::new(config);
    sse_server.with_service(move || {
        let (handler, tools) = factory();
        tracing::debug!("new SSE session");
        McpRouter::new(handler).with_tools(tools)
    });
    any_service(http_side)
}

/// Serve the handler over stdin/stdout until the client hangs up.
pub async fn serve_stdio<H>(
    factory: impl FnOnce() -> (H, ToolRouter<H>),
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    H: ServerHandler,
{
    let (handler, tools) = factory();
    let service = McpRouter::new(handler).with_tools(tools);
    let running = serve_server(service, (tokio::io::stdin(), tokio::io::stdout())).await?;
    let reason = running.waiting().await?;
    tracing::info!(?reason, "stdio session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::profile::{profile_factory, ProfileSvc};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    const PATHS: SsePaths = SsePaths { stream: "/events", message: "/events/post" };

    fn bind() -> SocketAddr {
        ([127, 0, 0, 1], 0).into()
    }

    #[tokio::test]
    async fn unknown_session_is_rejected() {
        let ct = CancellationToken::new();
        let svc = make_sse_service(profile_factory, PATHS, bind(), ct.clone());
        let req = Request::builder()
            .method("POST")
            .uri("/events/post?sessionId=nope")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#))
            .unwrap();
        let resp = svc.oneshot(req).await.unwrap();
        assert!(resp.status().is_client_error(), "got {}", resp.status());
        assert_ne!(resp.status(), StatusCode::ACCEPTED);
        ct.cancel();
    }

    #[tokio::test]
    async fn stream_path_opens_an_event_stream() {
        let ct = CancellationToken::new();
        let svc = make_sse_service(profile_factory, PATHS, bind(), ct.clone());
        let req = Request::builder()
            .method("GET")
            .uri("/events")
            .header(header::ACCEPT, "text/event-stream")
            .body(Body::empty())
            .unwrap();
        let resp = svc.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/event-stream"), "got {content_type}");
        ct.cancel();
    }

    #[test]
    fn profile_svc_is_a_server_handler() {
        fn assert_server_handler<T: ServerHandler>(_handler: T) {}
        let (svc, _) = profile_factory();
        assert_server_handler::<ProfileSvc>(svc);
    }
}
