use crate::infra::config::{Config, Mode};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        "BOOT profile-mcp-server"
    );

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == Mode::Stdio {
        crate::infra::runtime::mcp_transport::serve_stdio(crate::tools::profile::profile_factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let ct = CancellationToken::new();
    let app = crate::infra::http_app::build_app(addr, ct.clone());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening; landing page and MCP (HTTP+SSE) at /sse");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await?;
    Ok(())
}

/// Resolves on ctrl-c after cancelling `ct`, so open SSE streams end and the
/// graceful shutdown can complete.
async fn shutdown_signal(ct: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
    ct.cancel();
}
