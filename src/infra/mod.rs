pub mod config;
pub mod http_app;
pub mod logging;
pub mod boot;
pub mod runtime {
    pub mod mcp_transport;
}
