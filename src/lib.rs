//! Personal MCP server: three profile tools over HTTP+SSE or stdio,
//! plus an HTML landing page for browsers.

pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
