use std::future::Future;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};

use crate::domain::{Profile, MB_CROSIER};
use crate::infra::runtime::mcp_transport::ServerHandler;

/// MCP handler answering questions about one [`Profile`].
#[derive(Clone, Copy)]
pub struct ProfileSvc {
    pub profile: &'static Profile,
}

impl ProfileSvc {
    pub fn new(profile: &'static Profile) -> Self {
        Self { profile }
    }
}

impl ServerHandler for ProfileSvc {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.profile.server_name.to_owned();
        server_info.version = self.profile.server_version.to_owned();
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(format!(
                "Answers questions about {}: biography, contact email and social links.",
                self.profile.name
            )),
            ..Default::default()
        }
    }
}

#[rmcp::tool_router]
impl ProfileSvc {
    #[rmcp::tool(name = "get_bio", description = "Get a brief bio of MB Crosier.")]
    async fn get_bio(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        tracing::debug!("get_bio invoked");
        Ok(CallToolResult::success(vec![Content::text(self.profile.bio)]))
    }

    #[rmcp::tool(
        name = "get_contact_info",
        description = "Get the contact email for MB Crosier."
    )]
    async fn get_contact_info(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        tracing::debug!("get_contact_info invoked");
        Ok(CallToolResult::success(vec![Content::text(self.profile.contact)]))
    }

    #[rmcp::tool(
        name = "get_social_links",
        description = "Get social media links for MB Crosier."
    )]
    async fn get_social_links(&self) -> Result<CallToolResult, rmcp::ErrorData> {
        tracing::debug!("get_social_links invoked");
        Ok(CallToolResult::success(vec![Content::text(
            self.profile.social_links_pretty(),
        )]))
    }
}

pub type ProfileRouter = ToolRouter<ProfileSvc>;

impl ProfileSvc {
    pub fn router() -> ProfileRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}

/// `(handler, tools)` pair for the shipped profile, as the transports expect.
pub fn profile_factory() -> (ProfileSvc, ProfileRouter) {
    (ProfileSvc::new(&MB_CROSIER), ProfileSvc::router())
}
