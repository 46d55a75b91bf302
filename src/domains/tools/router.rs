//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its
//! own route; the shared Honeybadger session is injected into every route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::Session;

use super::definitions::{GetFaultDetailsTool, ListFaultsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(session: Arc<Session>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetFaultDetailsTool::create_route(session.clone()))
        .with_route(ListFaultsTool::create_route(session))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_session() -> Arc<Session> {
        Arc::new(Session::new("proj_42", "hbp_test_key").unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_session());
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_faults"));
        assert!(names.contains(&"get_fault_details"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let session = test_session();
        let registry = ToolRegistry::new(session.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(session);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
