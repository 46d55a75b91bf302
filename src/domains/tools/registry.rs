//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::Session;

use super::definitions::{GetFaultDetailsTool, ListFaultsTool};

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    session: Arc<Session>,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the Honeybadger session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![GetFaultDetailsTool::NAME, ListFaultsTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![GetFaultDetailsTool::to_tool(), ListFaultsTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            GetFaultDetailsTool::NAME => {
                GetFaultDetailsTool::http_handler(arguments, self.session.clone()).await
            }
            ListFaultsTool::NAME => {
                ListFaultsTool::http_handler(arguments, self.session.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}
