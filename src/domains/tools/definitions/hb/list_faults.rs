//! `list_faults` tool definition.
//!
//! Lists faults for the configured Honeybadger project with optional
//! filtering. This is a direct filter pass-through: every present parameter
//! becomes a query-string entry, and ordering is delegated entirely to the
//! upstream service.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{error_result, fetch_project_resource, payload_result};
use crate::core::Session;

fn default_limit() -> u32 {
    25
}

/// Sort order for fault listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FaultOrder {
    /// Most recently occurred first.
    Recent,
    /// Most notifications first.
    #[default]
    Frequent,
}

/// Parameters for the list faults tool.
///
/// Optional fields that are unset are omitted from the query string entirely
/// (never sent as `key=` or `key=null`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFaultsParams {
    /// A search string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "A search string")]
    pub q: Option<String>,

    /// Only faults created after this Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "A Unix timestamp (number of seconds since the epoch)")]
    pub created_after: Option<i64>,

    /// Only faults that occurred after this Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "A Unix timestamp (number of seconds since the epoch)")]
    pub occurred_after: Option<i64>,

    /// Only faults that occurred before this Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "A Unix timestamp (number of seconds since the epoch)")]
    pub occurred_before: Option<i64>,

    /// Maximum number of faults to return.
    #[serde(default = "default_limit")]
    #[schemars(
        range(max = 25),
        description = "Number of results to return (max and default are 25)"
    )]
    pub limit: u32,

    /// Sort order for the results.
    #[serde(default)]
    #[schemars(
        description = "Order results by: 'recent' (most recently occurred first) or 'frequent' (most notifications first)"
    )]
    pub order: FaultOrder,
}

/// List faults tool - queries `/projects/<id>/faults`.
pub struct ListFaultsTool;

impl ListFaultsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_faults";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List faults from Honeybadger with optional filtering. Supports a free-text search string, creation/occurrence time windows, and ordering by most recent occurrence or by notification count.";

    /// Execute the tool logic.
    pub async fn execute(params: &ListFaultsParams, session: &Session) -> CallToolResult {
        info!("Listing faults for project {}", session.project_id());

        match fetch_project_resource(session, &["faults"], params).await {
            Ok(payload) => payload_result("faults", payload),
            Err(e) => error_result(e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        session: Arc<Session>,
    ) -> Result<serde_json::Value, String> {
        let params: ListFaultsParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))?;

        let result = Self::execute(&params, &session).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListFaultsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(session: Arc<Session>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let session = session.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: ListFaultsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &session).await)
            }
            .boxed()
        })
    }
}
