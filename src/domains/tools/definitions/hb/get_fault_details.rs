//! `get_fault_details` tool definition.
//!
//! Fetches notice records for one fault via
//! `/projects/<id>/faults/<fault_id>/notices`. The fault id is a path
//! component, never a query parameter; notices always come back ordered by
//! creation time descending and this is not configurable.

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
use crate::domains::tools::ToolError;

fn default_limit() -> u32 {
    1
}

/// Parameters for the get fault details tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFaultDetailsParams {
    /// The fault to fetch notices for.
    #[schemars(description = "The fault ID to get details for")]
    pub fault_id: String,

    /// Only notices created after this Unix timestamp.
    #[serde(default)]
    #[schemars(description = "A Unix timestamp (number of seconds since the epoch)")]
    pub created_after: Option<i64>,

    /// Only notices created before this Unix timestamp.
    #[serde(default)]
    #[schemars(description = "A Unix timestamp (number of seconds since the epoch)")]
    pub created_before: Option<i64>,

    /// Maximum number of notices to return.
    #[serde(default = "default_limit")]
    #[schemars(
        range(max = 25),
        description = "Number of results to return (max 25, default 1)"
    )]
    pub limit: u32,
}

/// Query-string filters for the notices endpoint. The fault id stays out of
/// this set by construction.
#[derive(Debug, Serialize)]
struct NoticeFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    created_after: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_before: Option<i64>,
    limit: u32,
}

impl From<&GetFaultDetailsParams> for NoticeFilters {
    fn from(params: &GetFaultDetailsParams) -> Self {
        Self {
            created_after: params.created_after,
            created_before: params.created_before,
            limit: params.limit,
        }
    }
}

/// Get fault details tool - queries `/projects/<id>/faults/<fault_id>/notices`.
pub struct GetFaultDetailsTool;

impl GetFaultDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_fault_details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed notice information for a specific fault. Results are always ordered by creation time descending.";

    /// Execute the tool logic.
    ///
    /// An empty fault id is rejected here, before any network call is issued;
    /// the schema layer already requires the field, this guards against blank
    /// values that would produce a malformed request.
    pub async fn execute(params: &GetFaultDetailsParams, session: &Session) -> CallToolResult {
        if params.fault_id.trim().is_empty() {
            return error_result(
                ToolError::invalid_arguments("fault_id must not be empty").to_string(),
            );
        }

        info!("Fetching notices for fault {}", params.fault_id);

        let filters = NoticeFilters::from(params);
        let segments = ["faults", params.fault_id.as_str(), "notices"];
        match fetch_project_resource(session, &segments, &filters).await {
            Ok(payload) => payload_result("notices", payload),
            Err(e) => error_result(e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        session: Arc<Session>,
    ) -> Result<serde_json::Value, String> {
        let params: GetFaultDetailsParams =
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
            input_schema: cached_schema_for_type::<GetFaultDetailsParams>(),
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
                let params: GetFaultDetailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &session).await)
            }
            .boxed()
        })
    }
}
