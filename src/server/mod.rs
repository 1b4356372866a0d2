//! MCP Server implementation
//!
//! This module contains the protocol engine that turns one parsed JSON-RPC
//! request into exactly one response. Framing lives in [`transport`].

mod handlers;
mod transport;

use serde_json::{json, Value};

use crate::calendar::Calendar;
use crate::config::ServerConfig;
use crate::error::{ToolError, ToolResult};
use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, Response, ServerInfo, PROTOCOL_VERSION,
};
use crate::tools::{call_tool, list_tools};

pub use handlers::*;

/// Stateless MCP server answering date/time tool requests
#[derive(Debug, Clone)]
pub struct McpServer {
    server_info: ServerInfo,
    calendar: Calendar,
}

impl McpServer {
    /// Create a new MCP server with default settings
    pub fn new() -> Self {
        Self::with_config(&ServerConfig::default())
    }

    /// Create a new MCP server from configuration
    pub fn with_config(config: &ServerConfig) -> Self {
        Self {
            server_info: config.server_info.clone(),
            calendar: config.calendar(),
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Route a single request. Never fails: errors become error responses.
    pub fn handle_request(&self, request: JsonRpcRequest) -> Response {
        let id = request.response_id();
        tracing::debug!(method = %request.method, id = %id, "handling request");

        match (request.method.as_str(), request.params) {
            ("initialize", _) => JsonRpcResponse::new(id, self.initialize_result()).into(),
            ("tools/list", _) => JsonRpcResponse::new(id, json!({ "tools": list_tools() })).into(),
            ("tools/call", Some(params)) => match self.handle_tool_call(&params) {
                Ok(result) => JsonRpcResponse::new(id, result).into(),
                Err(e) => {
                    tracing::debug!(error = %e, "tool call failed");
                    JsonRpcError::internal_error(id, e.to_string()).into()
                }
            },
            (method, _) => JsonRpcError::method_not_found(id, method).into(),
        }
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": self.server_info
        })
    }

    fn handle_tool_call(&self, params: &Value) -> ToolResult<Value> {
        let name = extract_tool_name(params).ok_or(ToolError::MissingToolName)?;
        let result = call_tool(&self.calendar, name, extract_arguments(params))?;
        content_response(result)
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}
