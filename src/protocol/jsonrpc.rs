//! JSON-RPC 2.0 protocol types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version carried in every envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// Malformed input line
pub const PARSE_ERROR: i32 = -32700;
/// Unrecognized method name
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Any failure while computing a result
pub const INTERNAL_ERROR: i32 = -32603;

fn default_version() -> String {
    JSONRPC_VERSION.to_string()
}

/// JSON-RPC 2.0 Request
#[derive(Deserialize, Debug, Clone)]
pub struct JsonRpcRequest {
    #[serde(default = "default_version")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Check if this is a notification (no id)
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// The id to echo back, `null` for notifications
    pub fn response_id(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }
}

/// JSON-RPC 2.0 Success Response
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub result: Value,
}

impl JsonRpcResponse {
    /// Create a new success response
    pub fn new(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

/// JSON-RPC 2.0 Error Response
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonRpcError {
    pub jsonrpc: String,
    pub id: Value,
    pub error: ErrorObject,
}

impl JsonRpcError {
    /// Create a new error response
    pub fn new(id: Value, code: i32, message: String, data: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: ErrorObject::new(code, message, data),
        }
    }

    /// Create a parse error response. The id is never recoverable here.
    pub fn parse_error(details: String) -> Self {
        Self::new(
            Value::Null,
            PARSE_ERROR,
            "Parse error".to_string(),
            Some(serde_json::json!({ "details": details })),
        )
    }

    /// Create a method not found error response
    pub fn method_not_found(id: Value, method: &str) -> Self {
        Self::new(id, METHOD_NOT_FOUND, format!("Method not found: {}", method), None)
    }

    /// Create an internal error response carrying the failure text as message
    pub fn internal_error(id: Value, message: String) -> Self {
        Self::new(id, INTERNAL_ERROR, message, None)
    }
}

/// JSON-RPC 2.0 Error Object
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    /// Create a new error object
    pub fn new(code: i32, message: String, data: Option<Value>) -> Self {
        Self {
            code,
            message,
            data,
        }
    }
}

/// Either a success or an error envelope, never both
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Success(JsonRpcResponse),
    Error(JsonRpcError),
}

impl Response {
    pub fn id(&self) -> &Value {
        match self {
            Response::Success(r) => &r.id,
            Response::Error(e) => &e.id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

impl From<JsonRpcResponse> for Response {
    fn from(r: JsonRpcResponse) -> Self {
        Response::Success(r)
    }
}

impl From<JsonRpcError> for Response {
    fn from(e: JsonRpcError) -> Self {
        Response::Error(e)
    }
}
