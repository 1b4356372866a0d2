//! Error types for tool dispatch
//!
//! Every variant surfaces to the client as a JSON-RPC internal error whose
//! message is the variant's display text.

use thiserror::Error;

/// Failure while resolving or executing a tools/call request
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Missing tool name")]
    MissingToolName,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: expected an object")]
    InvalidArguments,

    #[error("Invalid value for '{name}': expected {expected}")]
    InvalidArgument { name: String, expected: &'static str },

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for tool operations
pub type ToolResult<T> = std::result::Result<T, ToolError>;
