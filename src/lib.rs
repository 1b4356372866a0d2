//! DateTime MCP Server
//!
//! A date/time utility server implementing the Model Context Protocol (MCP)
//! over line-delimited JSON-RPC 2.0 on stdin/stdout.
//!
//! # Features
//!
//! - **5 MCP Tools**: current datetime, UTC timestamp, day arithmetic,
//!   weekend check, ISO week number
//! - **Never fails a date tool**: unknown timezones and unparsable dates
//!   fall back to the defaults
//! - **Clean stdout**: logging goes to stderr and is off unless enabled
//!
//! # Modules
//!
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `server`: request routing and the stdio transport loop
//! - `tools`: the closed tool catalog and dispatcher
//! - `calendar`: date/time computations
//! - `types`: tool result structures
//! - `config`: environment-based configuration
//! - `error`: tool error type
//!
//! # Example
//!
//! ```no_run
//! use datetime_mcp::{McpServer, ServerConfig};
//!
//! fn main() {
//!     let config = ServerConfig::from_env();
//!     let server = McpServer::with_config(&config);
//!     server.run().unwrap();
//! }
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod types;

// Re-export commonly used items at crate root
pub use calendar::Calendar;
pub use config::ServerConfig;
pub use error::{ToolError, ToolResult};
pub use protocol::{McpTool, Response, ServerInfo, Tool};
pub use server::McpServer;
pub use tools::{ToolArguments, ToolName};
pub use types::{CurrentDateTime, DayShift, McpResult, WeekNumber, WeekendCheck};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
