//! Server configuration from environment variables
//!
//! | variable | meaning |
//! |---|---|
//! | `DATETIME_MCP_TIMEZONE` | default timezone (IANA id) |
//! | `DATETIME_MCP_LOG` | tracing filter, logging is off when unset |
//! | `DATETIME_MCP_SERVER_NAME` | name announced in the handshake |
//!
//! Without `DATETIME_MCP_TIMEZONE` the default timezone comes from `TZ`,
//! then from the host settings, then UTC.

use chrono_tz::Tz;

use crate::calendar::{host_timezone, parse_timezone, Calendar};
use crate::protocol::ServerInfo;

pub const TIMEZONE_VAR: &str = "DATETIME_MCP_TIMEZONE";
pub const LOG_VAR: &str = "DATETIME_MCP_LOG";
pub const SERVER_NAME_VAR: &str = "DATETIME_MCP_SERVER_NAME";

/// Immutable settings shared by every request
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub server_info: ServerInfo,
    pub default_timezone: Tz,
    /// `EnvFilter` directive for stderr logging
    pub log_filter: Option<String>,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to read variables
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_timezone = lookup(TIMEZONE_VAR)
            .and_then(|name| parse_timezone(&name))
            .or_else(|| lookup("TZ").and_then(|name| parse_timezone(&name)))
            .or_else(host_timezone)
            .unwrap_or(Tz::UTC);

        let mut server_info = ServerInfo::default();
        if let Some(name) = lookup(SERVER_NAME_VAR).filter(|n| !n.trim().is_empty()) {
            server_info.name = name;
        }

        let log_filter = lookup(LOG_VAR).filter(|f| !f.trim().is_empty());

        Self {
            server_info,
            default_timezone,
            log_filter,
        }
    }

    pub fn calendar(&self) -> Calendar {
        Calendar::new(self.default_timezone)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_info: ServerInfo::default(),
            default_timezone: Tz::UTC,
            log_filter: None,
        }
    }
}
