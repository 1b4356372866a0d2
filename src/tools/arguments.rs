//! Typed access to the untyped `arguments` bag of a tools/call request

use serde_json::{Map, Value};

use crate::error::{ToolError, ToolResult};

/// Arguments passed to a tool, keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    values: Map<String, Value>,
}

impl ToolArguments {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Build from the raw `arguments` value; absent or null means empty
    pub fn from_value(value: Option<Value>) -> ToolResult<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(values)) => Ok(Self::new(values)),
            Some(_) => Err(ToolError::InvalidArguments),
        }
    }

    /// Present, non-null value for `name`
    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    /// Optional string parameter. A non-string value is a coercion error.
    pub fn get_str(&self, name: &str) -> ToolResult<Option<&str>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(invalid(name, "a string")),
        }
    }

    /// Optional integer parameter. Integral floats and decimal strings are
    /// coerced; anything else is an error.
    pub fn get_i64(&self, name: &str) -> ToolResult<Option<i64>> {
        let value = match self.get(name) {
            None => return Ok(None),
            Some(value) => value,
        };

        let parsed = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        parsed.map(Some).ok_or_else(|| invalid(name, "an integer"))
    }
}

fn invalid(name: &str, expected: &'static str) -> ToolError {
    ToolError::InvalidArgument {
        name: name.to_string(),
        expected,
    }
}
