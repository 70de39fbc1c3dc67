//! Tool-use event read from stdin
//!
//! The event is loosely typed. Anything missing or malformed becomes "no
//! signal" instead of an error, and the hook then stays silent.

use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Tool being invoked, informational only
    #[serde(default)]
    pub tool_name: Option<Value>,

    /// The tool's parameters
    #[serde(default)]
    pub tool_input: Option<Value>,
}

impl HookInput {
    /// Parse an event, returning `None` for anything that is not a JSON object
    pub fn parse(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Event carrying only a file path
    pub fn with_file_path(file_path: &str) -> Self {
        Self {
            tool_name: None,
            tool_input: Some(json!({ "file_path": file_path })),
        }
    }

    /// Event carrying only a shell command
    pub fn with_command(command: &str) -> Self {
        Self {
            tool_name: None,
            tool_input: Some(json!({ "command": command })),
        }
    }

    pub fn tool_name(&self) -> Option<&str> {
        self.tool_name.as_ref()?.as_str()
    }

    pub fn file_path(&self) -> Option<&str> {
        self.input_str("file_path")
    }

    pub fn command(&self) -> Option<&str> {
        self.input_str("command")
    }

    fn input_str(&self, key: &str) -> Option<&str> {
        self.tool_input
            .as_ref()?
            .get(key)?
            .as_str()
            .filter(|value| !value.is_empty())
    }
}
