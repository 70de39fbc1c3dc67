//! Hook decisions and their wire format

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Permission decision for a PreToolUse hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Ask,
    Deny,
}

impl PermissionDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            PermissionDecision::Allow => "allow",
            PermissionDecision::Ask => "ask",
            PermissionDecision::Deny => "deny",
        }
    }
}

impl std::fmt::Display for PermissionDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a hook tells the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookResponse {
    /// No opinion; the host proceeds with its default handling
    Silent,

    /// PreToolUse permission decision
    Permission {
        decision: PermissionDecision,
        reason: String,
        context: Option<String>,
    },

    /// PostToolUse block
    Block { reason: String },

    /// Plain informational text
    Message(Vec<String>),
}

#[derive(Serialize)]
struct PreToolUseOutput<'a> {
    #[serde(rename = "hookSpecificOutput")]
    hook_specific_output: HookSpecificOutput<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HookSpecificOutput<'a> {
    hook_event_name: &'static str,
    permission_decision: PermissionDecision,
    permission_decision_reason: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_context: Option<&'a str>,
}

#[derive(Serialize)]
struct PostToolUseOutput<'a> {
    decision: &'static str,
    reason: &'a str,
}

impl HookResponse {
    pub fn allow(reason: impl Into<String>) -> Self {
        Self::permission(PermissionDecision::Allow, reason, None)
    }

    pub fn ask(reason: impl Into<String>) -> Self {
        Self::permission(PermissionDecision::Ask, reason, None)
    }

    pub fn ask_with_context(reason: impl Into<String>, context: impl Into<String>) -> Self {
        let context = context.into();
        let context = (!context.is_empty()).then_some(context);
        Self::permission(PermissionDecision::Ask, reason, context)
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self::permission(PermissionDecision::Deny, reason, None)
    }

    pub fn block(reason: impl Into<String>) -> Self {
        HookResponse::Block {
            reason: reason.into(),
        }
    }

    pub fn message<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HookResponse::Message(lines.into_iter().map(Into::into).collect())
    }

    fn permission(
        decision: PermissionDecision,
        reason: impl Into<String>,
        context: Option<String>,
    ) -> Self {
        HookResponse::Permission {
            decision,
            reason: reason.into(),
            context,
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, HookResponse::Silent)
    }

    /// Text written to stdout, `None` when silent
    pub fn render(&self) -> Result<Option<String>> {
        let rendered = match self {
            HookResponse::Silent => return Ok(None),
            HookResponse::Permission {
                decision,
                reason,
                context,
            } => serde_json::to_string(&PreToolUseOutput {
                hook_specific_output: HookSpecificOutput {
                    hook_event_name: "PreToolUse",
                    permission_decision: *decision,
                    permission_decision_reason: reason,
                    additional_context: context.as_deref(),
                },
            })?,
            HookResponse::Block { reason } => serde_json::to_string(&PostToolUseOutput {
                decision: "block",
                reason,
            })?,
            HookResponse::Message(lines) => lines.join("\n"),
        };

        Ok(Some(rendered))
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        if let Some(rendered) = self.render()? {
            writeln!(writer, "{}", rendered)?;
            writer.flush()?;
        }
        Ok(())
    }
}
