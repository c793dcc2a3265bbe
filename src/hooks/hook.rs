//! Core hook types and traits.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Tool name the host uses for shell command execution.
pub const BASH_TOOL: &str = "Bash";

/// Tool name the host uses for file reads.
pub const READ_TOOL: &str = "Read";

/// A single tool invocation the host is about to perform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Which capability is about to run (e.g. `"Bash"`, `"Read"`).
    pub tool_name: String,
    /// Tool-specific input; the shape depends on `tool_name`.
    pub input: serde_json::Value,
}

impl ToolRequest {
    /// Create a request for the given tool.
    pub fn new(tool_name: impl Into<String>, input: serde_json::Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            input,
        }
    }

    /// Fetch a string field from the input, if present and a string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.input.get(name).and_then(|v| v.as_str())
    }
}

/// The outcome of evaluating a request against a hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the host proceed with the action.
    Allow,
    /// Block the action and surface `reason` to the invoking agent.
    Deny {
        /// Human-readable explanation shown in place of the action's result.
        reason: String,
    },
}

impl Decision {
    /// Shorthand for `Deny { reason }`.
    pub fn deny(reason: impl Into<String>) -> Self {
        Decision::Deny {
            reason: reason.into(),
        }
    }

    /// Whether this decision blocks the action.
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }
}

/// How to handle hook execution failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// On error/timeout, skip the hook and continue the chain.
    FailOpen,
    /// On error/timeout, abort evaluation with an error.
    FailClosed,
}

/// Hook execution errors.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Hook execution failed: {reason}")]
    ExecutionFailed { reason: String },

    #[error("Hook timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A guard consulted before the host performs a tool invocation.
///
/// Implementations are pure decision functions: they may inspect the request
/// (and, for filesystem guards, stat a path) but never perform, modify, or
/// log the action themselves.
#[async_trait]
pub trait Hook: Send + Sync {
    /// A unique name for this hook.
    fn name(&self) -> &str;

    /// Whether this hook applies to the given request.
    ///
    /// Hooks that return `false` are skipped entirely; the request passes
    /// through unchanged.
    fn applies(&self, request: &ToolRequest) -> bool;

    /// How to handle failures in this hook.
    ///
    /// Default: `FailOpen` (skip on error).
    fn failure_mode(&self) -> FailureMode {
        FailureMode::FailOpen
    }

    /// Maximum time this hook is allowed to run.
    ///
    /// Default: 5 seconds.
    fn timeout(&self) -> Duration {
        Duration::from_secs(5)
    }

    /// Decide whether the request may proceed.
    async fn decide(&self, request: &ToolRequest) -> Result<Decision, HookError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_field_present() {
        let request = ToolRequest::new(BASH_TOOL, serde_json::json!({"command": "ls"}));
        assert_eq!(request.str_field("command"), Some("ls"));
    }

    #[test]
    fn test_str_field_missing() {
        let request = ToolRequest::new(BASH_TOOL, serde_json::json!({}));
        assert_eq!(request.str_field("command"), None);
    }

    #[test]
    fn test_str_field_wrong_type() {
        let request = ToolRequest::new(BASH_TOOL, serde_json::json!({"command": 42}));
        assert_eq!(request.str_field("command"), None);
    }

    #[test]
    fn test_decision_helpers() {
        assert!(Decision::deny("nope").is_deny());
        assert!(!Decision::Allow.is_deny());
    }
}
