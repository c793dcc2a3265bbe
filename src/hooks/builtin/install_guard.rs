//! Guard that blocks unapproved dependency installation.
//!
//! Shell commands that would pull a new package into the project are held
//! for a human: the agent is told to justify the dependency and get explicit
//! approval, or the user runs the install themselves.

use async_trait::async_trait;

use crate::hooks::hook::{BASH_TOOL, Decision, Hook, HookError, ToolRequest};

/// Package-manager invocations that add a dependency.
const INSTALL_PATTERNS: &[&str] = &[
    "npm install",
    "yarn add",
    "pnpm add",
    "pip install",
    "pip3 install",
    "go get",
    "cargo add",
];

const APPROVAL_MESSAGE: &str = r#"Whoa there, Cheese Lord! Package installation requires your royal approval.

Before I can install this dependency:
1. Confirm why stdlib cannot solve this problem
2. Review the dependency weight (including transitives)
3. Explicitly approve the installation

If you approve, please run the install command yourself or say "approved"."#;

/// Denies `Bash` commands that install a new dependency.
///
/// Matching is case-insensitive substring containment, so the guard catches
/// install phrases anywhere in a compound command (`cd app && npm install`).
pub struct InstallGuard {
    patterns: Vec<String>,
}

impl InstallGuard {
    /// Create a guard with the built-in phrase table.
    pub fn new() -> Self {
        Self::with_patterns(INSTALL_PATTERNS.iter().map(|p| p.to_string()).collect())
    }

    /// Create a guard with a custom phrase table.
    ///
    /// Phrases are matched against the lowercased command, so they should be
    /// supplied in lowercase.
    pub fn with_patterns(patterns: Vec<String>) -> Self {
        Self { patterns }
    }
}

impl Default for InstallGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Hook for InstallGuard {
    fn name(&self) -> &str {
        "install_guard"
    }

    fn applies(&self, request: &ToolRequest) -> bool {
        request.tool_name == BASH_TOOL
    }

    async fn decide(&self, request: &ToolRequest) -> Result<Decision, HookError> {
        // Missing or non-string command text matches nothing.
        let command = request
            .str_field("command")
            .unwrap_or_default()
            .to_lowercase();

        if self.patterns.iter().any(|p| command.contains(p.as_str())) {
            return Ok(Decision::deny(APPROVAL_MESSAGE));
        }

        Ok(Decision::Allow)
    }
}
