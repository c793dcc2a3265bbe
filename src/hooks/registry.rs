//! Hook registry for managing and evaluating pre-tool-use hooks.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::hooks::hook::{Decision, FailureMode, Hook, HookError, ToolRequest};

/// A registered hook with its priority.
struct HookEntry {
    hook: Arc<dyn Hook>,
    priority: u32,
}

/// Registry the host consults before performing a tool invocation.
///
/// Hooks are evaluated in priority order (lower number = higher priority).
/// The first `Deny` stops the chain immediately; if every applicable hook
/// allows, the request proceeds.
pub struct HookRegistry {
    hooks: RwLock<Vec<HookEntry>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(Vec::new()),
        }
    }

    /// Register a hook with default priority (100).
    pub async fn register(&self, hook: Arc<dyn Hook>) {
        self.register_with_priority(hook, 100).await;
    }

    /// Register a hook with a specific priority.
    ///
    /// Lower priority number = runs first.
    pub async fn register_with_priority(&self, hook: Arc<dyn Hook>, priority: u32) {
        let mut hooks = self.hooks.write().await;
        hooks.push(HookEntry { hook, priority });
        hooks.sort_by_key(|e| e.priority);
    }

    /// Unregister a hook by name. Returns `true` if it was found and removed.
    pub async fn unregister(&self, name: &str) -> bool {
        let mut hooks = self.hooks.write().await;
        let before = hooks.len();
        hooks.retain(|e| e.hook.name() != name);
        hooks.len() < before
    }

    /// List all registered hook names (in priority order).
    pub async fn list(&self) -> Vec<String> {
        let hooks = self.hooks.read().await;
        hooks.iter().map(|e| e.hook.name().to_string()).collect()
    }

    /// Evaluate a request against all applicable hooks.
    ///
    /// - Hooks run in priority order (lowest first).
    /// - The first `Deny` stops the chain and is returned.
    /// - Timeout/error handling respects each hook's `failure_mode`.
    pub async fn evaluate(&self, request: &ToolRequest) -> Result<Decision, HookError> {
        // Clone applicable hooks and drop the read guard before executing.
        // Each hook can run up to its timeout, so holding the guard would
        // block concurrent register/unregister/evaluate calls.
        let applicable: Vec<Arc<dyn Hook>> = {
            let hooks = self.hooks.read().await;
            hooks
                .iter()
                .filter(|e| e.hook.applies(request))
                .map(|e| e.hook.clone())
                .collect()
        };

        for hook in &applicable {
            let timeout = hook.timeout();

            let result = tokio::time::timeout(timeout, hook.decide(request)).await;

            match result {
                Ok(Ok(Decision::Deny { reason })) => {
                    tracing::debug!(hook = hook.name(), "Hook denied: {}", reason);
                    return Ok(Decision::Deny { reason });
                }
                Ok(Ok(Decision::Allow)) => {
                    // No-op, continue chain
                }
                Ok(Err(err)) => match hook.failure_mode() {
                    FailureMode::FailOpen => {
                        tracing::warn!(hook = hook.name(), "Hook failed (fail-open): {}", err);
                    }
                    FailureMode::FailClosed => {
                        tracing::warn!(hook = hook.name(), "Hook failed (fail-closed): {}", err);
                        return Err(HookError::ExecutionFailed {
                            reason: format!("Hook '{}' failed: {}", hook.name(), err),
                        });
                    }
                },
                Err(_elapsed) => match hook.failure_mode() {
                    FailureMode::FailOpen => {
                        tracing::warn!(
                            hook = hook.name(),
                            "Hook timed out (fail-open) after {:?}",
                            timeout
                        );
                    }
                    FailureMode::FailClosed => {
                        tracing::warn!(
                            hook = hook.name(),
                            "Hook timed out (fail-closed) after {:?}",
                            timeout
                        );
                        return Err(HookError::Timeout { timeout });
                    }
                },
            }
        }

        Ok(Decision::Allow)
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
