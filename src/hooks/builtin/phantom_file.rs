//! Guard that rejects reads of nonexistent paths.
//!
//! Agents sometimes ask to read a path that was never created. Instead of
//! letting the host surface a raw ENOENT, the guard denies up front and
//! points the agent at `ls`/`glob` to locate the real file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::hooks::hook::{Decision, Hook, HookError, READ_TOOL, ToolRequest};

/// Denies `Read` requests whose path does not exist on the filesystem.
///
/// Any existing entry (file, directory, symlink with a live target) allows.
/// Relative paths are resolved against the process working directory. Only
/// existence is checked; no content is read.
pub struct PhantomFileGuard;

impl PhantomFileGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhantomFileGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a path against the working directory without touching the filesystem.
fn resolve(path: &str) -> Result<PathBuf, HookError> {
    let path = Path::new(path);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[async_trait]
impl Hook for PhantomFileGuard {
    fn name(&self) -> &str {
        "phantom_file_guard"
    }

    fn applies(&self, request: &ToolRequest) -> bool {
        request.tool_name == READ_TOOL
    }

    async fn decide(&self, request: &ToolRequest) -> Result<Decision, HookError> {
        // A Read request without a path is a host contract violation; deny
        // with a diagnostic rather than erroring out of the chain.
        let Some(path) = request.str_field("path") else {
            return Ok(Decision::deny(
                "Read request is missing a \"path\" string. Provide the path of the file to read.",
            ));
        };

        let resolved = resolve(path)?;
        if resolved.exists() {
            return Ok(Decision::Allow);
        }

        // The message names the path as the agent supplied it, unresolved.
        Ok(Decision::deny(format!(
            "Cheese Lord, that file doesn't exist: \"{path}\"\n\n\
             Use `ls` or `glob` to find the correct path.\n\
             A true Gouda Explorer verifies the terrain before mapping it."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::hook::BASH_TOOL;

    fn read_request(path: &str) -> ToolRequest {
        ToolRequest::new(READ_TOOL, serde_json::json!({ "path": path }))
    }

    async fn decide(request: &ToolRequest) -> Decision {
        PhantomFileGuard::new().decide(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_allows_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.md");
        std::fs::write(&file, "hello").unwrap();

        let decision = decide(&read_request(file.to_str().unwrap())).await;
        assert_eq!(decision, Decision::Allow);
    }

    #[tokio::test]
    async fn test_allows_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let decision = decide(&read_request(dir.path().to_str().unwrap())).await;
        assert_eq!(decision, Decision::Allow);
    }

    #[tokio::test]
    async fn test_denies_missing_path_with_verbatim_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist-xyz");
        let missing = missing.to_str().unwrap();

        let decision = decide(&read_request(missing)).await;
        match decision {
            Decision::Deny { reason } => {
                assert!(reason.contains(missing));
                assert!(reason.contains("`ls`"));
                assert!(reason.contains("`glob`"));
            }
            Decision::Allow => panic!("expected deny"),
        }
    }

    #[tokio::test]
    async fn test_relative_path_resolved_against_cwd() {
        // cargo runs tests from the package root, where Cargo.toml exists.
        let decision = decide(&read_request("Cargo.toml")).await;
        assert_eq!(decision, Decision::Allow);

        let decision = decide(&read_request("no-such-file-here.xyz")).await;
        assert!(decision.is_deny());
    }

    #[tokio::test]
    async fn test_missing_path_field_denies_with_diagnostic() {
        let request = ToolRequest::new(READ_TOOL, serde_json::json!({}));
        match decide(&request).await {
            Decision::Deny { reason } => assert!(reason.contains("missing")),
            Decision::Allow => panic!("expected deny"),
        }
    }

    #[tokio::test]
    async fn test_does_not_apply_to_other_tools() {
        let guard = PhantomFileGuard::new();
        let request = ToolRequest::new(BASH_TOOL, serde_json::json!({"command": "ls"}));
        assert!(!guard.applies(&request));
        let request = ToolRequest::new("Write", serde_json::json!({"path": "/nope"}));
        assert!(!guard.applies(&request));
    }

    #[tokio::test]
    async fn test_idempotent() {
        let guard = PhantomFileGuard::new();
        let request = read_request("/tmp/does-not-exist-xyz");
        let first = guard.decide(&request).await.unwrap();
        let second = guard.decide(&request).await.unwrap();
        assert_eq!(first, second);
    }
}
