//! Pre-execution guard hooks for agent tool calls.
//!
//! Hosts that execute tools on behalf of an LLM agent consult this crate
//! before performing an invocation:
//!
//! - [`InstallGuard`] blocks dependency-install commands (`npm install`,
//!   `cargo add`, ...) until a human explicitly approves.
//! - [`PhantomFileGuard`] rejects reads of paths that do not exist.
//!
//! Both are stateless (predicate, decision) pairs registered on a
//! [`HookRegistry`] the host owns:
//!
//! ```no_run
//! use preflight::{Decision, HookRegistry, ToolRequest, register_builtin_guards};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let registry = HookRegistry::new();
//! register_builtin_guards(&registry).await;
//!
//! let request = ToolRequest::new(
//!     "Bash",
//!     serde_json::json!({ "command": "npm install left-pad" }),
//! );
//! match registry.evaluate(&request).await {
//!     Ok(Decision::Allow) => { /* proceed with the tool call */ }
//!     Ok(Decision::Deny { reason }) => println!("blocked: {reason}"),
//!     Err(err) => eprintln!("hook machinery failed: {err}"),
//! }
//! # }
//! ```

pub mod bootstrap;
pub mod hooks;

pub use bootstrap::register_builtin_guards;
pub use hooks::builtin::{InstallGuard, PhantomFileGuard};
pub use hooks::{
    BASH_TOOL, Decision, FailureMode, Hook, HookError, HookRegistry, READ_TOOL, ToolRequest,
};
