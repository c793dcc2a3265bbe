//! Pre-tool-use hooks for intercepting agent tool invocations.
//!
//! Before the host performs a tool call it consults the [`HookRegistry`].
//! Each registered [`Hook`] is an (applies, decide) pair: a synchronous
//! predicate selecting the requests it cares about, and an async handler
//! returning a [`Decision`].
//!
//! Hooks are evaluated in priority order (lower number = higher priority).
//! The first deny stops the chain; if every applicable hook allows, the
//! host proceeds with the original action.

pub mod builtin;
pub mod hook;
pub mod registry;

pub use hook::{BASH_TOOL, Decision, FailureMode, Hook, HookError, READ_TOOL, ToolRequest};
pub use registry::HookRegistry;
