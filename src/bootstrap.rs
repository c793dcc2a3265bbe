//! Wiring helpers for hosts embedding the built-in guards.
//!
//! Registration is explicit: the host owns the [`HookRegistry`] and passes
//! it here, rather than the crate populating process-wide state at load
//! time.

use std::sync::Arc;

use crate::hooks::builtin::{InstallGuard, PhantomFileGuard};
use crate::hooks::registry::HookRegistry;

/// Register both built-in guards on `registry`.
///
/// The install guard runs before the phantom file guard. Hosts that add
/// their own hooks can interleave them via `register_with_priority`.
pub async fn register_builtin_guards(registry: &HookRegistry) {
    registry
        .register_with_priority(Arc::new(InstallGuard::new()), 10)
        .await;
    registry
        .register_with_priority(Arc::new(PhantomFileGuard::new()), 20)
        .await;
}
