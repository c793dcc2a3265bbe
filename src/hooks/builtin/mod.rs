//! Built-in guards shipped with the crate.

pub mod install_guard;
pub mod phantom_file;

pub use install_guard::InstallGuard;
pub use phantom_file::PhantomFileGuard;
