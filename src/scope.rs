//! Task-scoped configuration propagation.
//!
//! The preferred alternative to the process-wide singleton: attach an
//! `Arc<Config>` to a task scope and read it anywhere below without
//! threading a parameter through every call. Built on [`tokio::task_local!`],
//! so the value is confined to the scoped task and nested scopes shadow
//! outer ones for their extent.

use std::future::Future;
use std::sync::Arc;

use crate::model::Config;

tokio::task_local! {
    /// Configuration attached to the current task scope.
    static SCOPED: Arc<Config>;
}

/// Runs `future` with `config` attached to its task scope.
pub async fn scope<F>(config: Arc<Config>, future: F) -> F::Output
where
    F: Future,
{
    SCOPED.scope(config, future).await
}

/// Synchronous counterpart of [`scope`].
pub fn sync_scope<F, R>(config: Arc<Config>, f: F) -> R
where
    F: FnOnce() -> R,
{
    SCOPED.sync_scope(config, f)
}

/// Returns the configuration attached to the current scope.
///
/// `None` outside any scope, letting callers pick a fallback instead of
/// crashing.
pub fn current() -> Option<Arc<Config>> {
    SCOPED.try_with(Arc::clone).ok()
}
