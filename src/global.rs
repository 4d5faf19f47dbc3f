//! One-shot configuration holder and the process-wide instance.
//!
//! [`ConfigCell`] is the caller-owned form: construct one, initialize it
//! once at startup and hand it (or the `Arc<Config>` it yields) to
//! whatever needs it. The module-level [`init`]/[`get`]/[`try_get`]
//! functions are a compatibility shim over a single static cell for code
//! that still expects a process-wide singleton.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ConfigError;
use crate::loader::{ConfigLoader, LoadOptions};
use crate::model::Config;

/// Holder states. `Failed` is terminal: the one load attempt is never
/// retried, only [`ConfigCell::reset`] leaves it.
#[derive(Debug)]
enum CellState {
    Empty,
    Ready(Arc<Config>),
    Failed,
}

/// A one-shot configuration holder.
///
/// The first [`initialize`](Self::initialize) call runs the loader while
/// holding an internal mutex, so the load executes at most once no
/// matter how many threads race on it. Whatever the outcome, the guard
/// is consumed: every later call is a no-op.
#[derive(Debug)]
pub struct ConfigCell {
    state: Mutex<CellState>,
}

impl ConfigCell {
    /// Creates an empty cell.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(CellState::Empty),
        }
    }

    /// Loads and installs the configuration on the first call.
    ///
    /// Only the first call performs the load; its error, if any, is
    /// returned to that caller alone. Subsequent calls return `Ok(())`
    /// without re-checking the outcome, so a failed first attempt leaves
    /// the cell permanently empty (observable via [`try_get`](Self::try_get)).
    pub fn initialize(&self, opts: &LoadOptions) -> Result<(), ConfigError> {
        let mut state = self.lock_state();
        if !matches!(*state, CellState::Empty) {
            return Ok(());
        }
        match ConfigLoader::load(opts) {
            Ok(config) => {
                *state = CellState::Ready(Arc::new(config));
                Ok(())
            }
            Err(err) => {
                *state = CellState::Failed;
                Err(err)
            }
        }
    }

    /// Returns the installed configuration.
    ///
    /// # Panics
    ///
    /// Panics if no configuration has been installed. Calling this before
    /// a successful [`initialize`](Self::initialize) is a startup-ordering
    /// bug, surfaced loudly rather than returned as an error.
    pub fn get(&self) -> Arc<Config> {
        self.try_get().map_or_else(
            || panic!("configuration not initialized: call initialize() successfully before get()"),
            |config| config,
        )
    }

    /// Returns the installed configuration, or `None` if the cell is
    /// empty or its one load attempt failed.
    pub fn try_get(&self) -> Option<Arc<Config>> {
        match &*self.lock_state() {
            CellState::Ready(config) => Some(Arc::clone(config)),
            _ => None,
        }
    }

    /// Returns the cell to its empty state, re-arming the guard.
    ///
    /// Intended for test teardown. Production code should initialize
    /// exactly once and never reset.
    pub fn reset(&self) {
        *self.lock_state() = CellState::Empty;
    }

    fn lock_state(&self) -> MutexGuard<'_, CellState> {
        // A panic while holding the lock leaves the state consistent,
        // so poisoning can be ignored.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ConfigCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide cell backing [`init`], [`get`] and [`try_get`].
static GLOBAL: ConfigCell = ConfigCell::new();

/// Initializes the process-wide configuration.
///
/// Safe to call multiple times; see [`ConfigCell::initialize`].
pub fn init(opts: &LoadOptions) -> Result<(), ConfigError> {
    GLOBAL.initialize(opts)
}

/// Returns the process-wide configuration.
///
/// # Panics
///
/// Panics if [`init`] has not completed successfully.
pub fn get() -> Arc<Config> {
    GLOBAL.get()
}

/// Non-panicking access to the process-wide configuration.
pub fn try_get() -> Option<Arc<Config>> {
    GLOBAL.try_get()
}

/// Resets the process-wide cell. Test teardown only.
pub fn reset() {
    GLOBAL.reset()
}
