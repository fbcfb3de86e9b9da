//! The debounced commit loop
//!
//! One tokio task per binding. Value changes arrive over a watch channel
//! (latest value wins, intermediate values are never observed), each change
//! re-arms a single deadline, and a firing deadline performs the
//! compare-and-commit against the live location.

use crate::binding::ParamBinding;
use ql_core::LocationProvider;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, trace};

/// Timer state of one binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No commit scheduled
    Idle,
    /// A commit is armed and waiting out the quiet window
    Pending,
}

/// Handle to one running synchronizer
///
/// Spawning arms the window with the binding's initial value (harmless when
/// the location already matches: the commit is suppressed as a no-op).
/// Dropping the handle cancels any pending commit; it can never fire after
/// the owner is gone.
pub struct ParamSync {
    key: String,
    tx: watch::Sender<String>,
    pending: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl ParamSync {
    /// Spawn a synchronizer for `binding` committing through `provider`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(provider: Arc<dyn LocationProvider>, binding: ParamBinding) -> Self {
        let ParamBinding { key, value, delay } = binding;
        let (tx, rx) = watch::channel(value);
        let pending = Arc::new(AtomicBool::new(true));

        let task = tokio::spawn(run(provider, key.clone(), delay, rx, pending.clone()));

        Self {
            key,
            tx,
            pending,
            task,
        }
    }

    /// The query parameter this binding manages
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Feed a new desired value
    ///
    /// A changed value supersedes any pending commit and restarts the quiet
    /// window. Feeding the value already held does nothing (the window is
    /// not restarted), matching the "no change, no work" contract.
    pub fn set(&self, value: impl Into<String>) {
        let value = value.into();
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                trace!(key = %self.key, %value, "value changed");
                *current = value;
                true
            }
        });
    }

    /// Current timer state (Idle or Pending)
    pub fn state(&self) -> SyncState {
        if self.pending.load(Ordering::Acquire) {
            SyncState::Pending
        } else {
            SyncState::Idle
        }
    }
}

impl Drop for ParamSync {
    fn drop(&mut self) {
        // guaranteed cancellation: a pending commit never outlives its owner
        self.task.abort();
    }
}

async fn run(
    provider: Arc<dyn LocationProvider>,
    key: String,
    delay: std::time::Duration,
    mut rx: watch::Receiver<String>,
    pending: Arc<AtomicBool>,
) {
    // the initial value arms the window, like a binding's first render
    let mut deadline = Instant::now() + delay;
    let mut armed = true;

    loop {
        tokio::select! {
            changed = rx.changed() => match changed {
                Ok(()) => {
                    deadline = Instant::now() + delay;
                    armed = true;
                    pending.store(true, Ordering::Release);
                }
                // sender gone: the handle was dropped, nothing more can arrive
                Err(_) => break,
            },
            _ = time::sleep_until(deadline), if armed => {
                // a value landing on the same tick as the deadline still
                // supersedes the pending commit
                if rx.has_changed().unwrap_or(false) {
                    let _ = rx.borrow_and_update();
                    deadline = Instant::now() + delay;
                    continue;
                }

                armed = false;
                pending.store(false, Ordering::Release);
                let value = rx.borrow().clone();
                commit(provider.as_ref(), &key, &value);
            }
        }
    }
}

/// Compare against the live location and replace it if the value changed
///
/// The whole read-compare-swap runs inside the provider's atomic update, so
/// commits from bindings on other keys can never derive from the same base
/// and erase each other's just-committed parameter.
fn commit(provider: &dyn LocationProvider, key: &str, value: &str) {
    provider.update(&mut |location| {
        // re-read the committed value now; a stale snapshot here would
        // re-fight out-of-band location changes
        let current = location.params.get(key).unwrap_or("");
        if value == current {
            debug!(%key, "no-op commit suppressed");
            return None;
        }

        let mut params = location.params.clone();
        if value.is_empty() {
            params.remove(key);
        } else {
            params.set(key, value);
        }

        let url = if params.is_empty() {
            location.path.clone()
        } else {
            format!("{}?{}", location.path, params)
        };

        debug!(%key, %value, %url, "committing query parameter");
        Some(url)
    });
}
