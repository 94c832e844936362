#[cfg(test)]
#[path = "busy_test.rs"]
mod tests;

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use anyhow::Result;

use crate::domain::models::ChatViewBox;

/// Tracks requests in flight. The indicator is shown when the first request
/// starts and hidden only once the last one finishes, so overlapping requests
/// can't hide it early.
#[derive(Clone)]
pub struct BusyIndicator {
    pending: Arc<Mutex<usize>>,
    view: ChatViewBox,
}

/// Keeps the indicator visible until dropped.
pub struct BusyGuard {
    indicator: BusyIndicator,
}

impl BusyIndicator {
    pub fn new(view: ChatViewBox) -> BusyIndicator {
        return BusyIndicator {
            pending: Arc::new(Mutex::new(0)),
            view,
        };
    }

    pub fn pending(&self) -> usize {
        return *self.count();
    }

    /// View calls are made while holding this lock so show and hide reach the
    /// view in the same order the count changes. A panicking view poisons the
    /// lock; the count itself is still consistent, so it is recovered.
    fn count(&self) -> MutexGuard<'_, usize> {
        return self.pending.lock().unwrap_or_else(PoisonError::into_inner);
    }

    pub fn begin(&self) -> Result<BusyGuard> {
        // Created first so a failing view still releases the count.
        let guard = BusyGuard {
            indicator: self.clone(),
        };

        let mut pending = self.count();
        *pending += 1;
        if *pending == 1 {
            self.view.set_busy(true)?;
        }
        self.view.scroll_to_end()?;

        return Ok(guard);
    }

    fn end(&self) {
        let mut pending = self.count();
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            if let Err(err) = self.view.set_busy(false) {
                tracing::error!(error = ?err, "Failed to hide busy indicator");
            }
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.indicator.end();
    }
}
