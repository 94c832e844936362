use std::sync::Mutex;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::time;

use crate::domain::models::ChatView;
use crate::domain::models::TranscriptEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewCall {
    AppendEntry(TranscriptEntry),
    SetBusy(bool),
    ScrollToEnd,
}

/// Records every call made against it so conversations can be asserted on
/// without a terminal.
#[derive(Default)]
pub struct MemoryView {
    calls: Mutex<Vec<ViewCall>>,
}

impl MemoryView {
    pub fn calls(&self) -> Vec<ViewCall> {
        return self.calls.lock().unwrap().clone();
    }

    pub fn entries(&self) -> Vec<TranscriptEntry> {
        return self
            .calls()
            .into_iter()
            .filter_map(|call| {
                if let ViewCall::AppendEntry(entry) = call {
                    return Some(entry);
                }
                return None;
            })
            .collect();
    }

    /// Last busy state set, `false` if it was never touched.
    pub fn is_busy(&self) -> bool {
        return self
            .calls()
            .iter()
            .rev()
            .find_map(|call| {
                if let ViewCall::SetBusy(busy) = call {
                    return Some(*busy);
                }
                return None;
            })
            .unwrap_or(false);
    }

    /// Polls until `count` entries exist and the busy indicator is hidden.
    pub async fn wait_for_entries(&self, count: usize) -> Result<()> {
        for _ in 0..500 {
            if self.entries().len() >= count && !self.is_busy() {
                return Ok(());
            }
            time::sleep(Duration::from_millis(10)).await;
        }

        bail!(format!(
            "Timed out waiting for {count} entries, found {}",
            self.entries().len()
        ));
    }

    fn push(&self, call: ViewCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ChatView for MemoryView {
    fn append_entry(&self, entry: TranscriptEntry) -> Result<()> {
        self.push(ViewCall::AppendEntry(entry));
        return Ok(());
    }

    fn set_busy(&self, busy: bool) -> Result<()> {
        self.push(ViewCall::SetBusy(busy));
        return Ok(());
    }

    fn scroll_to_end(&self) -> Result<()> {
        self.push(ViewCall::ScrollToEnd);
        return Ok(());
    }
}
