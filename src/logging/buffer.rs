//! A bounded store of captured log entries.
//!
//! The `LogBuffer` keeps the most recent entries for the log view and sends
//! new ones to the UI in batches so a burst of events costs one redraw.
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::Level;

use crate::ui::{LogEntry, UIEvent};

const BATCH_INTERVAL: Duration = Duration::from_millis(100);

pub struct LogBuffer {
    entries: Mutex<VecDeque<LogEntry>>,
    max_size: usize,
    ui_sender: Mutex<Option<mpsc::UnboundedSender<UIEvent>>>,
    /// Entries below this level are stored but not pushed to the UI.
    display_level: Mutex<Level>,
    pending_batch: Mutex<Vec<LogEntry>>,
    flushing: AtomicBool,
}

/// Logging must keep working after a panic elsewhere, so a poisoned lock is
/// simply taken over.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LogBuffer {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(max_size)),
            max_size,
            ui_sender: Mutex::new(None),
            display_level: Mutex::new(Level::DEBUG),
            pending_batch: Mutex::new(Vec::new()),
            flushing: AtomicBool::new(false),
        }
    }

    pub fn set_ui_sender(&self, sender: mpsc::UnboundedSender<UIEvent>) {
        *lock(&self.ui_sender) = Some(sender);
    }

    /// Stores an entry and queues it for the UI if it meets the display
    /// level.
    pub fn add_entry(self: &Arc<Self>, entry: LogEntry) {
        {
            let mut entries = lock(&self.entries);
            if entries.len() >= self.max_size {
                entries.pop_front();
            }
            entries.push_back(entry.clone());
        }

        if entry.level <= *lock(&self.display_level) {
            lock(&self.pending_batch).push(entry);
            self.start_flusher_if_needed();
        }
    }

    /// Every stored entry, oldest first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        lock(&self.entries).iter().cloned().collect()
    }

    /// Changes which entries are pushed to the UI and asks it to reload.
    pub fn set_display_level(&self, level: Level) {
        *lock(&self.display_level) = level;

        if let Some(ref sender) = *lock(&self.ui_sender) {
            let _ = sender.send(UIEvent::RefreshLogs);
        }
    }

    /// Takes whatever is waiting to go to the UI.
    fn take_pending(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *lock(&self.pending_batch))
    }

    fn start_flusher_if_needed(self: &Arc<Self>) {
        // Outside a runtime entries stay pending until one is available.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        if self.flushing.swap(true, Ordering::AcqRel) {
            return;
        }

        let buffer = Arc::clone(self);
        handle.spawn(async move {
            let mut timer = interval(BATCH_INTERVAL);
            timer.tick().await;

            loop {
                timer.tick().await;

                let batch = buffer.take_pending();
                if batch.is_empty() {
                    continue;
                }

                let sender = lock(&buffer.ui_sender).clone();
                let Some(sender) = sender else {
                    break;
                };
                if sender.send(UIEvent::NewLogBatch(batch)).is_err() {
                    break;
                }
            }

            buffer.flushing.store(false, Ordering::Release);
        });
    }
}

#[cfg(test)]
impl LogBuffer {
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn display_level(&self) -> Level {
        *lock(&self.display_level)
    }
}
