//! A captured tracing event.
use chrono::{DateTime, Utc};
use tracing::Level;

/// One log line as shown in the log view.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    /// Last path component of the emitting module.
    pub module: String,
    pub message: String,
}
