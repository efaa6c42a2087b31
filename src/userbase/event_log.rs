//! # Event Log
//!
//! Append-only, human-readable audit trail of what the operator did.
//!
//! One [`EventLog`] is created at startup and handed to the store and every
//! command. Handles are cheap to clone and all clones write to the same sink.
//! Each event becomes a single line:
//!
//! ```text
//! 2024-03-09 14:05:00,123 - User added: Name=Ann, Age=41, ...
//! ```
//!
//! Lines are flushed as they are written. A failing sink never fails the
//! operation that produced the event; the failure is reported through
//! `tracing` instead.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

const LINE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

enum Sink {
    File(File),
    Memory(Vec<String>),
    Discard,
}

#[derive(Clone)]
pub struct EventLog {
    sink: Arc<Mutex<Sink>>,
}

impl EventLog {
    /// Opens `path` for appending, creating it and its parent directory if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_sink(Sink::File(file)))
    }

    /// Keeps lines in memory; see [`EventLog::lines`].
    pub fn in_memory() -> Self {
        Self::with_sink(Sink::Memory(Vec::new()))
    }

    pub fn discard() -> Self {
        Self::with_sink(Sink::Discard)
    }

    fn with_sink(sink: Sink) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    pub fn record(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::debug!(target: "userbase::event", "{}", message);

        let line = format!("{} - {}", Local::now().format(LINE_TIME_FORMAT), message);
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match &mut *sink {
            Sink::File(file) => {
                if let Err(e) = writeln!(file, "{}", line).and_then(|_| file.flush()) {
                    tracing::warn!("failed to write event log: {}", e);
                }
            }
            Sink::Memory(lines) => lines.push(line),
            Sink::Discard => {}
        }
    }

    /// Lines captured by an in-memory log. Empty for every other sink.
    pub fn lines(&self) -> Vec<String> {
        match self.sink.lock() {
            Ok(sink) => match &*sink {
                Sink::Memory(lines) => lines.clone(),
                _ => Vec::new(),
            },
            Err(_) => Vec::new(),
        }
    }

    /// True when any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog").finish_non_exhaustive()
    }
}
