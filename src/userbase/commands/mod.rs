//! # Record Lifecycle
//!
//! One module per operation. Each `run` loads the collection fresh from the
//! store, applies its rule, saves the whole collection back when something
//! changed, and writes what happened to the [`EventLog`].
//!
//! "Not found" and "invalid field" are ordinary outcomes: they come back as
//! warning messages in an `Ok(CmdResult)` with nothing saved. Only a blank
//! name on `add` and I/O failures while saving or exporting are errors.
//!
//! [`EventLog`]: crate::event_log::EventLog

use crate::config::UserbaseConfig;
use crate::model::Record;

pub mod add;
pub mod backup;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed, removed or imported by the command.
    pub affected_records: Vec<Record>,
    /// Records to show the operator, in collection order.
    pub listed_records: Vec<Record>,
    pub config: Option<UserbaseConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: UserbaseConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    /// True when no warning or error was reported.
    pub fn is_success(&self) -> bool {
        !self
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
