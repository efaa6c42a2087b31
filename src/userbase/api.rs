//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point a presentation shell talks to.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries shared context** (the store, the event log, matching options)
//!   so shells never thread them by hand
//! - **Returns structured types** (`CmdResult`), never strings for the terminal
//!
//! ## Generic Over DataStore
//!
//! `UserbaseApi<S: DataStore>` is generic over the storage backend:
//! - Production: `UserbaseApi<FileStore>`
//! - Testing: `UserbaseApi<InMemoryStore>`
//!
//! API tests check dispatch and return shapes; the rules themselves are
//! tested in `commands/*.rs`.

use crate::commands;
use crate::error::Result;
use crate::event_log::EventLog;
use crate::matcher::MatchOptions;
use crate::model::{NewUser, Record};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for userbase operations.
pub struct UserbaseApi<S: DataStore> {
    store: S,
    log: EventLog,
    options: MatchOptions,
    data_dir: PathBuf,
}

impl<S: DataStore> UserbaseApi<S> {
    pub fn new(store: S, log: EventLog, options: MatchOptions, data_dir: PathBuf) -> Self {
        Self {
            store,
            log,
            options,
            data_dir,
        }
    }

    pub fn add_user(&mut self, user: NewUser) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.log, user)
    }

    pub fn search_users(&self, query: &str) -> commands::CmdResult {
        commands::search::run(&self.store, &self.log, query, self.options)
    }

    pub fn list_users(&self) -> commands::CmdResult {
        commands::list::run(&self.store, &self.log)
    }

    /// Edit a record previously returned by this API.
    pub fn edit_user(
        &mut self,
        record: &Record,
        field: &str,
        value: &str,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, &self.log, record, field, value)
    }

    /// Edit the first record matching `query`.
    pub fn edit_user_by_name(
        &mut self,
        query: &str,
        field: &str,
        value: &str,
    ) -> Result<commands::CmdResult> {
        commands::edit::run_by_name(
            &mut self.store,
            &self.log,
            query,
            field,
            value,
            self.options,
        )
    }

    pub fn delete_user(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &self.log, query, self.options)
    }

    pub fn import_users(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, &self.log, path)
    }

    pub fn export_users(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, &self.log, path)
    }

    pub fn backup(&mut self) -> Result<commands::CmdResult> {
        commands::backup::run(&mut self.store, &self.log)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    /// Record a shell-level event (program start, selected command, exit).
    pub fn log_event(&self, message: impl AsRef<str>) {
        self.log.record(message);
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> UserbaseApi<InMemoryStore> {
        UserbaseApi::new(
            InMemoryStore::new(),
            EventLog::in_memory(),
            MatchOptions::default(),
            PathBuf::from("."),
        )
    }

    #[test]
    fn add_then_search() {
        let mut api = api();
        api.add_user(NewUser::new("Carol", 30)).unwrap();

        let result = api.search_users("carol");
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].name, "Carol");
    }

    #[test]
    fn edit_with_record_from_search() {
        let mut api = api();
        api.add_user(NewUser::new("Carol", 30)).unwrap();
        let found = api.search_users("Carol").listed_records.remove(0);

        let result = api.edit_user(&found, "Other Info", "vip").unwrap();
        assert!(result.is_success());
        assert_eq!(
            api.list_users().listed_records[0].other_info.as_deref(),
            Some("vip")
        );
    }

    #[test]
    fn edit_by_name_and_delete() {
        let mut api = api();
        api.add_user(NewUser::new("Carol", 30)).unwrap();

        api.edit_user_by_name("carol", "Name", "Caroline").unwrap();
        assert_eq!(api.list_users().listed_records[0].name, "Caroline");

        let result = api.delete_user("caroline").unwrap();
        assert_eq!(result.affected_records.len(), 1);
        assert!(api.list_users().listed_records.is_empty());
    }

    #[test]
    fn backup_saves_through_store() {
        let mut api = api();
        api.backup().unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert!(api.event_log().contains("Backup created"));
    }

    #[test]
    fn shell_events_reach_the_log() {
        let api = api();
        api.log_event("Program opened");
        assert!(api.event_log().contains("Program opened"));
    }
}
