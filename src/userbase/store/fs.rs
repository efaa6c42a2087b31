use super::DataStore;
use crate::error::Result;
use crate::event_log::EventLog;
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON file storage mirrored across a primary and a backup file.
pub struct FileStore {
    primary: PathBuf,
    backup: PathBuf,
    log: EventLog,
}

impl FileStore {
    pub fn new(primary: PathBuf, backup: PathBuf, log: EventLog) -> Self {
        Self {
            primary,
            backup,
            log,
        }
    }

    pub fn primary_path(&self) -> &Path {
        &self.primary
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    fn load_backup(&self) -> Vec<Record> {
        match read_collection(&self.backup) {
            Ok(records) => {
                self.log
                    .record(format!("Loaded backup JSON file: {}", self.backup.display()));
                records
            }
            Err(e) => {
                tracing::debug!("backup store unusable: {}", e);
                self.log.record(format!(
                    "Failed to load backup JSON file: {}",
                    self.backup.display()
                ));
                Vec::new()
            }
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Vec<Record> {
        match read_collection(&self.primary) {
            Ok(records) => {
                self.log
                    .record(format!("Loaded active JSON file: {}", self.primary.display()));
                records
            }
            Err(e) => {
                tracing::debug!("primary store unusable: {}", e);
                self.log.record(format!(
                    "Failed to load active JSON file: {}",
                    self.primary.display()
                ));
                self.load_backup()
            }
        }
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        write_collection(&self.primary, records)?;
        write_collection(&self.backup, records)?;
        Ok(())
    }
}

/// Read any file as a full collection. Missing or malformed content yields
/// an empty collection and a failure event.
pub fn import_from<P: AsRef<Path>>(path: P, log: &EventLog) -> Vec<Record> {
    let path = path.as_ref();
    match read_collection(path) {
        Ok(records) => {
            log.record(format!("Imported data from JSON file: {}", path.display()));
            records
        }
        Err(e) => {
            tracing::debug!("import source unusable: {}", e);
            log.record(format!(
                "Failed to import data from JSON file: {}",
                path.display()
            ));
            Vec::new()
        }
    }
}

/// Write a full collection to any file. Failures are returned to the caller.
pub fn export_to<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    write_collection(path.as_ref(), records)
}

fn read_collection(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&content)?;
    Ok(records)
}

fn write_collection(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content)?;
    Ok(())
}
