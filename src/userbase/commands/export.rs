use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::event_log::EventLog;
use crate::store::fs::export_to;
use crate::store::DataStore;
use std::path::Path;

/// Write the current collection to `path`. Write failures are returned.
pub fn run<S: DataStore>(store: &S, log: &EventLog, path: &Path) -> Result<CmdResult> {
    let records = store.load();
    export_to(path, &records)?;
    log.record(format!("Data exported to JSON file: {}", path.display()));

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Exported {} users to {}",
        records.len(),
        path.display()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_current_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.json");
        let fixture = StoreFixture::new().with_users(2);
        let log = EventLog::in_memory();

        run(&fixture.store, &log, &path).unwrap();

        let written: Vec<crate::model::Record> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, fixture.store.load());
        assert!(log.contains("Data exported to JSON file"));
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = TempDir::new().unwrap();
        let fixture = StoreFixture::new().with_users(1);
        let log = EventLog::in_memory();

        assert!(run(&fixture.store, &log, dir.path()).is_err());
        assert!(!log.contains("Data exported"));
    }
}
