use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::event_log::EventLog;
use crate::store::fs::import_from;
use crate::store::DataStore;
use std::path::Path;

/// Replace the stored collection with the contents of `path`.
///
/// A source that is missing, malformed or empty is reported as a failure and
/// the stores are left as they were.
pub fn run<S: DataStore>(store: &mut S, log: &EventLog, path: &Path) -> Result<CmdResult> {
    let records = import_from(path, log);
    if records.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Failed to import data from {}",
            path.display()
        ))));
    }

    store.save(&records)?;
    let count = records.len();
    Ok(CmdResult::default()
        .with_affected_records(records)
        .with_message(CmdMessage::success(format!(
            "Data imported successfully ({} users).",
            count
        ))))
}
