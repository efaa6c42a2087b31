use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::event_log::EventLog;
use crate::matcher::{self, MatchOptions};
use crate::store::DataStore;

/// Remove the first record matching `query`. Other records sharing the
/// matched name are kept.
pub fn run<S: DataStore>(
    store: &mut S,
    log: &EventLog,
    query: &str,
    options: MatchOptions,
) -> Result<CmdResult> {
    let mut records = store.load();
    let first = matcher::find(query, &records, options).into_iter().next();

    let position = first.and_then(|target| records.iter().position(|r| *r == target));
    let Some(position) = position else {
        log.record(format!("User to delete not found: {}", query));
        return Ok(CmdResult::default().with_message(CmdMessage::warning("User not found.")));
    };

    let removed = records.remove(position);
    store.save(&records)?;
    log.record(format!("User deleted: Name={}", removed.name));

    Ok(CmdResult::default()
        .with_affected_records(vec![removed])
        .with_message(CmdMessage::success("User deleted successfully!")))
}
