use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::event_log::EventLog;
use crate::store::DataStore;

/// Re-save the current collection so both stores hold the same copy.
pub fn run<S: DataStore>(store: &mut S, log: &EventLog) -> Result<CmdResult> {
    let records = store.load();
    store.save(&records)?;
    log.record("Backup created");
    Ok(CmdResult::default().with_message(CmdMessage::success("Backup created successfully.")))
}
