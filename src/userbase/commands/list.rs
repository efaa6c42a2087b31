use crate::commands::{CmdMessage, CmdResult};
use crate::event_log::EventLog;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, log: &EventLog) -> CmdResult {
    let records = store.load();
    log.record("Displayed all users");

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No users stored."));
    }
    result.with_listed_records(records)
}
