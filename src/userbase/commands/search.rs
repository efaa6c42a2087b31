use crate::commands::{CmdMessage, CmdResult};
use crate::event_log::EventLog;
use crate::matcher::{self, MatchOptions};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &S,
    log: &EventLog,
    query: &str,
    options: MatchOptions,
) -> CmdResult {
    let records = store.load();
    let found = matcher::find(query, &records, options);

    let mut result = CmdResult::default();
    if found.is_empty() {
        log.record(format!("No matching users found for search: {}", query));
        result.add_message(CmdMessage::info("No matching users found."));
    } else {
        log.record(format!("User searched by name: {}", query));
    }
    result.with_listed_records(found)
}
