use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::event_log::EventLog;
use crate::model::{Field, NewUser, Record};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, log: &EventLog, user: NewUser) -> Result<CmdResult> {
    let record = match Record::new(user) {
        Ok(record) => record,
        Err(e) => {
            log.record("Rejected user with empty name");
            return Err(e);
        }
    };

    let mut records = store.load();
    records.push(record.clone());
    store.save(&records)?;

    log.record(format!("User added: {}", describe(&record)));

    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success("User added successfully!")))
}

fn describe(record: &Record) -> String {
    Field::ALL
        .iter()
        .map(|field| format!("{}={}", field.label(), record.display_value(*field)))
        .collect::<Vec<_>>()
        .join(", ")
}
