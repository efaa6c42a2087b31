use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserbaseError};
use crate::event_log::EventLog;
use crate::matcher::{self, MatchOptions};
use crate::model::{Field, Record};
use crate::store::DataStore;

/// Overwrite one field of `target`.
///
/// `target` is looked up again in a fresh load of the collection (first
/// record equal to it) and only that stored record is changed. The caller's
/// copy is never written back directly.
pub fn run<S: DataStore>(
    store: &mut S,
    log: &EventLog,
    target: &Record,
    field_name: &str,
    new_value: &str,
) -> Result<CmdResult> {
    let field: Field = match field_name.parse() {
        Ok(field) => field,
        Err(_) => {
            log.record(format!("Invalid field for edit: {}", field_name));
            return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "Invalid field: {}. Expected one of: {}",
                field_name,
                field_list()
            ))));
        }
    };

    let mut records = store.load();
    let Some(position) = records.iter().position(|r| r == target) else {
        log.record(format!("User to edit not found: Name={}", target.name));
        return Ok(CmdResult::default().with_message(CmdMessage::warning("User not found.")));
    };

    let record = &mut records[position];
    let old_value = match record.set_field(field, new_value) {
        Ok(old) => old,
        Err(e @ UserbaseError::InvalidValue { .. }) => {
            log.record(format!(
                "Invalid value for edit: Name={}, Field={}, Value={}",
                record.name, field, new_value
            ));
            return Ok(CmdResult::default().with_message(CmdMessage::warning(e.to_string())));
        }
        Err(e) => return Err(e),
    };
    let updated = record.clone();
    store.save(&records)?;

    log.record(format!(
        "User edited: Name={}, Field={}, Old Value={}, New Value={}",
        updated.name, field, old_value, new_value
    ));

    Ok(CmdResult::default()
        .with_affected_records(vec![updated])
        .with_message(CmdMessage::success("User updated successfully!")))
}

/// Edit the first record matching `query`.
pub fn run_by_name<S: DataStore>(
    store: &mut S,
    log: &EventLog,
    query: &str,
    field_name: &str,
    new_value: &str,
    options: MatchOptions,
) -> Result<CmdResult> {
    let records = store.load();
    match matcher::find(query, &records, options).into_iter().next() {
        Some(target) => run(store, log, &target, field_name, new_value),
        None => {
            log.record(format!("User to edit not found: {}", query));
            Ok(CmdResult::default().with_message(CmdMessage::warning("User not found.")))
        }
    }
}

fn field_list() -> String {
    Field::ALL
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Age;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn changes_only_the_named_field() {
        let mut fixture = StoreFixture::new().with_user("Ann", 40).with_user("Ben", 50);
        let log = EventLog::in_memory();
        let target = fixture.store.load()[1].clone();

        let result = run(&mut fixture.store, &log, &target, "email", "ben@example.com").unwrap();
        assert!(result.is_success());

        let stored = fixture.store.load();
        assert_eq!(stored[0].email, None);
        assert_eq!(stored[1].email.as_deref(), Some("ben@example.com"));
        assert_eq!(stored[1].name, "Ben");
        assert_eq!(stored[1].created_at, target.created_at);
        assert!(log.contains(
            "User edited: Name=Ben, Field=Email, Old Value=N/A, New Value=ben@example.com"
        ));
    }

    #[test]
    fn age_is_parsed() {
        let mut fixture = StoreFixture::new().with_user("Ann", 40);
        let log = EventLog::discard();
        let target = fixture.store.load()[0].clone();

        run(&mut fixture.store, &log, &target, "Age", "41").unwrap();
        assert_eq!(fixture.store.load()[0].age, Age::Years(41));
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let mut fixture = StoreFixture::new().with_user("Ann", 40);
        let log = EventLog::in_memory();
        let target = fixture.store.load()[0].clone();

        let result = run(&mut fixture.store, &log, &target, "Age", "old").unwrap();
        assert!(!result.is_success());
        assert_eq!(fixture.store.save_count(), 0);
        assert!(log.contains("Invalid value for edit"));
    }

    #[test]
    fn invalid_field_leaves_files_untouched() {
        let dir = TempDir::new().unwrap();
        let log = EventLog::in_memory();
        let mut store = FileStore::new(
            dir.path().join("active.json"),
            dir.path().join("backup.json"),
            log.clone(),
        );
        crate::commands::add::run(&mut store, &log, crate::model::NewUser::new("Ann", 40))
            .unwrap();
        let before = fs::read(dir.path().join("active.json")).unwrap();
        let target = store.load()[0].clone();

        let result = run(&mut store, &log, &target, "Nickname", "X").unwrap();

        assert!(!result.is_success());
        assert!(result.affected_records.is_empty());
        assert_eq!(fs::read(dir.path().join("active.json")).unwrap(), before);
        assert!(log.contains("Invalid field for edit: Nickname"));
    }

    #[test]
    fn stale_target_is_not_found() {
        let mut fixture = StoreFixture::new().with_user("Ann", 40);
        let log = EventLog::discard();
        let mut target = fixture.store.load()[0].clone();
        target.age = Age::Years(99);

        let result = run(&mut fixture.store, &log, &target, "Name", "Anne").unwrap();
        assert!(!result.is_success());
        assert_eq!(fixture.store.save_count(), 0);
        assert_eq!(fixture.store.load()[0].name, "Ann");
    }

    #[test]
    fn edits_first_of_duplicate_records() {
        let mut fixture = StoreFixture::new().with_user("Dana", 1).with_user("Dana", 2);
        let log = EventLog::discard();

        run_by_name(
            &mut fixture.store,
            &log,
            "dana",
            "School",
            "Westfield",
            MatchOptions::default(),
        )
        .unwrap();

        let stored = fixture.store.load();
        assert_eq!(stored[0].school.as_deref(), Some("Westfield"));
        assert_eq!(stored[1].school, None);
    }

    #[test]
    fn run_by_name_without_match() {
        let mut fixture = StoreFixture::new().with_user("Ann", 40);
        let log = EventLog::in_memory();

        let result = run_by_name(
            &mut fixture.store,
            &log,
            "zzzzzz",
            "Name",
            "X",
            MatchOptions::default(),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "User not found.");
        assert!(log.contains("User to edit not found: zzzzzz"));
    }
}
