use chrono::Local;
use colored::Colorize;
use timeago::Formatter;
use userbase::api::{CmdMessage, MessageLevel};
use userbase::config::UserbaseConfig;
use userbase::model::{Field, Record};

const SEPARATOR_WIDTH: usize = 52;
const LABEL_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[Record]) {
    for record in records {
        print!("{}", format_record(record));
    }
}

pub(super) fn print_config(config: &UserbaseConfig) {
    for (key, value) in config.list_all() {
        println!("{} = {}", key, value);
    }
}

fn format_record(record: &Record) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        let value = record.display_value(field);
        let label = format!("{}:", field.label());
        let line = match field {
            Field::Name => format!("{:<width$}{}", label, value.bold(), width = LABEL_WIDTH),
            _ => format!("{:<width$}{}", label, value, width = LABEL_WIDTH),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!(
        "{:<width$}{} {}\n",
        "Time Added:",
        record.time_added(),
        format_time_ago(record).dimmed(),
        width = LABEL_WIDTH
    ));
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out
}

fn format_time_ago(record: &Record) -> String {
    let added = record.created_at;
    let now = Local::now().naive_local();
    let elapsed = now.signed_duration_since(added).to_std().unwrap_or_default();
    format!("({})", Formatter::new().convert(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use userbase::model::NewUser;

    #[test]
    fn absent_fields_render_as_na() {
        colored::control::set_override(false);
        let record = Record::new(NewUser::new("Ann", 40).with_email("ann@example.com")).unwrap();
        let text = format_record(&record);

        assert!(text.contains("Name:       Ann\n"));
        assert!(text.contains("Email:      ann@example.com\n"));
        assert!(text.contains("School:     N/A\n"));
        assert!(text.contains("Other Info: N/A\n"));
        assert!(text.contains(&format!("Time Added: {}", record.time_added())));
    }
}
