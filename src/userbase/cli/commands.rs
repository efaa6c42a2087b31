//! # CLI Layer
//!
//! This module is **one possible shell** over the userbase API. It is the
//! only place that parses arguments, writes to the terminal and decides the
//! exit code. Business rules live in the library's `commands` module.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_tracing()`: stderr diagnostics for `--verbose` / `RUST_LOG`
//! - `handle_*()`: Per-command handlers that call the API and render output

use super::render::{print_config, print_messages, print_records};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use userbase::api::{ConfigAction, UserbaseApi};
use userbase::error::Result;
use userbase::init::{initialize, resolve_data_dir};
use userbase::model::NewUser;
use userbase::store::fs::FileStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = resolve_data_dir(&cwd, cli.dir.as_deref(), cli.global)?;
    tracing::debug!("using data directory {}", data_dir.display());

    let ctx = initialize(data_dir)?;
    let mut api = ctx.api;

    api.log_event("Program opened");
    let command = cli.command.unwrap_or(Commands::List);
    api.log_event(format!("Selected command: {}", command.name()));

    let outcome = dispatch(&mut api, command);
    api.log_event("Exiting program");
    outcome
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(api: &mut UserbaseApi<FileStore>, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            name,
            age,
            email,
            address,
            school,
            other_info,
        } => {
            let user = NewUser {
                name,
                age,
                email,
                address,
                school,
                other_info,
            };
            handle_add(api, user)
        }
        Commands::Search { query } => handle_search(api, &query.join(" ")),
        Commands::List => handle_list(api),
        Commands::Edit {
            query,
            field,
            value,
        } => handle_edit(api, &query, &field, &value),
        Commands::Delete { query } => handle_delete(api, &query.join(" ")),
        Commands::Import { path } => handle_import(api, &path),
        Commands::Export { path } => handle_export(api, &path),
        Commands::Backup => handle_backup(api),
        Commands::Config { key, value } => handle_config(api, key, value),
    }
}

fn handle_add(api: &mut UserbaseApi<FileStore>, user: NewUser) -> Result<()> {
    let result = api.add_user(user)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &mut UserbaseApi<FileStore>, query: &str) -> Result<()> {
    let result = api.search_users(query);
    if !result.listed_records.is_empty() {
        println!("Matching users found:");
        print_records(&result.listed_records);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &mut UserbaseApi<FileStore>) -> Result<()> {
    let result = api.list_users();
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    api: &mut UserbaseApi<FileStore>,
    query: &str,
    field: &str,
    value: &str,
) -> Result<()> {
    let result = api.edit_user_by_name(query, field, value)?;
    print_records(&result.affected_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut UserbaseApi<FileStore>, query: &str) -> Result<()> {
    let result = api.delete_user(query)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(api: &mut UserbaseApi<FileStore>, path: &Path) -> Result<()> {
    let result = api.import_users(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(api: &mut UserbaseApi<FileStore>, path: &Path) -> Result<()> {
    let result = api.export_users(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(api: &mut UserbaseApi<FileStore>) -> Result<()> {
    let result = api.backup()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &mut UserbaseApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
