//! # Userbase Architecture
//!
//! Userbase is a small **record manager library** with a command-line client.
//! It keeps a list of people (name, age, contact details, creation time) in
//! a JSON file mirrored to a second file, and finds them by approximate name.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders records, handles terminal I/O  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds the store, the event log and matching options      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / search / list / edit / delete / import / export /  │
//! │    backup, each load → mutate → save                        │
//! │  - Name lookups go through matcher.rs                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (primary + backup), InMemoryStore (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`event_log::EventLog`] runs alongside every layer. It is created once
//! by [`init::initialize`] and passed down explicitly; there is no global
//! logger state.
//!
//! ## No Long-Lived State
//!
//! Every operation reads the whole collection from disk and, if it changes
//! anything, writes the whole collection back to both files. Nothing is
//! cached between operations.
//!
//! ## Key Principle: No Terminal I/O in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`CmdResult`, `Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Lifecycle rules for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`matcher`]: Approximate name matching
//! - [`model`]: `Record`, `NewUser`, `Field`
//! - [`event_log`]: Timestamped audit log
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod event_log;
pub mod init;
pub mod matcher;
pub mod model;
pub mod store;
