use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "userbase", bin_name = "userbase", version = get_version())]
#[command(about = "Keep a small list of people on disk and find them by name", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the store files, log and config (default: current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Use the per-user data directory instead of the current directory
    #[arg(short, long, global = true, conflicts_with = "dir")]
    pub global: bool,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a user
    #[command(alias = "a")]
    Add {
        /// Name of the user
        name: String,

        /// Age in years
        #[arg(short, long)]
        age: i64,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(short, long)]
        school: Option<String>,

        /// Anything else worth remembering
        #[arg(short, long)]
        other_info: Option<String>,
    },

    /// Find users whose name is close to the query
    #[command(alias = "s")]
    Search {
        /// Name to look for (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show every user in the order they were added
    #[command(alias = "ls")]
    List,

    /// Change one field of the first user matching the query
    #[command(alias = "e")]
    Edit {
        /// Name to look for
        query: String,

        /// Field to change: Name, Age, Email, Address, School or "Other Info"
        field: String,

        /// New value
        value: String,
    },

    /// Delete the first user matching the query
    #[command(alias = "rm")]
    Delete {
        /// Name to look for (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Replace all users with the contents of a JSON file
    Import { path: PathBuf },

    /// Write all users to a JSON file
    Export { path: PathBuf },

    /// Rewrite both store files from the current data
    Backup,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., match-cutoff)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::Search { .. } => "search",
            Commands::List => "list",
            Commands::Edit { .. } => "edit",
            Commands::Delete { .. } => "delete",
            Commands::Import { .. } => "import",
            Commands::Export { .. } => "export",
            Commands::Backup => "backup",
            Commands::Config { .. } => "config",
        }
    }
}
