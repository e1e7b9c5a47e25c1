use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWaitlist
/// CLI application to manage a restaurant waitlist with SQLite
#[derive(Parser)]
#[command(
    name = "rwaitlist",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple restaurant waitlist CLI: queue guests and seat them in arrival order using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for errors")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a guest to the waitlist
    Add {
        /// Guest name
        name: String,

        /// Party size (falls back to the configured default when not a
        /// positive number)
        size: Option<String>,

        /// Seating notes (highchair, window table, ...)
        #[arg(long = "notes", default_value = "")]
        notes: String,
    },

    /// Show the waitlist in arrival order
    List,

    /// Remove a guest from the waitlist
    Del {
        /// Guest id to remove
        id: Option<i64>,

        #[arg(long = "all", conflicts_with = "id", help = "Clear the whole waitlist")]
        all: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the waitlist
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
