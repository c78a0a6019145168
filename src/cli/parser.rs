use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
/// CLI application to track lecture attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance tracking CLI: log lectures, watch percentages, and know when you can still bunk",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode: no config file read or update, and the mirror
    /// file lives next to the database instead of the user's home
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for mistakes")]
        check: bool,
    },

    /// Log attendance counts for one or more lecturers
    Log {
        /// Entries in the form "Lecturer=PRESENT[/ABSENT]".
        ///
        /// PRESENT and ABSENT are session counts for one submission, each
        /// clamped to the configured per-lecturer maximum (default 5).
        ///
        /// Examples:
        ///   rollcall log "Tanvi Mam=2"
        ///   rollcall log "Tanvi Mam=2/1" "Raghu Sir=0/1"
        #[arg(required = true, value_name = "ENTRY")]
        entries: Vec<String>,

        /// Session date (YYYY-MM-DD); defaults to today
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Skip the remote backup push for this save
        #[arg(long = "no-sync")]
        no_sync: bool,
    },

    /// Show the attendance dashboard with attend/bunk advice
    Status,

    /// Export the ledger (raw CSV, or two-sheet XLSX with a summary)
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Push the current ledger to the remote backup now
    Sync,

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print rows from the internal audit table")]
        print: bool,
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
}
