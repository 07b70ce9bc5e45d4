use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dutylog
/// CLI application to clock work, break and lunch sessions with SQLite
#[derive(Parser)]
#[command(
    name = "dutylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock work, break and lunch sessions and review the daily duty log",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start (or switch to) a work session
    Work {
        #[arg(long, short, help = "User id (default: configured default_user)")]
        user: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Instant of the action (RFC 3339 or 'YYYY-MM-DD HH:MM', UTC); default now"
        )]
        at: Option<String>,
    },

    /// Start (or switch to) a break
    Break {
        #[arg(long, short, help = "User id (default: configured default_user)")]
        user: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Instant of the action (RFC 3339 or 'YYYY-MM-DD HH:MM', UTC); default now"
        )]
        at: Option<String>,
    },

    /// Start (or switch to) a lunch break
    Lunch {
        #[arg(long, short, help = "User id (default: configured default_user)")]
        user: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Instant of the action (RFC 3339 or 'YYYY-MM-DD HH:MM', UTC); default now"
        )]
        at: Option<String>,
    },

    /// Clock out: close the open session
    Out {
        #[arg(long, short, help = "User id (default: configured default_user)")]
        user: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Instant of the action (RFC 3339 or 'YYYY-MM-DD HH:MM', UTC); default now"
        )]
        at: Option<String>,
    },

    /// Show the live status of a day
    Status {
        #[arg(long, short)]
        user: Option<String>,

        #[arg(long, value_name = "TIMESTAMP", help = "Evaluate at this instant; default now")]
        at: Option<String>,
    },

    /// List the session history
    List {
        #[arg(long, short)]
        user: Option<String>,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, A:B)"
        )]
        period: Option<String>,

        #[arg(long = "today", conflicts_with = "period", help = "Show only today's record")]
        today: bool,
    },

    /// Export session rows
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short)]
        user: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
