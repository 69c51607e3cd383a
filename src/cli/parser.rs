use crate::export::ExportFormat;
use crate::models::action::AttendanceAction;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for dutylog
/// Attendance clock-in/out ledger and worktime reconciliation on SQLite
#[derive(Parser)]
#[command(
    name = "dutylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Duty attendance ledger: clock in/out, duty sessions and worktime against expected hours",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file (useful for tests or several setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Administrator password for gated operations (prompted when omitted)
    #[arg(global = true, long = "password", value_name = "PW")]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// `--from` / `--to` / `--range` window shared by the query commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    #[arg(long = "from", value_name = "YYYY-MM-DD", help = "First day of the window")]
    pub from: Option<String>,

    #[arg(long = "to", value_name = "YYYY-MM-DD", help = "Last day of the window")]
    pub to: Option<String>,

    #[arg(
        long = "range",
        value_name = "RANGE",
        help = "Year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, A:B)"
    )]
    pub range: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration record and the first period store
    Init {
        /// Period (semester) folder; the administrator password comes from
        /// the global `--password` (default 1234)
        #[arg(long = "folder", value_name = "DIR")]
        folder: String,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show or switch the active period
    Period {
        #[arg(long = "set", value_name = "DIR", help = "Switch to another period folder")]
        set: Option<String>,
    },

    /// Manage the roster of the active period (administrator)
    Staff {
        #[arg(long = "list", help = "List roster members")]
        list: bool,

        #[arg(long = "add", value_name = "NAME", help = "Add a roster member")]
        add: Option<String>,

        #[arg(long = "remove", value_name = "NAME", help = "Remove a roster member (records are kept)")]
        remove: Option<String>,
    },

    /// Clock in
    In {
        name: String,

        #[arg(
            long = "at",
            value_name = "YYYY-MM-DD HH:MM:SS",
            help = "Backdated punch (administrator)"
        )]
        at: Option<String>,
    },

    /// Clock out
    Out {
        name: String,

        #[arg(
            long = "at",
            value_name = "YYYY-MM-DD HH:MM:SS",
            help = "Backdated punch (administrator)"
        )]
        at: Option<String>,
    },

    /// Show the most recent attendance events of a person
    Records {
        name: String,

        #[arg(long = "limit", default_value_t = 10)]
        limit: usize,
    },

    /// Delete one attendance event
    Del {
        name: String,

        #[arg(long = "action", value_enum)]
        action: AttendanceAction,

        #[arg(long = "at", value_name = "YYYY-MM-DD HH:MM:SS")]
        at: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Set the expected worktime (hours) of a person
    Expected { name: String, hours: f64 },

    /// List the duty sessions of a person
    Sessions {
        name: String,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Per-person worktime against expected hours
    Worktime {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long = "sort", help = "Order rows by name")]
        sort: bool,
    },

    /// Export the worktime table and duty sessions
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the period store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Maintain the period store (migrations, integrity checks, etc.)
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
