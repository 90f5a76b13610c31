use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for animtrack
/// CLI application to track staff clock events and planned hours with SQLite
#[derive(Parser)]
#[command(
    name = "animtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track staff clock-in/out, breaks and planned hours; summarize planned vs actual time",
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

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
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

    /// Record a clock action (arrival, break_start, break_end, departure)
    Clock {
        /// Action: arrival|in, break_start|pause, break_end|resume, departure|out
        kind: String,

        #[arg(long, short, help = "Subject (staff member) id")]
        subject: Option<String>,

        #[arg(long, help = "Date of the action (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Time of the action (HH:MM[:SS], default now)")]
        at: Option<String>,
    },

    /// Delete a clock event by id
    Del {
        /// Event id (see `list --events`)
        id: i64,
    },

    /// Set planned minutes for a date or a range of dates
    Plan {
        /// Date or range expression (YYYY-MM-DD, YYYY-MM, A:B)
        dates: String,

        #[arg(long, short, help = "Subject (staff member) id")]
        subject: Option<String>,

        #[arg(
            long = "duration",
            short = 'd',
            help = "Planned time: minutes, 8h, 7h30 or 7:30 (default from config)"
        )]
        duration: Option<String>,
    },

    /// List daily worked time
    List {
        #[arg(long, short, help = "Subject (staff member) id")]
        subject: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today")]
        now: bool,

        #[arg(long = "events", help = "List raw clock events")]
        events: bool,

        #[arg(long = "details", help = "Show worked intervals of each day")]
        details: bool,
    },

    /// Planned vs actual summary for a week, a month or a range
    Summary {
        #[arg(long, short, help = "Subject (staff member) id")]
        subject: Option<String>,

        #[arg(long, value_name = "DATE", help = "Week containing DATE")]
        week: Option<String>,

        #[arg(long, value_name = "YYYY-MM", help = "Calendar month")]
        month: Option<String>,

        #[arg(long, value_name = "RANGE", help = "Custom range expression")]
        range: Option<String>,

        #[arg(long = "days", help = "Show one line per day")]
        days: bool,
    },

    /// Who is present on a date
    Status {
        #[arg(long, help = "Date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Report missing or incomplete timesheets
    Check {
        #[arg(long, short, help = "Subject (staff member) id")]
        subject: Option<String>,

        #[arg(long, value_name = "RANGE", help = "Range expression (default: current month)")]
        range: Option<String>,
    },

    /// Create periods from a date range, optionally split into weeks
    Split {
        #[arg(long, help = "Period name")]
        label: Option<String>,

        #[arg(long, help = "First day (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long, help = "Last day, included (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(
            long,
            conflicts_with_all = ["start", "end"],
            help = "Use a school vacation by name (Toussaint, Noël, Hiver, Printemps, Été)"
        )]
        vacation: Option<String>,

        #[arg(long, requires = "vacation", help = "Starting year of the school year")]
        year: Option<i32>,

        #[arg(long = "weeks", help = "Split into weekly periods")]
        weeks: bool,

        #[arg(long = "save", help = "Store the resulting periods")]
        save: bool,
    },

    /// List school vacations
    Vacations {
        #[arg(long, help = "Starting year of the school year (default: current)")]
        year: Option<i32>,

        #[arg(long, default_value_t = 1, help = "Number of school years")]
        count: usize,
    },

    /// List stored periods
    Periods,

    /// Export clock events or daily summaries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short, help = "Only this subject")]
        subject: Option<String>,

        #[arg(long = "days", help = "Export per-day planned/actual rows instead of events")]
        days: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
