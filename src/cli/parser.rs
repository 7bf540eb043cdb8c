use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for emstrack
/// CLI front end for the EMS backend: attendance, stats and announcements
#[derive(Parser)]
#[command(
    name = "emstrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in/out, track breaks and follow announcements against the EMS backend",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (useful for tests or staging)
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Log in and store the session credentials locally
    Login {
        /// Account role (admin or employee)
        #[arg(long, default_value = "employee")]
        role: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Drop the stored credentials and notify the backend
    Logout,

    /// Clock in and start a work session
    ClockIn {
        /// Work location: O=Office, H=Home (or full names)
        #[arg(long = "location", short = 'l')]
        location: Option<String>,
    },

    /// Clock out of the open work session
    ClockOut,

    /// Start a break within the open session
    BreakIn,

    /// End the active break
    BreakOut,

    /// Show today's attendance box: current session, break, daily totals
    Status,

    /// List attendance sessions and the period summary
    Logs {
        /// Filter by year/month/day or a custom range (e.g. 2026-03, 2026-01:2026-03)
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's sessions")]
        now: bool,
    },

    /// Admin: today's present/absent/on-break overview
    Today,

    /// Admin: all-employee attendance report
    Stats {
        #[arg(long, help = "Aggregation range keyword understood by the backend")]
        range: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        month: Option<u32>,

        #[arg(long)]
        department: Option<String>,
    },

    /// Admin: employee directory
    Employees {
        #[arg(long)]
        department: Option<String>,

        #[arg(long = "include-inactive")]
        include_inactive: bool,
    },

    /// Admin: one employee's attendance detail
    Employee {
        /// Employee id
        id: String,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Admin: broadcast an announcement (max 500 characters)
    Announce {
        message: String,
    },

    /// Follow the live announcement feed
    Feed {
        /// Mark an announcement as read and exit
        #[arg(long = "ack", value_name = "ID")]
        ack: Option<String>,
    },

    /// Export fetched attendance sessions
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
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
