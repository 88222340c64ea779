//! CLI definition using clap

use clap::{ArgAction, Parser, Subcommand};
use reminder_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "service-reminder")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle service reminders: next service at +1 year or +10,000 km, whichever comes first")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override for this run
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Raw service figures as typed by the user
#[derive(clap::Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Vehicle number (e.g., "MH01AB1234")
    pub vehicle: String,

    /// Last service date (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub last_date: String,

    /// Odometer reading at the last service (km)
    #[arg(long, short = 'l')]
    pub last_km: String,

    /// Current odometer reading (km)
    #[arg(long, short = 'c')]
    pub current_km: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a vehicle (replaces an existing record with the same number)
    Add(ServiceArgs),

    /// Record a new service for an existing vehicle
    Update(ServiceArgs),

    /// Show reminders for all vehicles
    List {
        /// Reference date (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,

        /// Only vehicles that are overdue, due today, or due soon
        #[arg(long)]
        attention: bool,
    },

    /// Show the reminder for one vehicle
    Show {
        /// Vehicle number
        vehicle: String,

        /// Reference date (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Export all records as CSV
    ExportCsv {
        /// Output CSV file path
        output: PathBuf,
    },

    /// Back up the record store to a JSON file
    Backup {
        /// Output JSON file path
        output: PathBuf,
    },

    /// Replace the record store with a JSON backup
    Restore {
        /// Path to backup JSON file
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Permanently delete all records
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Replace the store with two demo vehicles
    Sample {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "service-reminder",
            "add",
            "MH01AB1234",
            "--last-date",
            "2024-11-01",
            "--last-km",
            "12000",
            "--current-km",
            "21000",
        ])
        .unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.vehicle, "MH01AB1234");
                assert_eq!(args.last_km, "12000");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["service-reminder", "list", "-vv", "--format", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
