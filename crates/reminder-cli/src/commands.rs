//! Command handlers

use std::path::PathBuf;

use chrono::NaiveDate;
use reminder_app::app::ReminderService;
use reminder_app::config::Config;
use reminder_app::repository::open_record_store;
use reminder_domain::service::{parse_service_date, today};
use reminder_store::JsonFileStore;
use reminder_types::{OutputFormat, Result, ServiceInput};
use tracing::debug;

use crate::cli::{Cli, Commands, ServiceArgs};
use crate::output::{output_reminder, output_reminders, output_saved};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.store_dir.is_some() {
        config.store_dir = cli.store_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Config {
            show,
            set_store_dir,
            set_output,
            reset,
        } => cmd_config(show, set_store_dir, set_output, reset),
        command => {
            let store = open_record_store(&config)?;
            debug!(path = %store.store_path().display(), "using record store");
            run_with_store(command, ReminderService::new(store), output_format)
        }
    }
}

fn run_with_store(
    command: Commands,
    service: ReminderService<JsonFileStore>,
    output_format: OutputFormat,
) -> Result<()> {
    match command {
        Commands::Add(args) => {
            let outcome = service.add_vehicle(&to_input(args))?;
            output_saved(output_format, &outcome, "added")
        }

        Commands::Update(args) => {
            let outcome = service.update_vehicle(&to_input(args))?;
            output_saved(output_format, &outcome, "updated")
        }

        Commands::List { as_of, attention } => {
            let mut reminders = service.list_reminders(reference_date(as_of.as_deref())?)?;
            if attention {
                reminders.retain(|r| r.status.needs_attention());
            }
            output_reminders(output_format, &reminders)
        }

        Commands::Show { vehicle, as_of } => {
            let reminder = service.reminder(&vehicle, reference_date(as_of.as_deref())?)?;
            output_reminder(output_format, &reminder)
        }

        Commands::ExportCsv { output } => {
            let rows = service.export_csv(&output)?;
            println!("CSV exported to: {} ({} vehicles)", output.display(), rows);
            Ok(())
        }

        Commands::Backup { output } => {
            let count = service.backup(&output)?;
            println!("Backup saved to {} ({} vehicles)", output.display(), count);
            Ok(())
        }

        Commands::Restore { file, yes } => {
            if !confirm("Replace all records with the contents of this backup?", yes) {
                return Ok(());
            }
            let count = service.restore(&file)?;
            println!("Data restored from {} ({} vehicles)", file.display(), count);
            Ok(())
        }

        Commands::Clear { yes } => {
            if !confirm("Are you sure you want to permanently delete all records?", yes) {
                return Ok(());
            }
            service.clear()?;
            println!("All data cleared");
            Ok(())
        }

        Commands::Sample { yes } => {
            if !confirm("Replace all records with sample data?", yes) {
                return Ok(());
            }
            let count = service.load_sample_data()?;
            println!("Sample data saved ({} vehicles)", count);
            Ok(())
        }

        Commands::Config { .. } => unreachable!("config is handled before opening the store"),
    }
}

fn to_input(args: ServiceArgs) -> ServiceInput {
    ServiceInput {
        vehicle_id: args.vehicle,
        last_service_date: args.last_date,
        last_service_odometer: args.last_km,
        current_odometer: args.current_km,
    }
}

/// `--as-of` date, or today's date
fn reference_date(as_of: Option<&str>) -> Result<NaiveDate> {
    match as_of {
        Some(s) => parse_service_date(s),
        None => Ok(today()),
    }
}

fn confirm(question: &str, yes: bool) -> bool {
    if yes {
        return true;
    }
    println!("{} [y/N]", question);
    let mut input = String::new();
    std::io::stdin().read_line(&mut input).ok();
    if !input.trim().eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return false;
    }
    true
}

fn cmd_config(
    show: bool,
    set_store_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(store_dir) = set_store_dir {
        config.store_dir = Some(store_dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
