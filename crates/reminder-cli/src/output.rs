//! Output formatting module

use reminder_app::app::SaveOutcome;
use reminder_domain::model::Reminder;
use reminder_types::{OutputFormat, Result};

pub fn output_reminders(output_format: OutputFormat, reminders: &[Reminder]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(reminders)?;
        println!("{}", content);
        return Ok(());
    }

    if reminders.is_empty() {
        println!("No vehicle data found. Use 'service-reminder sample' to create demo entries.");
        return Ok(());
    }

    for reminder in reminders {
        print_reminder(reminder);
    }
    Ok(())
}

pub fn output_reminder(output_format: OutputFormat, reminder: &Reminder) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(reminder)?;
        println!("{}", content);
    } else {
        print_reminder(reminder);
    }
    Ok(())
}

pub fn output_saved(output_format: OutputFormat, outcome: &SaveOutcome, verb: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(outcome)?;
        println!("{}", content);
        return Ok(());
    }

    for warning in &outcome.warnings {
        eprintln!("Warning: {}", warning);
    }
    println!("Vehicle {}: {}", verb, outcome.vehicle_id);
    println!(
        "Next service: {} OR {} km",
        outcome.record.next_service_date, outcome.record.next_service_odometer
    );
    Ok(())
}

fn print_reminder(reminder: &Reminder) {
    let record = &reminder.record;
    println!("Vehicle: {}", reminder.vehicle_id);
    println!("  Last Service Date : {}", record.last_service_date);
    println!("  Last Service KM   : {}", record.last_service_odometer);
    println!("  Current KM        : {}", record.current_odometer);
    println!("  Next Service Date : {}", record.next_service_date);
    println!("  Next Service KM   : {}", record.next_service_odometer);
    println!("  Status            : {}", reminder.status);
    println!("{}", "-".repeat(90));
}
