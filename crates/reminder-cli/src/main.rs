//! Service Reminder - vehicle maintenance due tracking
//!
//! A CLI tool that records last-service figures per vehicle and reports
//! which vehicles are overdue, due today, or due soon.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
