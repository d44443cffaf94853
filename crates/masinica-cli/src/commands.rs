//! Command handlers

use crate::cli::{Cli, Commands, EventAction, VehicleAction};
use crate::output::Printer;
use chrono::{Local, NaiveDate};
use masinica_app::config::is_valid_date_format;
use masinica_app::{Config, Garage, Route};
use masinica_domain::parse_user_date;
use masinica_types::{ConfigError, EventLabel, OutputFormat, Result};
use serde_json::json;
use std::path::PathBuf;

const NO_EVENTS: &str = "No events added yet.";

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    let printer = Printer {
        format: cli.format.unwrap_or(config.output_format),
        date_format: config.date_format(),
    };

    // One "today" for the whole invocation
    let today = Local::now().date_naive();
    tracing::debug!(%today, format = %printer.format, "Executing command");

    match cli.command {
        Commands::Vehicle { action } => {
            let garage = Garage::open(&config)?;
            cmd_vehicle(&garage, &printer, action)
        }

        Commands::Event { action } => {
            let garage = Garage::open(&config)?;
            cmd_event(&garage, &printer, action, today)
        }

        Commands::Upcoming { within } => {
            let garage = Garage::open(&config)?;
            let statuses = garage.upcoming(today, within)?;
            let empty = match within {
                Some(days) => format!("No events expire within {} days.", days),
                None => NO_EVENTS.to_string(),
            };
            printer.statuses("Upcoming expirations", &statuses, true, &empty)
        }

        Commands::Open { route } => {
            let garage = Garage::open(&config)?;
            cmd_open(&garage, &printer, &route, today)
        }

        Commands::Config {
            show,
            set_data_dir,
            set_output,
            set_date_format,
            reset,
        } => cmd_config(show, set_data_dir, set_output, set_date_format, reset),
    }
}

fn cmd_vehicle(garage: &Garage, printer: &Printer, action: VehicleAction) -> Result<()> {
    match action {
        VehicleAction::List => printer.vehicles(&garage.vehicles()?),

        VehicleAction::Add { plate } => {
            let plate = garage.add_vehicle(&plate)?;
            printer.done(&format!("Added vehicle {}", plate), &json!({ "plate": plate }))
        }

        VehicleAction::Rename { old, new } => {
            let old = old.trim();
            let renamed = garage.rename_vehicle(old, &new)?;
            printer.done(
                &format!("Renamed vehicle {} to {}", old, renamed),
                &json!({ "from": old, "plate": renamed }),
            )
        }

        VehicleAction::Delete { plate } => {
            let plate = plate.trim();
            garage.delete_vehicle(plate)?;
            printer.done(
                &format!("Deleted vehicle {} and its events", plate),
                &json!({ "plate": plate, "deleted": true }),
            )
        }
    }
}

fn cmd_event(garage: &Garage, printer: &Printer, action: EventAction, today: NaiveDate) -> Result<()> {
    match action {
        EventAction::List { plate } => {
            let statuses = garage.event_statuses(&plate, today)?;
            printer.statuses(&format!("Events of {}", plate.trim()), &statuses, false, NO_EVENTS)
        }

        EventAction::Add { plate, label, date } => {
            let date = parse_user_date(&date)?;
            let event = garage.add_event(&plate, &label, Some(date))?;
            printer.event_saved("Added", &event)
        }

        EventAction::Update { plate, label, date } => {
            let date = parse_user_date(&date)?;
            let event = garage.update_event(&plate, &label, date)?;
            printer.event_saved("Updated", &event)
        }

        EventAction::Delete { plate, label } => {
            let (plate, label) = (plate.trim(), label.trim());
            garage.delete_event(plate, label)?;
            printer.done(
                &format!("Deleted {} for {}", label, plate),
                &json!({ "vehicle": plate, "label": label, "deleted": true }),
            )
        }

        EventAction::Show { plate, label } => {
            let status = garage.event_status(&plate, &label, today)?;
            printer.status(&status)
        }

        EventAction::Labels => {
            let labels: Vec<&str> = EventLabel::ALL.iter().map(|l| l.as_str()).collect();
            if printer.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&labels)?);
            } else {
                for label in labels {
                    println!("{}", label);
                }
            }
            Ok(())
        }
    }
}

fn cmd_open(garage: &Garage, printer: &Printer, path: &str, today: NaiveDate) -> Result<()> {
    let requested: Route = path.parse()?;
    let route = garage.resolve(&requested)?;
    if route != requested {
        eprintln!("{} no longer exists, showing {}", requested, route);
    }

    match route {
        Route::Home => printer.vehicles(&garage.vehicles()?),
        Route::Vehicle { plate } => {
            let statuses = garage.event_statuses(&plate, today)?;
            printer.statuses(&format!("Events of {}", plate), &statuses, false, NO_EVENTS)
        }
        Route::Event { plate, label } => printer.status(&garage.event_status(&plate, &label, today)?),
    }
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_date_format: Option<String>,
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

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(pattern) = set_date_format {
        if !is_valid_date_format(&pattern) {
            return Err(ConfigError::ParseError(format!("invalid date format: {}", pattern)).into());
        }
        config.date_format = pattern;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
