//! CLI definition using clap

use clap::{Parser, Subcommand};
use masinica_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "masinica")]
#[command(version)]
#[command(about = "Track vehicles and their insurance, inspection and road tax expirations")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage vehicles
    Vehicle {
        #[command(subcommand)]
        action: VehicleAction,
    },

    /// Manage compliance events of a vehicle
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Show events of all vehicles, most urgent first
    Upcoming {
        /// Only events expiring within this many days (expired ones included)
        #[arg(long, short = 'w')]
        within: Option<i64>,
    },

    /// Show the screen at a route (e.g. "/vehicle/B01ABC/ITP")
    Open {
        /// Route to open
        route: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set date display format (strftime pattern)
        #[arg(long)]
        set_date_format: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum VehicleAction {
    /// List saved vehicles
    List,

    /// Add a vehicle
    Add {
        /// License plate (e.g. "B123ABC")
        plate: String,
    },

    /// Change a vehicle's license plate
    Rename {
        /// Current license plate
        old: String,
        /// New license plate
        new: String,
    },

    /// Delete a vehicle and all of its events
    Delete {
        /// License plate
        plate: String,
    },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// List events of a vehicle with days left
    List {
        /// License plate
        plate: String,
    },

    /// Add an event
    Add {
        /// License plate
        plate: String,
        /// Event type (RCA, CASCO, ITP, ROVINIETA)
        label: String,
        /// Expiration date (YYYY-MM-DD or DD/MM/YYYY)
        date: String,
    },

    /// Change an event's expiration date
    Update {
        /// License plate
        plate: String,
        /// Event type
        label: String,
        /// New expiration date (YYYY-MM-DD or DD/MM/YYYY)
        date: String,
    },

    /// Delete an event
    Delete {
        /// License plate
        plate: String,
        /// Event type
        label: String,
    },

    /// Show one event
    Show {
        /// License plate
        plate: String,
        /// Event type
        label: String,
    },

    /// List the available event types
    Labels,
}
