//! Application service layer
//!
//! Orchestrates between a front end (CLI, or any screen layer) and the
//! domain/infrastructure layers:
//! - `garage`: vehicle and event use cases
//! - `change`: notifications sent after each successful mutation
//! - `route`: screen addresses and their resolution
//! - `config`: user configuration

pub mod change;
pub mod config;
pub mod garage;
pub mod route;

pub use change::Change;
pub use config::Config;
pub use garage::Garage;
pub use route::Route;
