//! Infrastructure layer
//!
//! Concrete implementations of the domain repository traits on top of the
//! key-value store.

pub mod persistence;

pub use persistence::{StoreEventRepository, StoreVehicleRepository, EVENTS_KEY, VEHICLES_KEY};
