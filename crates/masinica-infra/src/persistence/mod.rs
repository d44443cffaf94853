//! Persistence implementations
//!
//! Both repositories read the whole collection, mutate it in memory and
//! write it back in full.

mod collections;
mod store_event_repo;
mod store_vehicle_repo;

pub use collections::{EVENTS_KEY, VEHICLES_KEY};
pub use store_event_repo::StoreEventRepository;
pub use store_vehicle_repo::StoreVehicleRepository;
