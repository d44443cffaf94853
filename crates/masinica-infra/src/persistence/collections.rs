//! The two stored collections

use masinica_domain::Event;
use masinica_store::{KeyValueStore, KeyValueStoreExt};
use masinica_types::Result;
use serde_json::Value;

/// Ordered list of plate strings
pub const VEHICLES_KEY: &str = "vehicles";

/// List of event records
pub const EVENTS_KEY: &str = "events";

pub(crate) fn load_vehicles<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    Ok(store.get_json(VEHICLES_KEY)?.unwrap_or_default())
}

pub(crate) fn load_events<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Event>> {
    Ok(store.get_json(EVENTS_KEY)?.unwrap_or_default())
}

pub(crate) fn vehicles_entry(plates: &[String]) -> Result<(String, Value)> {
    Ok((VEHICLES_KEY.to_string(), serde_json::to_value(plates)?))
}

pub(crate) fn events_entry(events: &[Event]) -> Result<(String, Value)> {
    Ok((EVENTS_KEY.to_string(), serde_json::to_value(events)?))
}
