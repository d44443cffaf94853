//! Store-backed vehicle repository

use masinica_domain::VehicleRepository;
use masinica_store::KeyValueStore;
use masinica_types::{Error, NotFoundError, ValidationError};

use super::collections::{events_entry, load_events, load_vehicles, vehicles_entry};

/// Implementation of VehicleRepository over a key-value store
///
/// Renames and deletes also rewrite the `events` collection, in the same
/// store write as the vehicle list.
pub struct StoreVehicleRepository<S> {
    store: S,
}

impl<S: KeyValueStore> StoreVehicleRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> VehicleRepository for StoreVehicleRepository<S> {
    fn list(&self) -> Result<Vec<String>, Error> {
        load_vehicles(&self.store)
    }

    fn add(&self, plate: &str) -> Result<String, Error> {
        let plate = plate.trim();
        if plate.is_empty() {
            return Err(ValidationError::EmptyPlate.into());
        }

        let mut plates = load_vehicles(&self.store)?;
        if plates.iter().any(|p| p == plate) {
            tracing::warn!(plate, "Rejected duplicate vehicle");
            return Err(ValidationError::DuplicatePlate(plate.to_string()).into());
        }

        plates.push(plate.to_string());
        self.store.set_many(vec![vehicles_entry(&plates)?])?;
        tracing::info!(plate, "Vehicle added");
        Ok(plate.to_string())
    }

    fn rename(&self, old_plate: &str, new_plate: &str) -> Result<String, Error> {
        let old_plate = old_plate.trim();
        let new_plate = new_plate.trim();
        if new_plate.is_empty() {
            return Err(ValidationError::EmptyPlate.into());
        }

        let mut plates = load_vehicles(&self.store)?;
        let position = plates
            .iter()
            .position(|p| p == old_plate)
            .ok_or_else(|| NotFoundError::Vehicle(old_plate.to_string()))?;

        if new_plate == old_plate {
            return Ok(new_plate.to_string());
        }
        if plates.iter().any(|p| p == new_plate) {
            tracing::warn!(old_plate, new_plate, "Rejected rename onto existing vehicle");
            return Err(ValidationError::DuplicatePlate(new_plate.to_string()).into());
        }

        // Events may reference a plate that is not in the vehicle list
        let mut events = load_events(&self.store)?;
        if let Some(clash) = events.iter().find(|e| {
            e.vehicle == old_plate && events.iter().any(|o| o.matches(new_plate, &e.label))
        }) {
            tracing::warn!(old_plate, new_plate, label = %clash.label, "Rejected rename onto existing events");
            return Err(ValidationError::DuplicateEvent {
                vehicle: new_plate.to_string(),
                label: clash.label.clone(),
            }
            .into());
        }

        plates[position] = new_plate.to_string();
        let mut moved = 0usize;
        for event in events.iter_mut().filter(|e| e.vehicle == old_plate) {
            event.vehicle = new_plate.to_string();
            moved += 1;
        }

        self.store
            .set_many(vec![vehicles_entry(&plates)?, events_entry(&events)?])?;
        tracing::info!(old_plate, new_plate, events = moved, "Vehicle renamed");
        Ok(new_plate.to_string())
    }

    fn delete(&self, plate: &str) -> Result<(), Error> {
        let plate = plate.trim();
        let mut plates = load_vehicles(&self.store)?;
        let mut events = load_events(&self.store)?;

        let plates_before = plates.len();
        let events_before = events.len();
        plates.retain(|p| p != plate);
        events.retain(|e| e.vehicle != plate);

        if plates.len() == plates_before && events.len() == events_before {
            tracing::debug!(plate, "Delete of unknown vehicle ignored");
            return Ok(());
        }

        self.store
            .set_many(vec![vehicles_entry(&plates)?, events_entry(&events)?])?;
        tracing::info!(
            plate,
            events = events_before - events.len(),
            "Vehicle deleted"
        );
        Ok(())
    }
}
