//! Repository trait definitions for data persistence

use chrono::NaiveDate;

use crate::model::Event;
use masinica_types::Error;

/// Repository for the ordered list of vehicle plates
///
/// Plates are trimmed on every entry point and then compared exactly.
pub trait VehicleRepository {
    /// All plates in stored order
    fn list(&self) -> Result<Vec<String>, Error>;

    /// Append a new plate. Returns the plate as stored (trimmed).
    fn add(&self, plate: &str) -> Result<String, Error>;

    /// Rename a plate in place and move its events along with it.
    /// Returns the new plate as stored.
    fn rename(&self, old_plate: &str, new_plate: &str) -> Result<String, Error>;

    /// Remove a plate and every event that references it. Idempotent.
    fn delete(&self, plate: &str) -> Result<(), Error>;

    fn exists(&self, plate: &str) -> Result<bool, Error> {
        let plate = plate.trim();
        Ok(self.list()?.iter().any(|p| p == plate))
    }

    fn count(&self) -> Result<usize, Error> {
        Ok(self.list()?.len())
    }
}

/// Repository for compliance events, scoped by vehicle
pub trait EventRepository {
    /// Every stored event in insertion order
    fn list_all(&self) -> Result<Vec<Event>, Error>;

    /// Add an event. The label must be non-empty and unique for the vehicle,
    /// and a date must be given.
    fn add(
        &self,
        plate: &str,
        label: &str,
        expiration_date: Option<NaiveDate>,
    ) -> Result<Event, Error>;

    /// Change the expiration date of an existing event
    fn update_expiration(&self, plate: &str, label: &str, new_date: NaiveDate) -> Result<Event, Error>;

    /// Remove one event. Idempotent.
    fn delete(&self, plate: &str, label: &str) -> Result<(), Error>;

    fn list_for_vehicle(&self, plate: &str) -> Result<Vec<Event>, Error> {
        let plate = plate.trim();
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|e| e.vehicle == plate)
            .collect())
    }

    fn get(&self, plate: &str, label: &str) -> Result<Option<Event>, Error> {
        let (plate, label) = (plate.trim(), label.trim());
        Ok(self.list_all()?.into_iter().find(|e| e.matches(plate, label)))
    }
}
