//! Store-backed event repository

use chrono::NaiveDate;
use masinica_domain::{Event, EventRepository};
use masinica_store::KeyValueStore;
use masinica_types::{Error, NotFoundError, ValidationError};

use super::collections::{events_entry, load_events};

/// Implementation of EventRepository over a key-value store
pub struct StoreEventRepository<S> {
    store: S,
}

impl<S: KeyValueStore> StoreEventRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn persist(&self, events: &[Event]) -> Result<(), Error> {
        self.store.set_many(vec![events_entry(events)?])
    }
}

impl<S: KeyValueStore> EventRepository for StoreEventRepository<S> {
    fn list_all(&self) -> Result<Vec<Event>, Error> {
        load_events(&self.store)
    }

    fn add(
        &self,
        plate: &str,
        label: &str,
        expiration_date: Option<NaiveDate>,
    ) -> Result<Event, Error> {
        let plate = plate.trim();
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::MissingLabel.into());
        }

        let mut events = load_events(&self.store)?;
        if events.iter().any(|e| e.matches(plate, label)) {
            tracing::warn!(plate, label, "Rejected duplicate event");
            return Err(ValidationError::DuplicateEvent {
                vehicle: plate.to_string(),
                label: label.to_string(),
            }
            .into());
        }

        let expiration_date = expiration_date.ok_or(ValidationError::MissingExpirationDate)?;

        let event = Event::new(plate, label, expiration_date);
        events.push(event.clone());
        self.persist(&events)?;
        tracing::info!(plate, label, %expiration_date, "Event added");
        Ok(event)
    }

    fn update_expiration(&self, plate: &str, label: &str, new_date: NaiveDate) -> Result<Event, Error> {
        let (plate, label) = (plate.trim(), label.trim());
        let mut events = load_events(&self.store)?;
        let event = events
            .iter_mut()
            .find(|e| e.matches(plate, label))
            .ok_or_else(|| NotFoundError::Event {
                vehicle: plate.to_string(),
                label: label.to_string(),
            })?;

        event.expiration_date = new_date;
        let updated = event.clone();
        self.persist(&events)?;
        tracing::info!(plate, label, %new_date, "Event expiration updated");
        Ok(updated)
    }

    fn delete(&self, plate: &str, label: &str) -> Result<(), Error> {
        let (plate, label) = (plate.trim(), label.trim());
        let mut events = load_events(&self.store)?;
        let before = events.len();
        events.retain(|e| !e.matches(plate, label));

        if events.len() == before {
            tracing::debug!(plate, label, "Delete of unknown event ignored");
            return Ok(());
        }

        self.persist(&events)?;
        tracing::info!(plate, label, "Event deleted");
        Ok(())
    }
}
