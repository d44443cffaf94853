//! Garage service - vehicle and event use cases
//!
//! This is the single owner of repository state for a front end. Screens
//! call the operations below in response to user actions and subscribe to
//! [`Change`] notifications to know when to re-render. Counts and emptiness
//! are always read from the stored collections. Plates and labels are
//! trimmed once here, so notifications carry the stored spelling.

use crate::change::{Change, Notifier};
use crate::config::Config;
use crate::route::Route;
use chrono::NaiveDate;
use masinica_domain::{Event, EventRepository, EventStatus, VehicleRepository};
use masinica_infra::{StoreEventRepository, StoreVehicleRepository};
use masinica_store::{FileStore, KeyValueStore, MemoryStore};
use masinica_types::{EventLabel, NotFoundError, Result};
use std::rc::Rc;
use std::sync::mpsc::Receiver;

pub struct Garage {
    vehicles: Box<dyn VehicleRepository>,
    events: Box<dyn EventRepository>,
    notifier: Notifier,
}

impl Garage {
    pub fn new(vehicles: Box<dyn VehicleRepository>, events: Box<dyn EventRepository>) -> Self {
        Self {
            vehicles,
            events,
            notifier: Notifier::default(),
        }
    }

    /// Both repositories over one shared store
    pub fn with_store<S: KeyValueStore + 'static>(store: S) -> Self {
        let store = Rc::new(store);
        Self::new(
            Box::new(StoreVehicleRepository::new(Rc::clone(&store))),
            Box::new(StoreEventRepository::new(store)),
        )
    }

    /// Open the file store in the configured data directory
    pub fn open(config: &Config) -> Result<Self> {
        let store = FileStore::open(config.data_dir()?)?;
        tracing::info!(path = %store.path().display(), "Garage opened");
        Ok(Self::with_store(store))
    }

    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Receive a [`Change`] after every successful mutation
    pub fn subscribe(&self) -> Receiver<Change> {
        self.notifier.subscribe()
    }

    // ========================================================================
    // Vehicles
    // ========================================================================

    pub fn vehicles(&self) -> Result<Vec<String>> {
        self.vehicles.list()
    }

    pub fn has_vehicle(&self, plate: &str) -> Result<bool> {
        self.vehicles.exists(plate)
    }

    pub fn add_vehicle(&self, plate: &str) -> Result<String> {
        let plate = self.vehicles.add(plate)?;
        self.notifier.publish(Change::VehicleAdded {
            plate: plate.clone(),
        });
        Ok(plate)
    }

    pub fn rename_vehicle(&self, old_plate: &str, new_plate: &str) -> Result<String> {
        let old_plate = old_plate.trim();
        let renamed = self.vehicles.rename(old_plate, new_plate)?;
        if renamed != old_plate {
            self.notifier.publish(Change::VehicleRenamed {
                from: old_plate.to_string(),
                to: renamed.clone(),
            });
        }
        Ok(renamed)
    }

    pub fn delete_vehicle(&self, plate: &str) -> Result<()> {
        let plate = plate.trim();
        let existed = self.vehicles.exists(plate)?;
        self.vehicles.delete(plate)?;
        if existed {
            self.notifier.publish(Change::VehicleDeleted {
                plate: plate.to_string(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Events of an existing vehicle, in insertion order
    pub fn events(&self, plate: &str) -> Result<Vec<Event>> {
        let plate = plate.trim();
        self.require_vehicle(plate)?;
        self.events.list_for_vehicle(plate)
    }

    /// Events of a vehicle classified against `today`
    pub fn event_statuses(&self, plate: &str, today: NaiveDate) -> Result<Vec<EventStatus>> {
        Ok(self
            .events(plate)?
            .into_iter()
            .map(|event| EventStatus::new(event, today))
            .collect())
    }

    /// One event classified against `today`
    pub fn event_status(&self, plate: &str, label: &str, today: NaiveDate) -> Result<EventStatus> {
        let (plate, label) = (plate.trim(), label.trim());
        let event = self
            .events
            .get(plate, label)?
            .ok_or_else(|| event_not_found(plate, label))?;
        Ok(EventStatus::new(event, today))
    }

    /// Every event expiring within `within_days` of `today` (all events when
    /// `None`), most urgent first
    pub fn upcoming(&self, today: NaiveDate, within_days: Option<i64>) -> Result<Vec<EventStatus>> {
        let mut statuses: Vec<EventStatus> = self
            .events
            .list_all()?
            .into_iter()
            .map(|event| EventStatus::new(event, today))
            .filter(|status| {
                within_days
                    .map(|limit| status.expiration.remaining_days <= limit)
                    .unwrap_or(true)
            })
            .collect();
        statuses.sort_by_key(|status| status.expiration.remaining_days);
        Ok(statuses)
    }

    /// Add an event whose label is picked from [`EventLabel`]
    pub fn add_event(
        &self,
        plate: &str,
        label: &str,
        expiration_date: Option<NaiveDate>,
    ) -> Result<Event> {
        let plate = plate.trim();
        let label: EventLabel = label.parse()?;
        self.require_vehicle(plate)?;

        let event = self.events.add(plate, label.as_str(), expiration_date)?;
        self.notifier.publish(Change::EventAdded {
            vehicle: event.vehicle.clone(),
            label: event.label.clone(),
        });
        Ok(event)
    }

    pub fn update_event(&self, plate: &str, label: &str, new_date: NaiveDate) -> Result<Event> {
        let event = self.events.update_expiration(plate, label, new_date)?;
        self.notifier.publish(Change::EventUpdated {
            vehicle: event.vehicle.clone(),
            label: event.label.clone(),
            expiration_date: event.expiration_date,
        });
        Ok(event)
    }

    pub fn delete_event(&self, plate: &str, label: &str) -> Result<()> {
        let (plate, label) = (plate.trim(), label.trim());
        let existed = self.events.get(plate, label)?.is_some();
        self.events.delete(plate, label)?;
        if existed {
            self.notifier.publish(Change::EventDeleted {
                vehicle: plate.to_string(),
                label: label.to_string(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Routes
    // ========================================================================

    /// The nearest route that still addresses stored data
    pub fn resolve(&self, route: &Route) -> Result<Route> {
        let mut current = route.clone();
        loop {
            if self.route_exists(&current)? {
                if current != *route {
                    tracing::debug!(from = %route, to = %current, "Route redirected");
                }
                return Ok(current);
            }
            current = match current.parent() {
                Some(parent) => parent,
                None => return Ok(Route::Home),
            };
        }
    }

    fn route_exists(&self, route: &Route) -> Result<bool> {
        match route {
            Route::Home => Ok(true),
            Route::Vehicle { plate } => self.vehicles.exists(plate),
            Route::Event { plate, label } => Ok(self.vehicles.exists(plate)?
                && self.events.get(plate, label)?.is_some()),
        }
    }

    fn require_vehicle(&self, plate: &str) -> Result<()> {
        if self.vehicles.exists(plate)? {
            Ok(())
        } else {
            Err(NotFoundError::Vehicle(plate.to_string()).into())
        }
    }
}

fn event_not_found(plate: &str, label: &str) -> masinica_types::Error {
    NotFoundError::Event {
        vehicle: plate.to_string(),
        label: label.to_string(),
    }
    .into()
}
