//! Change notifications

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender};

/// One successful mutation of the stored data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    VehicleAdded { plate: String },
    VehicleRenamed { from: String, to: String },
    VehicleDeleted { plate: String },
    EventAdded { vehicle: String, label: String },
    EventUpdated { vehicle: String, label: String, expiration_date: NaiveDate },
    EventDeleted { vehicle: String, label: String },
}

impl Change {
    /// Plate of the vehicle whose screens need refreshing
    pub fn vehicle(&self) -> &str {
        match self {
            Change::VehicleAdded { plate } | Change::VehicleDeleted { plate } => plate,
            Change::VehicleRenamed { to, .. } => to,
            Change::EventAdded { vehicle, .. }
            | Change::EventUpdated { vehicle, .. }
            | Change::EventDeleted { vehicle, .. } => vehicle,
        }
    }
}

/// Fan-out of changes to every live subscriber
#[derive(Default)]
pub(crate) struct Notifier {
    subscribers: std::cell::RefCell<Vec<Sender<Change>>>,
}

impl Notifier {
    pub(crate) fn subscribe(&self) -> Receiver<Change> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.borrow_mut().push(tx);
        rx
    }

    pub(crate) fn publish(&self, change: Change) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|tx| tx.send(change.clone()).is_ok());
        tracing::debug!(?change, subscribers = subscribers.len(), "Change published");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_every_subscriber() {
        let notifier = Notifier::default();
        let first = notifier.subscribe();
        let second = notifier.subscribe();

        notifier.publish(Change::VehicleAdded { plate: "X".to_string() });

        assert_eq!(first.try_recv().unwrap().vehicle(), "X");
        assert_eq!(second.try_recv().unwrap().vehicle(), "X");
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let notifier = Notifier::default();
        let kept = notifier.subscribe();
        drop(notifier.subscribe());

        notifier.publish(Change::VehicleDeleted { plate: "X".to_string() });

        assert_eq!(notifier.subscribers.borrow().len(), 1);
        assert!(kept.try_recv().is_ok());
    }

    #[test]
    fn test_serialized_with_kind_tag() {
        let change = Change::VehicleRenamed {
            from: "A".to_string(),
            to: "B".to_string(),
        };
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["kind"], "vehicle_renamed");
        assert_eq!(change.vehicle(), "B");
    }
}
