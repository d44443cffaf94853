//! Compliance event record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A compliance obligation of one vehicle
///
/// `vehicle` refers to a plate by value. `(vehicle, label)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// License plate of the owning vehicle
    pub vehicle: String,
    /// Event type, e.g. "ITP"
    pub label: String,
    /// Last valid day of the obligation
    #[serde(with = "super::date::iso")]
    pub expiration_date: NaiveDate,
}

impl Event {
    pub fn new(vehicle: impl Into<String>, label: impl Into<String>, expiration_date: NaiveDate) -> Self {
        Self {
            vehicle: vehicle.into(),
            label: label.into(),
            expiration_date,
        }
    }

    /// True when this record is the event `label` of vehicle `plate`
    pub fn matches(&self, plate: &str, label: &str) -> bool {
        self.vehicle == plate && self.label == label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_layout() {
        let event = Event::new("B123ABC", "RCA", NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"vehicle": "B123ABC", "label": "RCA", "expiration_date": "2026-03-01"})
        );
    }

    #[test]
    fn test_reads_datetime_records() {
        let value = json!({
            "vehicle": "CJ45XYZ",
            "label": "ITP",
            "expiration_date": "2026-03-01T00:00:00"
        });
        let event: Event = serde_json::from_value(value).unwrap();
        assert_eq!(event.expiration_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_matches() {
        let event = Event::new("X", "ITP", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(event.matches("X", "ITP"));
        assert!(!event.matches("x", "ITP"));
        assert!(!event.matches("X", "RCA"));
    }
}
