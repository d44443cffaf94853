//! End-to-end tests for the garage service over an on-disk store

use chrono::{Duration, NaiveDate};
use masinica_app::{Config, Garage, Route};
use masinica_domain::{classify, Urgency};
use tempfile::tempdir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        data_dir: Some(dir.to_path_buf()),
        ..Config::default()
    }
}

#[test]
fn test_itp_urgency_follows_updates() {
    let dir = tempdir().unwrap();
    let garage = Garage::open(&config_in(dir.path())).unwrap();

    garage.add_vehicle("B01ABC").unwrap();
    let event = garage
        .add_event("B01ABC", "ITP", Some(today() + Duration::days(10)))
        .unwrap();

    let result = classify(event.expiration_date, today());
    assert_eq!(result.remaining_days, 10);
    assert_eq!(result.urgency, Urgency::Warning);

    garage
        .update_event("B01ABC", "ITP", today() + Duration::days(20))
        .unwrap();
    let status = garage.event_status("B01ABC", "ITP", today()).unwrap();
    assert_eq!(status.expiration.urgency, Urgency::Normal);
    assert_eq!(status.expiration.describe(), "20 days left.");
}

#[test]
fn test_adding_same_vehicle_twice_keeps_one() {
    let dir = tempdir().unwrap();
    let garage = Garage::open(&config_in(dir.path())).unwrap();

    garage.add_vehicle("X").unwrap();
    let err = garage.add_vehicle("X").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(garage.vehicles().unwrap(), vec!["X"]);
}

#[test]
fn test_data_persists_between_sessions() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    {
        let garage = Garage::open(&config).unwrap();
        garage.add_vehicle("B123ABC").unwrap();
        garage.add_vehicle("CJ45XYZ").unwrap();
        garage
            .add_event("CJ45XYZ", "RCA", Some(today() + Duration::days(2)))
            .unwrap();
        garage.rename_vehicle("CJ45XYZ", "CJ46XYZ").unwrap();
    }

    let garage = Garage::open(&config).unwrap();
    assert_eq!(garage.vehicles().unwrap(), vec!["B123ABC", "CJ46XYZ"]);
    let statuses = garage.event_statuses("CJ46XYZ", today()).unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].expiration.urgency, Urgency::Critical);

    let raw = std::fs::read_to_string(dir.path().join("storage.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["vehicles"], serde_json::json!(["B123ABC", "CJ46XYZ"]));
    assert_eq!(doc["events"][0]["vehicle"], "CJ46XYZ");
    assert_eq!(doc["events"][0]["expiration_date"], "2026-10-20");
}

#[test]
fn test_deleted_vehicle_routes_home() {
    let dir = tempdir().unwrap();
    let garage = Garage::open(&config_in(dir.path())).unwrap();
    garage.add_vehicle("X").unwrap();
    garage
        .add_event("X", "CASCO", Some(today() + Duration::days(100)))
        .unwrap();

    garage.delete_vehicle("X").unwrap();

    let route: Route = "/vehicle/X/CASCO".parse().unwrap();
    assert_eq!(garage.resolve(&route).unwrap(), Route::Home);
    assert!(garage.events("X").unwrap_err().is_not_found());
    assert!(garage.upcoming(today(), None).unwrap().is_empty());
}
