use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use fleetmaster_store::{
    DocKind, Error, FleetDocument, FleetStore, MemoryStore, Subscriber, ops,
};
use fleetmaster_testing::{demo_fleet, maintenance_due_on, trip_starting_on, vehicle};
use fleetmaster_types::{DocId, MaintenanceStatus, TripStatus};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

fn seeded_store() -> MemoryStore {
    let fleet = demo_fleet(now());
    let docs = fleet
        .vehicles
        .into_iter()
        .map(FleetDocument::from)
        .chain(fleet.trips.into_iter().map(FleetDocument::from))
        .chain(fleet.maintenance.into_iter().map(FleetDocument::from));
    MemoryStore::with_documents(docs).unwrap()
}

struct Recorder {
    seen: Arc<Mutex<Vec<String>>>,
}

impl Subscriber for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn notify(&mut self, doc: &FleetDocument) {
        self.seen.lock().unwrap().push(doc.id().to_string());
    }
}

#[test]
fn get_all_filters_by_kind_in_insertion_order() {
    let store = seeded_store();

    let vehicles = store.get_all(DocKind::Vehicle).unwrap();
    assert_eq!(vehicles.len(), 4);
    assert_eq!(vehicles[0].id(), &DocId::from("veh-A"));

    let trips = store.get_all(DocKind::Trip).unwrap();
    assert_eq!(trips.len(), 2);

    let maintenance = store.get_all(DocKind::Maintenance).unwrap();
    assert_eq!(maintenance.len(), 3);
}

#[test]
fn put_mints_an_id_when_missing() {
    let store = MemoryStore::new();
    let mut v = vehicle("A");
    v.id = DocId::default();

    let id = store.put(v.into()).unwrap();
    assert!(!id.is_empty());

    let fetched = store.get_by_id(&id).unwrap().unwrap();
    assert_eq!(fetched.id(), &id);
}

#[test]
fn put_with_existing_id_replaces_in_place() {
    let store = seeded_store();
    let id = DocId::from("veh-A");

    let mut v = store.get_by_id(&id).unwrap().unwrap().into_vehicle().unwrap();
    v.current_mileage = 55_000;
    store.put(v.into()).unwrap();

    let vehicles = store.get_all(DocKind::Vehicle).unwrap();
    assert_eq!(vehicles.len(), 4, "replace must not duplicate");
    let updated = vehicles[0].clone().into_vehicle().unwrap();
    assert_eq!(updated.current_mileage, 55_000);
}

#[test]
fn get_by_id_absent_is_none() {
    let store = seeded_store();
    assert!(store.get_by_id(&DocId::from("veh-Z")).unwrap().is_none());
}

#[test]
fn get_by_id_rejects_unpersisted_ids() {
    let store = seeded_store();
    let err = store.get_by_id(&DocId::default()).unwrap_err();
    assert!(matches!(err, Error::MissingId));
}

#[test]
fn subscribers_see_only_their_kind() {
    let store = MemoryStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    store.subscribe(DocKind::Trip, Box::new(Recorder { seen: seen.clone() }));

    store.put(vehicle("A").into()).unwrap();
    store
        .put(trip_starting_on("Harbor run", "A", now(), 1).into())
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.as_slice(), ["trp-Harbor run"]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = MemoryStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sub = store.subscribe(DocKind::Vehicle, Box::new(Recorder { seen: seen.clone() }));

    store.put(vehicle("A").into()).unwrap();
    store.unsubscribe(sub);
    store.put(vehicle("B").into()).unwrap();

    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn complete_maintenance_sets_status_and_date_once() {
    let store = seeded_store();
    let id = DocId::from("mnt-A--1");

    let done = ops::complete_maintenance(&store, &id, "2025-03-10").unwrap();
    assert_eq!(done.status, MaintenanceStatus::Completed);
    assert_eq!(done.completed_date.as_deref(), Some("2025-03-10"));

    // Idempotent: the first completion date wins.
    let again = ops::complete_maintenance(&store, &id, "2025-03-12").unwrap();
    assert_eq!(again.completed_date.as_deref(), Some("2025-03-10"));
}

#[test]
fn trip_lifecycle_is_enforced() {
    let store = seeded_store();
    let id = DocId::from("trp-Depot transfer");

    let trip = ops::update_trip_status(&store, &id, TripStatus::InProgress).unwrap();
    assert_eq!(trip.status, TripStatus::InProgress);

    let trip = ops::update_trip_status(&store, &id, TripStatus::Completed).unwrap();
    assert_eq!(trip.status, TripStatus::Completed);

    // Terminal: no way back out of completed.
    let err = ops::update_trip_status(&store, &id, TripStatus::Scheduled).unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));
}

#[test]
fn skipping_the_lifecycle_is_rejected() {
    let store = seeded_store();
    let id = DocId::from("trp-Depot transfer");

    let err = ops::update_trip_status(&store, &id, TripStatus::Completed).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidTransition {
            from: TripStatus::Scheduled,
            to: TripStatus::Completed,
        }
    ));
}

#[test]
fn record_service_updates_vehicle_and_never_rolls_back_mileage() {
    let store = seeded_store();
    let id = DocId::from("veh-B");

    let v = ops::record_service(&store, &id, "2025-03-10", 41_000).unwrap();
    assert_eq!(v.last_service_date.as_deref(), Some("2025-03-10"));
    assert_eq!(v.current_mileage, 41_000);

    // A lower odometer reading keeps the higher stored value.
    let v = ops::record_service(&store, &id, "2025-03-11", 39_000).unwrap();
    assert_eq!(v.current_mileage, 41_000);
    assert_eq!(v.last_service_date.as_deref(), Some("2025-03-11"));
}

#[test]
fn workflow_ops_reject_wrong_kind() {
    let store = seeded_store();
    let vehicle_id = DocId::from("veh-A");

    let err = ops::complete_maintenance(&store, &vehicle_id, "2025-03-10").unwrap_err();
    assert!(matches!(
        err,
        Error::WrongKind {
            expected: DocKind::Maintenance,
            found: DocKind::Vehicle,
        }
    ));

    let err = ops::update_trip_status(&store, &vehicle_id, TripStatus::Cancelled).unwrap_err();
    assert!(matches!(err, Error::WrongKind { .. }));
}

#[test]
fn missing_record_is_not_found() {
    let store = MemoryStore::new();
    let err = ops::complete_maintenance(&store, &DocId::from("mnt-missing"), "2025-03-10")
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn documents_serialize_with_type_tag() {
    let doc = FleetDocument::from(maintenance_due_on("A", now(), 3));
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["type"], "maintenance");
    assert_eq!(json["vehicleId"], "A");

    let back: FleetDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back.kind(), DocKind::Maintenance);
    assert_eq!(back, doc);
}
