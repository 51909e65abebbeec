use chrono::{DateTime, Duration, Utc};
use fleetmaster_types::{
    DocId, Maintenance, MaintenanceStatus, Trip, TripPriority, TripStatus, Vehicle, VehicleStatus,
};

/// An active vehicle with sensible defaults; the label doubles as the id.
pub fn vehicle(label: &str) -> Vehicle {
    vehicle_with_status(label, VehicleStatus::Active)
}

pub fn vehicle_with_status(label: &str, status: VehicleStatus) -> Vehicle {
    Vehicle {
        id: DocId::new(format!("veh-{label}")),
        vehicle_id: label.to_string(),
        make: "Ford".to_string(),
        model: "Transit".to_string(),
        year: 2022,
        license_plate: format!("PL-{label}"),
        fuel_type: "diesel".to_string(),
        purchase_date: "2022-06-14".to_string(),
        current_mileage: 40_000,
        status,
        last_service_date: None,
    }
}

/// A scheduled maintenance task due at `now + offset_days` (date-only, like
/// the form writes it).
pub fn maintenance_due_on(label: &str, now: DateTime<Utc>, offset_days: i64) -> Maintenance {
    let due = (now + Duration::days(offset_days)).date_naive();
    Maintenance {
        id: DocId::new(format!("mnt-{label}-{offset_days}")),
        vehicle_ref: DocId::new(format!("veh-{label}")),
        vehicle_label: label.to_string(),
        maintenance_type: "oil-change".to_string(),
        due_date: due.format("%Y-%m-%d").to_string(),
        service_location: "Main depot".to_string(),
        status: MaintenanceStatus::Scheduled,
        notes: None,
        completed_date: None,
    }
}

/// A scheduled trip starting at `now + offset_days`.
pub fn trip_starting_on(name: &str, label: &str, now: DateTime<Utc>, offset_days: i64) -> Trip {
    let start = (now + Duration::days(offset_days)).date_naive();
    Trip {
        id: DocId::new(format!("trp-{name}")),
        vehicle_ref: DocId::new(format!("veh-{label}")),
        vehicle_label: label.to_string(),
        trip_name: name.to_string(),
        start_date: start.format("%Y-%m-%d").to_string(),
        start_time: "08:00".to_string(),
        end_date: start.format("%Y-%m-%d").to_string(),
        end_time: "17:00".to_string(),
        destination: "Pier 14".to_string(),
        priority: TripPriority::Normal,
        status: TripStatus::Scheduled,
        notes: None,
    }
}

/// A small fleet with one of everything the dashboard cares about.
pub struct DemoFleet {
    pub vehicles: Vec<Vehicle>,
    pub trips: Vec<Trip>,
    pub maintenance: Vec<Maintenance>,
}

/// Four vehicles (three active, one out of service), one running trip and
/// one scheduled, and three maintenance tasks landing in each urgency
/// bucket: yesterday, now + 3 days, now + 30 days.
pub fn demo_fleet(now: DateTime<Utc>) -> DemoFleet {
    let vehicles = vec![
        vehicle("A"),
        vehicle("B"),
        vehicle("C"),
        vehicle_with_status("D", VehicleStatus::OutOfService),
    ];

    let mut running = trip_starting_on("Harbor run", "A", now, 0);
    running.status = TripStatus::InProgress;
    let trips = vec![running, trip_starting_on("Depot transfer", "B", now, 2)];

    let maintenance = vec![
        maintenance_due_on("A", now, -1),
        maintenance_due_on("B", now, 3),
        maintenance_due_on("C", now, 30),
    ];

    DemoFleet {
        vehicles,
        trips,
        maintenance,
    }
}
