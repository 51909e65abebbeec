use std::cmp::Reverse;

use fleetmaster_types::{Maintenance, Trip, Vehicle, parse_timestamp};
use serde::{Deserialize, Serialize};

// The list views share one pipeline: free-text search, then status filter,
// then sort. Each step is independently callable and non-mutating; the two
// filters commute, the pipeline order is just the UI convention.

/// Keep records where any selected text field contains `query`,
/// case-insensitively. An empty query is the identity.
pub fn filter_by_search<T, F>(records: &[T], query: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<String>,
{
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            fields(record)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Keep records whose status is in `allowed`.
///
/// An empty `allowed` set means "no filter" and returns everything: an
/// unchecked filter menu shows the whole list, it does not blank it.
pub fn filter_by_status<T, S, F>(records: &[T], allowed: &[S], status_of: F) -> Vec<T>
where
    T: Clone,
    S: PartialEq,
    F: Fn(&T) -> S,
{
    if allowed.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| allowed.contains(&status_of(record)))
        .cloned()
        .collect()
}

/// Search fields for the vehicles view: label, make, model, plate.
pub fn vehicle_search_fields(vehicle: &Vehicle) -> Vec<String> {
    vec![
        vehicle.vehicle_id.clone(),
        vehicle.make.clone(),
        vehicle.model.clone(),
        vehicle.license_plate.clone(),
    ]
}

/// Search fields for the maintenance view: vehicle label, type, location.
pub fn maintenance_search_fields(item: &Maintenance) -> Vec<String> {
    vec![
        item.vehicle_label.clone(),
        item.maintenance_type.clone(),
        item.service_location.clone(),
    ]
}

/// Search fields for the trips view: name, vehicle label, destination.
pub fn trip_search_fields(trip: &Trip) -> Vec<String> {
    vec![
        trip.trip_name.clone(),
        trip.vehicle_label.clone(),
        trip.destination.clone(),
    ]
}

/// Sort order for the vehicles view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleSort {
    /// Most recent purchase first.
    #[default]
    Newest,
    /// Oldest purchase first.
    Oldest,
    MileageHigh,
    MileageLow,
}

/// Sort order for the trips view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripSort {
    /// Most recent start date first.
    #[default]
    Newest,
    /// Earliest start date first.
    Oldest,
    /// Case-insensitive by trip name.
    Alphabetical,
}

/// Sort order for the maintenance view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceSort {
    /// Earliest due date first.
    #[default]
    DueSoon,
    /// Latest due date first.
    DueLater,
    /// Case-insensitive by maintenance type.
    Alphabetical,
}

// All sorts go through sort_by_key, which is stable: records with equal
// keys keep their input order. Unparseable dates key as None and group at
// the small end of the Option ordering.

/// Return a sorted copy of the vehicle list.
pub fn sort_vehicles(records: &[Vehicle], order: VehicleSort) -> Vec<Vehicle> {
    let mut out = records.to_vec();
    match order {
        VehicleSort::Newest => out.sort_by_key(|v| Reverse(parse_timestamp(&v.purchase_date))),
        VehicleSort::Oldest => out.sort_by_key(|v| parse_timestamp(&v.purchase_date)),
        VehicleSort::MileageHigh => out.sort_by_key(|v| Reverse(v.current_mileage)),
        VehicleSort::MileageLow => out.sort_by_key(|v| v.current_mileage),
    }
    out
}

/// Return a sorted copy of the trip list.
pub fn sort_trips(records: &[Trip], order: TripSort) -> Vec<Trip> {
    let mut out = records.to_vec();
    match order {
        TripSort::Newest => out.sort_by_key(|t| Reverse(parse_timestamp(&t.start_date))),
        TripSort::Oldest => out.sort_by_key(|t| parse_timestamp(&t.start_date)),
        TripSort::Alphabetical => out.sort_by_key(|t| t.trip_name.to_lowercase()),
    }
    out
}

/// Return a sorted copy of the maintenance list.
pub fn sort_maintenance(records: &[Maintenance], order: MaintenanceSort) -> Vec<Maintenance> {
    let mut out = records.to_vec();
    match order {
        MaintenanceSort::DueSoon => out.sort_by_key(|m| parse_timestamp(&m.due_date)),
        MaintenanceSort::DueLater => out.sort_by_key(|m| Reverse(parse_timestamp(&m.due_date))),
        MaintenanceSort::Alphabetical => out.sort_by_key(|m| m.maintenance_type.to_lowercase()),
    }
    out
}
