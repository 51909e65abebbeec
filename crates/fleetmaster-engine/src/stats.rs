use chrono::{DateTime, Utc};
use fleetmaster_types::{Maintenance, Trip, TripStatus, Vehicle, VehicleStatus};
use serde::{Deserialize, Serialize};

use crate::classify::{MaintenanceUrgency, maintenance_urgency};

/// Dashboard summary numbers, recomputed from full snapshots on every call.
/// No cached or incremental state: the dataset is small and a fresh pass is
/// always consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total_vehicles: usize,
    /// Trips currently on the road (status in-progress).
    pub active_trips: usize,
    /// Open maintenance tasks that are overdue or due within the window.
    pub maintenance_due: usize,
    /// Percentage of vehicles in active status, rounded to the nearest
    /// integer. 0 for an empty fleet.
    pub fleet_utilization: u32,
}

/// Compute the dashboard stats for one point in time.
pub fn compute_fleet_stats(
    vehicles: &[Vehicle],
    trips: &[Trip],
    maintenance: &[Maintenance],
    now: DateTime<Utc>,
) -> FleetStats {
    let active_vehicles = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Active)
        .count();

    let active_trips = trips
        .iter()
        .filter(|t| t.status == TripStatus::InProgress)
        .count();

    let maintenance_due = maintenance
        .iter()
        .filter(|m| {
            matches!(
                maintenance_urgency(m, now),
                Some(MaintenanceUrgency::Overdue | MaintenanceUrgency::DueSoon)
            )
        })
        .count();

    let fleet_utilization = if vehicles.is_empty() {
        0
    } else {
        ((active_vehicles as f64 / vehicles.len() as f64) * 100.0).round() as u32
    };

    FleetStats {
        total_vehicles: vehicles.len(),
        active_trips,
        maintenance_due,
        fleet_utilization,
    }
}
