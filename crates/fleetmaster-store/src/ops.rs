//! Record-level workflow operations.
//!
//! Each operation is an independent, idempotent single-record upsert:
//! read one document, adjust it, `put` it back. Nothing here replaces
//! whole collections or touches more than one record, so there is no
//! cross-record transaction to get wrong.

use fleetmaster_types::{DocId, Maintenance, MaintenanceStatus, Trip, TripStatus, Vehicle};

use crate::{DocKind, Error, FleetDocument, FleetStore, Result};

fn fetch(store: &dyn FleetStore, id: &DocId) -> Result<FleetDocument> {
    store
        .get_by_id(id)?
        .ok_or_else(|| Error::NotFound(id.to_string()))
}

/// Mark a maintenance task completed as of `completed_date`.
///
/// Maintains the invariant that `completed_date` is set exactly when the
/// status is `Completed`. Calling it again for an already-completed task is
/// a no-op (the original completion date wins).
pub fn complete_maintenance(
    store: &dyn FleetStore,
    id: &DocId,
    completed_date: &str,
) -> Result<Maintenance> {
    let mut item = match fetch(store, id)? {
        FleetDocument::Maintenance(m) => m,
        doc => {
            return Err(Error::WrongKind {
                expected: DocKind::Maintenance,
                found: doc.kind(),
            });
        }
    };

    if item.is_completed() {
        return Ok(item);
    }

    item.status = MaintenanceStatus::Completed;
    item.completed_date = Some(completed_date.to_string());
    store.put(item.clone().into())?;
    Ok(item)
}

/// Move a trip to `next` status, enforcing the lifecycle table.
///
/// Re-applying the current status is a no-op; any move the table does not
/// allow is rejected with `InvalidTransition`.
pub fn update_trip_status(store: &dyn FleetStore, id: &DocId, next: TripStatus) -> Result<Trip> {
    let mut trip = match fetch(store, id)? {
        FleetDocument::Trip(t) => t,
        doc => {
            return Err(Error::WrongKind {
                expected: DocKind::Trip,
                found: doc.kind(),
            });
        }
    };

    if trip.status == next {
        return Ok(trip);
    }
    if !trip.status.can_transition(next) {
        return Err(Error::InvalidTransition {
            from: trip.status,
            to: next,
        });
    }

    trip.status = next;
    store.put(trip.clone().into())?;
    Ok(trip)
}

/// Record a completed service visit on a vehicle: bump the odometer
/// reading and stamp the last service date. Mileage never moves backwards.
pub fn record_service(
    store: &dyn FleetStore,
    id: &DocId,
    service_date: &str,
    mileage: u32,
) -> Result<Vehicle> {
    let mut vehicle = match fetch(store, id)? {
        FleetDocument::Vehicle(v) => v,
        doc => {
            return Err(Error::WrongKind {
                expected: DocKind::Vehicle,
                found: doc.kind(),
            });
        }
    };

    vehicle.last_service_date = Some(service_date.to_string());
    vehicle.current_mileage = vehicle.current_mileage.max(mileage);
    store.put(vehicle.clone().into())?;
    Ok(vehicle)
}
