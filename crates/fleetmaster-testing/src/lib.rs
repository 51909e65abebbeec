//! Fixtures for fleet record sample data.
//!
//! Test-only constructors for vehicles, trips and maintenance tasks, plus a
//! small demo fleet with its dates positioned relative to a caller-supplied
//! reference instant so classifier behavior is deterministic.

pub mod fixtures;

pub use fixtures::{
    DemoFleet, demo_fleet, maintenance_due_on, trip_starting_on, vehicle, vehicle_with_status,
};
