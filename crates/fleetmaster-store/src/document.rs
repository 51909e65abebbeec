use serde::{Deserialize, Serialize};
use std::fmt;

use fleetmaster_types::{DocId, Maintenance, Trip, Vehicle};

/// Entity discriminator for store lookups and subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Vehicle,
    Maintenance,
    Trip,
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocKind::Vehicle => "vehicle",
            DocKind::Maintenance => "maintenance",
            DocKind::Trip => "trip",
        };
        f.write_str(name)
    }
}

/// One record in the store's single keyspace.
///
/// The document database keeps all three entities together and
/// discriminates them by a `type` field; the serde tag reproduces that
/// wire shape exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FleetDocument {
    Vehicle(Vehicle),
    Maintenance(Maintenance),
    Trip(Trip),
}

impl FleetDocument {
    pub fn kind(&self) -> DocKind {
        match self {
            FleetDocument::Vehicle(_) => DocKind::Vehicle,
            FleetDocument::Maintenance(_) => DocKind::Maintenance,
            FleetDocument::Trip(_) => DocKind::Trip,
        }
    }

    pub fn id(&self) -> &DocId {
        match self {
            FleetDocument::Vehicle(v) => &v.id,
            FleetDocument::Maintenance(m) => &m.id,
            FleetDocument::Trip(t) => &t.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: DocId) {
        match self {
            FleetDocument::Vehicle(v) => v.id = id,
            FleetDocument::Maintenance(m) => m.id = id,
            FleetDocument::Trip(t) => t.id = id,
        }
    }

    pub fn into_vehicle(self) -> Option<Vehicle> {
        match self {
            FleetDocument::Vehicle(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_maintenance(self) -> Option<Maintenance> {
        match self {
            FleetDocument::Maintenance(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_trip(self) -> Option<Trip> {
        match self {
            FleetDocument::Trip(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Vehicle> for FleetDocument {
    fn from(v: Vehicle) -> Self {
        FleetDocument::Vehicle(v)
    }
}

impl From<Maintenance> for FleetDocument {
    fn from(m: Maintenance) -> Self {
        FleetDocument::Maintenance(m)
    }
}

impl From<Trip> for FleetDocument {
    fn from(t: Trip) -> Self {
        FleetDocument::Trip(t)
    }
}
