use serde::{Deserialize, Serialize};
use std::fmt;

use super::DocId;

/// A fleet vehicle record.
///
/// Serializes to the document-store shape: camelCase fields, `_id`,
/// kebab-case status strings. Date fields are kept as ISO strings the way
/// the forms write them; parsing happens at classification/sort time so a
/// malformed record stays loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id", default, skip_serializing_if = "DocId::is_empty")]
    pub id: DocId,
    /// Human-facing fleet label, e.g. "TRK-0042".
    pub vehicle_id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub license_plate: String,
    pub fuel_type: String,
    pub purchase_date: String,
    #[serde(default)]
    pub current_mileage: u32,
    pub status: VehicleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service_date: Option<String>,
}

impl Vehicle {
    /// Display value for the last service date; "N/A" when never serviced.
    pub fn last_service_display(&self) -> &str {
        self.last_service_date.as_deref().unwrap_or("N/A")
    }
}

/// Operational status of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    Active,
    InMaintenance,
    OutOfService,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::InMaintenance => "In Maintenance",
            VehicleStatus::OutOfService => "Out of Service",
        };
        f.write_str(label)
    }
}
