use serde::{Deserialize, Serialize};
use std::fmt;

use super::DocId;

/// A maintenance task for a vehicle.
///
/// References its vehicle by store id (`vehicle_ref`) and carries the
/// denormalized fleet label (`vehicle_label`) for display and search.
/// The record is meaningless without its vehicle but does not own it;
/// deleting a vehicle is out of scope here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    #[serde(rename = "_id", default, skip_serializing_if = "DocId::is_empty")]
    pub id: DocId,
    /// Store id of the owning vehicle.
    #[serde(rename = "vehicle_id")]
    pub vehicle_ref: DocId,
    /// Denormalized human label of the owning vehicle.
    #[serde(rename = "vehicleId")]
    pub vehicle_label: String,
    /// Free-form task kind; the form offers "oil-change", "tire-rotation",
    /// "brake-inspection", "full-service" and "other" but any string is valid.
    pub maintenance_type: String,
    pub due_date: String,
    pub service_location: String,
    pub status: MaintenanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set if and only if `status` is `Completed`. Maintained by the store
    /// workflow, never written directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

impl Maintenance {
    pub fn is_completed(&self) -> bool {
        self.status == MaintenanceStatus::Completed
    }

    pub fn notes_display(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

/// Recorded status of a maintenance task.
///
/// Distinct from the date-derived urgency classification: `Overdue` here is
/// a stored value written by a user action, while urgency is recomputed from
/// `due_date` on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Scheduled,
    Completed,
    Overdue,
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaintenanceStatus::Scheduled => "Scheduled",
            MaintenanceStatus::Completed => "Completed",
            MaintenanceStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}
