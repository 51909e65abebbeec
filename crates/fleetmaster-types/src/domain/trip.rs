use serde::{Deserialize, Serialize};
use std::fmt;

use super::DocId;

/// A planned or running trip for a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(rename = "_id", default, skip_serializing_if = "DocId::is_empty")]
    pub id: DocId,
    /// Store id of the assigned vehicle.
    #[serde(rename = "vehicle_id")]
    pub vehicle_ref: DocId,
    /// Denormalized human label of the assigned vehicle.
    #[serde(rename = "vehicleId")]
    pub vehicle_label: String,
    pub trip_name: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub destination: String,
    pub priority: TripPriority,
    pub status: TripStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trip {
    /// A trip still on the board: neither completed nor cancelled.
    pub fn is_open(&self) -> bool {
        !matches!(self.status, TripStatus::Completed | TripStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripPriority {
    Low,
    Normal,
    High,
    Urgent,
}

/// Lifecycle status of a trip.
///
/// Legal transitions: scheduled → in-progress → completed, and
/// scheduled/in-progress → cancelled. `Completed` and `Cancelled` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    /// Whether moving from `self` to `next` is a legal lifecycle step.
    /// Staying on the same status is not a transition; callers treat it as
    /// a no-op.
    pub fn can_transition(self, next: TripStatus) -> bool {
        use TripStatus::*;
        matches!(
            (self, next),
            (Scheduled, InProgress)
                | (InProgress, Completed)
                | (Scheduled, Cancelled)
                | (InProgress, Cancelled)
        )
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripStatus::Scheduled => "Scheduled",
            TripStatus::InProgress => "In Progress",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}
