use chrono::{DateTime, Duration, Utc};
use fleetmaster_types::{Maintenance, parse_timestamp};
use serde::{Deserialize, Serialize};

/// Lookahead window for the "due soon" bucket, in days. Fixed design
/// constant shared by every view and by the dashboard's due count.
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Urgency bucket derived from a due date and a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceUrgency {
    Overdue,
    DueSoon,
    Upcoming,
}

/// Temporal bucket for a trip relative to the reference calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripTiming {
    Today,
    Upcoming,
    Past,
}

/// Classify a maintenance due date against a reference instant.
///
/// `Overdue` when the due date strictly precedes `now`, `DueSoon` when it
/// falls inside the closed interval [`now`, `now` + 7 days], `Upcoming`
/// otherwise. An unparseable due date degrades to `Upcoming`.
///
/// Precondition: not meaningful for records already marked completed —
/// completion is a terminal state that supersedes any date-derived status.
/// Consumers working from a full record should call [`maintenance_urgency`],
/// which encodes that rule.
pub fn classify_maintenance(due_date: &str, now: DateTime<Utc>) -> MaintenanceUrgency {
    let Some(due) = parse_timestamp(due_date) else {
        return MaintenanceUrgency::Upcoming;
    };

    if due < now {
        MaintenanceUrgency::Overdue
    } else if due <= now + Duration::days(DUE_SOON_WINDOW_DAYS) {
        MaintenanceUrgency::DueSoon
    } else {
        MaintenanceUrgency::Upcoming
    }
}

/// Urgency of a maintenance record, honoring completed-precedence.
///
/// Returns `None` for completed records: they have no urgency and must not
/// be shown with (or counted toward) a date-derived badge.
pub fn maintenance_urgency(item: &Maintenance, now: DateTime<Utc>) -> Option<MaintenanceUrgency> {
    if item.is_completed() {
        return None;
    }
    Some(classify_maintenance(&item.due_date, now))
}

/// Classify a trip start date against the reference calendar day.
///
/// Both sides are normalized to their calendar date first; time-of-day never
/// affects the result. An unparseable start date degrades to `Past`.
pub fn classify_trip(start_date: &str, now: DateTime<Utc>) -> TripTiming {
    let Some(start) = parse_timestamp(start_date) else {
        return TripTiming::Past;
    };

    use std::cmp::Ordering;
    match start.date_naive().cmp(&now.date_naive()) {
        Ordering::Equal => TripTiming::Today,
        Ordering::Greater => TripTiming::Upcoming,
        Ordering::Less => TripTiming::Past,
    }
}
