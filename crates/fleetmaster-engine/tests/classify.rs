use chrono::{TimeZone, Utc};
use fleetmaster_engine::{
    MaintenanceUrgency, TripTiming, classify_maintenance, classify_trip, maintenance_urgency,
};
use fleetmaster_testing::maintenance_due_on;
use fleetmaster_types::MaintenanceStatus;

fn reference_noon() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

#[test]
fn due_date_strictly_before_now_is_overdue() {
    let now = reference_noon();
    assert_eq!(
        classify_maintenance("2025-03-09", now),
        MaintenanceUrgency::Overdue
    );
    // One second before the reference instant still counts.
    assert_eq!(
        classify_maintenance("2025-03-10T11:59:59Z", now),
        MaintenanceUrgency::Overdue
    );
}

#[test]
fn due_date_equal_to_now_is_due_soon() {
    let now = reference_noon();
    assert_eq!(
        classify_maintenance("2025-03-10T12:00:00Z", now),
        MaintenanceUrgency::DueSoon
    );
}

#[test]
fn window_boundary_is_inclusive() {
    let now = reference_noon();
    // Exactly now + 7 days.
    assert_eq!(
        classify_maintenance("2025-03-17T12:00:00Z", now),
        MaintenanceUrgency::DueSoon
    );
    // One second past the window.
    assert_eq!(
        classify_maintenance("2025-03-17T12:00:01Z", now),
        MaintenanceUrgency::Upcoming
    );
}

#[test]
fn far_future_is_upcoming() {
    let now = reference_noon();
    assert_eq!(
        classify_maintenance("2025-04-09", now),
        MaintenanceUrgency::Upcoming
    );
}

#[test]
fn unparseable_due_date_degrades_to_upcoming() {
    let now = reference_noon();
    assert_eq!(
        classify_maintenance("whenever", now),
        MaintenanceUrgency::Upcoming
    );
    assert_eq!(classify_maintenance("", now), MaintenanceUrgency::Upcoming);
}

#[test]
fn completed_records_have_no_urgency() {
    let now = reference_noon();
    let mut item = maintenance_due_on("A", now, -10);
    assert_eq!(
        maintenance_urgency(&item, now),
        Some(MaintenanceUrgency::Overdue)
    );

    item.status = MaintenanceStatus::Completed;
    item.completed_date = Some("2025-03-01".to_string());
    assert_eq!(maintenance_urgency(&item, now), None);
}

#[test]
fn trip_classification_ignores_time_of_day() {
    // Reference late in the evening; start early the same day.
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 23, 30, 0).unwrap();
    assert_eq!(classify_trip("2025-03-10", now), TripTiming::Today);
    assert_eq!(
        classify_trip("2025-03-10T01:00:00Z", now),
        TripTiming::Today
    );
}

#[test]
fn trip_before_and_after_today() {
    let now = reference_noon();
    assert_eq!(classify_trip("2025-03-11", now), TripTiming::Upcoming);
    assert_eq!(classify_trip("2025-03-09", now), TripTiming::Past);
}

#[test]
fn unparseable_start_date_degrades_to_past() {
    let now = reference_noon();
    assert_eq!(classify_trip("someday", now), TripTiming::Past);
}
