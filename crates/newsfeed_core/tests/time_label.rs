use chrono::{Duration, TimeZone, Utc};
use newsfeed_core::{format_published_at, parse_published_at, relative_time_label};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn labels_follow_hour_and_day_thresholds() {
    let now = now();
    assert_eq!(relative_time_label(now - Duration::minutes(30), now), "Just now");
    assert_eq!(relative_time_label(now - Duration::hours(5), now), "5h ago");
    assert_eq!(relative_time_label(now - Duration::days(3), now), "3d ago");
}

#[test]
fn labels_truncate_rather_than_round() {
    let now = now();
    assert_eq!(
        relative_time_label(now - Duration::minutes(59) - Duration::seconds(59), now),
        "Just now"
    );
    assert_eq!(
        relative_time_label(now - Duration::minutes(23 * 60 + 59), now),
        "23h ago"
    );
    assert_eq!(relative_time_label(now - Duration::hours(47), now), "1d ago");
}

#[test]
fn future_timestamps_are_just_now() {
    let now = now();
    assert_eq!(relative_time_label(now + Duration::hours(3), now), "Just now");
}

#[test]
fn parses_api_timestamp_shapes() {
    let expected = Utc.with_ymd_and_hms(2025, 6, 15, 7, 0, 0).unwrap();
    assert_eq!(parse_published_at("2025-06-15T07:00:00Z"), Some(expected));
    assert_eq!(parse_published_at("2025-06-15T09:00:00+02:00"), Some(expected));
    assert_eq!(parse_published_at("2025-06-15T07:00:00"), Some(expected));
    assert!(parse_published_at("2025-06-15T07:00:00.123456Z").is_some());
    assert_eq!(parse_published_at("yesterday"), None);
}

#[test]
fn unparseable_timestamp_is_shown_raw() {
    assert_eq!(format_published_at("not a date", now()), "not a date");
    assert_eq!(format_published_at("2025-06-15T07:00:00Z", now()), "5h ago");
}
