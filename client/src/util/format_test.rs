use super::*;

#[test]
fn money_groups_thousands_and_pads_cents() {
    assert_eq!(money(0), "$0.00");
    assert_eq!(money(5), "$0.05");
    assert_eq!(money(123_456), "$1,234.56");
    assert_eq!(money(100_000_000), "$1,000,000.00");
}

#[test]
fn money_negative_values() {
    assert_eq!(money(-2_550), "-$25.50");
}

#[test]
fn decimal_is_plain() {
    assert_eq!(decimal(123_456), "1234.56");
    assert_eq!(decimal(7), "0.07");
}

#[test]
fn date_takes_calendar_part() {
    assert_eq!(date("2026-03-04T14:05:00Z"), "2026-03-04");
    assert_eq!(date("2026-03-04"), "2026-03-04");
}

#[test]
fn date_passes_through_garbage() {
    assert_eq!(date("yesterday"), "yesterday");
    assert_eq!(date("2026/03/04T00"), "2026/03/04T00");
}

#[test]
fn date_time_includes_minutes() {
    assert_eq!(date_time("2026-03-04T14:05:59+02:00"), "2026-03-04 14:05");
    assert_eq!(date_time("2026-03-04"), "2026-03-04");
}

#[test]
fn date_or_dash_handles_missing() {
    assert_eq!(date_or_dash(None), "—");
    assert_eq!(date_or_dash(Some("2026-01-02T00:00:00Z")), "2026-01-02");
}

#[test]
fn percent_bounds() {
    assert_eq!(percent(1, 0), 0);
    assert_eq!(percent(-1, 10), 0);
    assert_eq!(percent(1, 3), 33);
    assert_eq!(percent(20, 10), 100);
}
