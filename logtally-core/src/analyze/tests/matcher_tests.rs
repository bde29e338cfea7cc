use crate::analyze::{ParseError, parse_line};
use chrono::{Datelike, Timelike};

const SAMPLE: &str = r#"192.168.1.1 - - [18/Apr/2005:10:22:04 +0900] "GET / HTTP/1.1" 200 1024"#;

#[test]
fn extracts_host_and_timestamp() {
    let entry = parse_line(SAMPLE).unwrap();

    assert_eq!(entry.host, "192.168.1.1");
    assert_eq!(entry.timestamp.year(), 2005);
    assert_eq!(entry.timestamp.month(), 4);
    assert_eq!(entry.timestamp.day(), 18);
    assert_eq!(entry.timestamp.minute(), 22);
    assert_eq!(entry.timestamp.second(), 4);
}

#[test]
fn keeps_the_clock_hour_as_written() {
    // +0900: the hour in the log is what gets bucketed, not UTC.
    let entry = parse_line(SAMPLE).unwrap();

    assert_eq!(entry.timestamp.hour(), 10);
    assert_eq!(entry.timestamp.offset().local_minus_utc(), 9 * 3600);
}

#[test]
fn host_is_the_leading_field() {
    let entry = parse_line(
        r#"example.com - frank [10/Oct/2000:13:55:36 -0700] "GET /a.gif HTTP/1.0" 200 2326"#,
    )
    .unwrap();

    assert_eq!(entry.host, "example.com");
    assert_eq!(entry.timestamp.hour(), 13);
}

#[test]
fn rejects_line_without_bracketed_timestamp() {
    let err = parse_line("192.168.1.1 - - no brackets here").unwrap_err();
    assert!(matches!(err, ParseError::Pattern));
}

#[test]
fn rejects_empty_line() {
    assert!(matches!(parse_line("").unwrap_err(), ParseError::Pattern));
}

#[test]
fn rejects_unparseable_timestamp() {
    let err = parse_line(r#"host - - [not a timestamp] "GET / HTTP/1.1" 200 1"#).unwrap_err();
    assert!(matches!(err, ParseError::Timestamp { .. }));
}

#[test]
fn rejects_month_outside_the_fixed_table() {
    // French "Avr" is not in the invariant month table.
    let err =
        parse_line(r#"host - - [18/Avr/2005:10:22:04 +0900] "GET / HTTP/1.1" 200 1"#).unwrap_err();
    assert!(matches!(err, ParseError::Timestamp { .. }));
}
