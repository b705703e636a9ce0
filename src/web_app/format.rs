// web_app/format.rs - Display formatting helpers

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Registration date as `YYYY.MM.DD` in the viewer's local time zone
pub fn format_reg_date(timestamp: &str) -> String {
    format_reg_date_in(timestamp, &Local)
}

/// Registration date as `YYYY.MM.DD`, seen from `tz`.
///
/// Zoned timestamps are converted into `tz`. Naive date-times are already
/// wall-clock time and keep their date. A bare date counts as UTC midnight.
/// Input that matches none of these is returned unchanged.
pub fn format_reg_date_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String {
    let timestamp = timestamp.trim();

    let date = DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(tz).date_naive())
        .ok()
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
                .map(|naive| naive.date())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok().map(|day| {
                Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
                    .with_timezone(tz)
                    .date_naive()
            })
        });

    match date {
        Some(date) => date.format("%Y.%m.%d").to_string(),
        None => timestamp.to_string(),
    }
}

/// Star rating as the backend sent it (`4`, `4.5`)
pub fn format_rate(rate: f64) -> String {
    rate.to_string()
}
