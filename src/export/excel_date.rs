// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Recognise the date shapes our exports emit and turn them into an
/// Excel serial plus the number format to display it with.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return excel_serial(&dt).map(|serial| ("yyyy-mm-dd hh:mm", serial));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return excel_serial(&d.and_time(chrono::NaiveTime::MIN)).map(|serial| ("yyyy-mm-dd", serial));
    }

    None
}

fn excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(chrono::NaiveTime::MIN);
    let duration = *dt - epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
