// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a `--range` expression into inclusive date bounds.
///
/// Accepted shapes:
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `start:end` with both sides in the same shape
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidDate(format!(
                    "{r}: start and end must have the same format"
                )));
            }
            let (from, _) = period_bounds(start)?;
            let (_, to) = period_bounds(end)?;
            if from > to {
                return Err(AppError::InvalidDate(format!("{r}: start is after end")));
            }
            Ok((from, to))
        }
        None => period_bounds(r),
    }
}

/// First and last day of a single year, month or day.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let next_month = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            };
            let last = next_month.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;
            Ok((first, last))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
        assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(parse_range("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
        assert_eq!(parse_range("2025-03-07").unwrap(), (d(2025, 3, 7), d(2025, 3, 7)));
    }

    #[test]
    fn intervals() {
        assert_eq!(parse_range("2024:2025").unwrap(), (d(2024, 1, 1), d(2025, 12, 31)));
        assert_eq!(parse_range("2025-01:2025-02").unwrap(), (d(2025, 1, 1), d(2025, 2, 28)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_range("2025-13").is_err());
        assert!(parse_range("2025:2025-01").is_err());
        assert!(parse_range("2026:2025").is_err());
        assert!(parse_range("last week").is_err());
    }
}
