use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// `YYYY-MM-DD`, the only date format accepted on the command line.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Same as `parse_date` but `None` and `""` stay `None`.
pub fn parse_optional_date(s: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(v).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date("2025-03-01").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(matches!(parse_date("01/03/2025"), Err(AppError::InvalidDate(_))));
        assert_eq!(parse_optional_date(Some(" ")).unwrap(), None);
        assert_eq!(parse_optional_date(None).unwrap(), None);
    }
}
