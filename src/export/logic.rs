// src/export/logic.rs

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_cigars, load_tastings_by_status};
use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{CigarExport, TastingExport};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportRow, ExportTarget, ensure_writable, parse_range};
use crate::models::tasting::TastingStatus;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

type Bounds = Option<(NaiveDate, NaiveDate)>;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the stock or the completed history to `file`.
    ///
    /// - `file` must be absolute
    /// - `range`: `None`, `"all"`, or any expression accepted by `parse_range`.
    ///   Stock rows are matched on purchase date (rows without one are
    ///   skipped), tastings on the day they started.
    ///
    /// Returns the number of records written.
    pub fn export(
        pool: &mut DbPool,
        what: ExportTarget,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!("Output file path must be absolute: {file}")));
        }

        let bounds: Bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let count = match what {
            ExportTarget::Stock => {
                let rows: Vec<CigarExport> = load_cigars(&pool.conn)?
                    .iter()
                    .filter(|c| in_bounds(c.purchase_date, bounds))
                    .map(CigarExport::from)
                    .collect();
                write_records(&rows, "Stock", &format, path, force)?
            }
            ExportTarget::History => {
                let completed = load_tastings_by_status(&pool.conn, TastingStatus::Completed)?;
                let rows: Vec<TastingExport> = completed
                    .iter()
                    .filter(|t| in_bounds(Some(t.started_at.date_naive()), bounds))
                    .map(TastingExport::from)
                    .collect();
                write_records(&rows, "History", &format, path, force)?
            }
        };

        if count > 0 {
            ttlog(
                &pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("{count} {} record(s) as {}", what.as_str(), format.as_str()),
            )?;
        }

        Ok(count)
    }
}

fn in_bounds(date: Option<NaiveDate>, bounds: Bounds) -> bool {
    match (bounds, date) {
        (None, _) => true,
        (Some((from, to)), Some(d)) => d >= from && d <= to,
        (Some(_), None) => false,
    }
}

fn write_records<T: Serialize + ExportRow>(
    rows: &[T],
    sheet: &str,
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No records found for the selected range.");
        return Ok(0);
    }

    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
        ExportFormat::Xlsx => export_xlsx(rows, sheet, path)?,
    }

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undated_rows_only_pass_without_bounds() {
        let day = NaiveDate::from_ymd_opt(2025, 5, 1);
        let bounds = day.map(|d| (d, d));
        assert!(in_bounds(None, None));
        assert!(in_bounds(day, bounds));
        assert!(!in_bounds(None, bounds));
        assert!(!in_bounds(NaiveDate::from_ymd_opt(2025, 5, 2), bounds));
    }
}
