// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod range;
mod xlsx;

pub(crate) use fs_utils::ensure_writable;
pub use logic::ExportLogic;
pub use model::{CigarExport, TastingExport};
pub(crate) use range::parse_range;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every exporter.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Which dataset to write out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Cigars in the inventory
    Stock,
    /// Completed tastings
    History,
}

impl ExportTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportTarget::Stock => "stock",
            ExportTarget::History => "history",
        }
    }
}

/// Column layout shared by the tabular exporters.
pub(crate) trait ExportRow {
    fn headers() -> &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}
