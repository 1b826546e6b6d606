//! Unified application error type.
//! Storage, workflows, CLI handlers and exporters all return AppError so the
//! binary has a single place where failures are printed.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid rating {0}: must be between 0 and 10")]
    InvalidRating(i64),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid repurchase answer '{0}': use yes, no or depends")]
    InvalidRepurchase(String),

    #[error("Invalid rating band '{0}': use all, 9-10, 7-8, 5-6, 3-4 or 1-2")]
    InvalidRatingBand(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidChoice { field: &'static str, value: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("'{0}' is out of stock")]
    OutOfStock(String),

    #[error("Tasting #{id} is {status}, expected {expected}")]
    InvalidStatus {
        id: i32,
        status: String,
        expected: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
