use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Error type covering the different failure cases that can occur while the
/// pipeline loads exports, writes the schema, or runs reports.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization of a report fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors raised while reading the tab-separated people export.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Any failure reported by the data store, including constraint violations.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Raised when the TOML configuration file cannot be parsed.
    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Raised when a sheet does not follow the expected conventions.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when an expected column is absent from a loaded table.
    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    /// Raised when a required text value is blank.
    #[error("missing value in column '{column}' at data row {row}")]
    MissingValue { column: String, row: usize },

    /// Raised when numeric parsing fails for a cell.
    #[error("invalid value '{value}' in column '{column}'")]
    InvalidValue { column: String, value: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when configuration values are inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl StatsError {
    /// Whether this error is a unique or primary-key conflict reported by the
    /// database.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StatsError::Database(sqlx::Error::Database(err)) => err.is_unique_violation(),
            _ => false,
        }
    }

    pub(crate) fn missing_column(column: &str) -> Self {
        StatsError::MissingColumn {
            column: column.to_string(),
        }
    }
}
