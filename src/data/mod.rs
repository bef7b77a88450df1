pub mod loader;

use chrono::NaiveDate;
use thiserror::Error;

/// Textual date format used by the input data, e.g. "20-Jan-2019".
pub const DATE_FORMAT: &str = "%d-%b-%Y";

/// One parsed row of the input file. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub ticker: String,
    pub date: NaiveDate,
    pub price: f64,
}

/// All records of one ticker, sorted ascending by date (stable within ties).
#[derive(Debug, Clone)]
pub struct Series {
    pub ticker: String,
    pub records: Vec<PriceRecord>,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Blank value in required column `{column}`")]
    BlankField { column: String },
    #[error("Malformed date `{value}` in column `{column}`, expected e.g. 20-Jan-2019")]
    InvalidDate { column: String, value: String },
    #[error("Malformed price `{value}` in column `{column}`")]
    InvalidPrice { column: String, value: String },
    #[error("No price series for ticker `{0}`")]
    UnknownTicker(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
