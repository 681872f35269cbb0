// errors.rs
use std::fmt;

/// Errors raised while reading or writing the apartment CSV files
/// and the geocode cache database.
#[derive(Debug, PartialEq)]
pub enum DataError {
    Io(String),
    Csv(String),
    MissingColumn(String),
    Db(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(msg) => write!(f, "I/O error: {msg}"),
            DataError::Csv(msg) => write!(f, "CSV error: {msg}"),
            DataError::MissingColumn(name) => write!(f, "Missing required column '{name}'"),
            DataError::Db(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {}

/// Errors originating from either the server logic
/// (routing, form validation) or downstream layers (CSV store, export).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DataError(String),
    XlsxError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DataError(msg) => write!(f, "Data Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<DataError> for ServerError {
    fn from(err: DataError) -> Self {
        ServerError::DataError(err.to_string())
    }
}
