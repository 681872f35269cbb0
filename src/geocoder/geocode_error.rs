use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeocodeError {
    Network(String),
    Http(u16, String),
    JsonParse(String),
    UnexpectedShape(String),
    Config(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Network(msg) => write!(f, "Network error: {msg}"),
            GeocodeError::Http(status, body) => write!(f, "Geocoder HTTP {status}: {body}"),
            GeocodeError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            GeocodeError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
            GeocodeError::Config(msg) => write!(f, "Geocoder config error: {msg}"),
        }
    }
}

impl Error for GeocodeError {}
