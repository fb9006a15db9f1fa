//! User-facing error taxonomy for the frontend. Every remote failure is
//! converted into one of these variants at the call site; nothing propagates
//! as a panic.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Client-side misconfiguration or invalid input caught before a request.
    Config(String),
    /// The server could not be reached at all.
    Network(String),
    /// The request was aborted by the client-side timeout.
    Timeout(String),
    /// The server answered with a non-success status.
    Http { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
    /// The request body could not be encoded.
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
