// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
}

/// Coarse category of a failed selection or submission.
///
/// Used by the result panel to pick a title and by tests to assert on the
/// failure path without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFileType,
    NetworkFailure,
    ServerError,
    MalformedResponse,
}

/// Errors produced while acquiring a file or talking to the prediction endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The candidate's media type does not start with `image/`.
    InvalidFileType { media_type: String },

    /// The request could not be completed (connection refused, timeout, DNS...).
    NetworkFailure(String),

    /// The endpoint answered with a non-2xx status.
    ServerError { status: u16 },

    /// 2xx answer whose body is not `{ "digit": int, "confidence": number }`.
    MalformedResponse(String),
}

impl PredictionError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictionError::InvalidFileType { .. } => ErrorKind::InvalidFileType,
            PredictionError::NetworkFailure(_) => ErrorKind::NetworkFailure,
            PredictionError::ServerError { .. } => ErrorKind::ServerError,
            PredictionError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PredictionError::InvalidFileType { .. } => "error-invalid-file-type",
            PredictionError::NetworkFailure(_) => "error-network-failure",
            PredictionError::ServerError { .. } => "error-server",
            PredictionError::MalformedResponse(_) => "error-malformed-response",
        }
    }

    /// Interpolation arguments expected by the message behind [`Self::i18n_key`].
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            PredictionError::InvalidFileType { media_type } => {
                vec![("media_type", media_type.clone())]
            }
            PredictionError::NetworkFailure(detail) | PredictionError::MalformedResponse(detail) => {
                vec![("detail", detail.clone())]
            }
            PredictionError::ServerError { status } => vec![("status", status.to_string())],
        }
    }
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionError::InvalidFileType { .. } => write!(f, "Please upload an image file"),
            PredictionError::NetworkFailure(msg) => write!(
                f,
                "Could not reach the prediction service ({msg}). Please try again."
            ),
            PredictionError::ServerError { status } => {
                write!(f, "Server error occurred (HTTP {status})")
            }
            PredictionError::MalformedResponse(_) => {
                write!(f, "Error processing the prediction response")
            }
        }
    }
}

impl std::error::Error for PredictionError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
