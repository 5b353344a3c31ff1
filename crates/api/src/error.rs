// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use space_revenue_domain::DomainError;

/// Failures while retrieving the raw dataset text.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The HTTP request failed or returned a non-success status.
    #[error("HTTP request for dataset failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The dataset file could not be read.
    #[error("Failed to read dataset file '{path}': {source}")]
    Io {
        /// The path that was read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Any other source-specific failure.
    #[error("Dataset source failed: {0}")]
    Other(String),
}

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// `Clone` so that one cached dataset failure can be handed to every caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The dataset could not be retrieved.
    DatasetUnavailable {
        /// A description of the retrieval failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DatasetUnavailable { message } => {
                write!(f, "Dataset unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DatasetError> for ApiError {
    fn from(err: DatasetError) -> Self {
        Self::DatasetUnavailable {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidMonth(month) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid month: {month}. Must be between 1 and 12"),
        },
        DomainError::DateOutOfRange { year, month } => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Date out of range: month {month} of year {year}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}
