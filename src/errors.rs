/*!
 * Error types for the scriptmine application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing a movie script
#[derive(Error, Debug)]
pub enum ParseError {
    /// A required metadata field could not be located in the script header
    #[error("Missing metadata: no match for the {anchor} anchor")]
    MissingMetadata {
        /// Name of the metadata anchor that failed to match
        anchor: &'static str,
    },
}

impl ParseError {
    /// Missing title anchor.
    pub fn missing_title() -> Self {
        Self::MissingMetadata { anchor: "title" }
    }

    /// Missing writers anchor.
    pub fn missing_authors() -> Self {
        Self::MissingMetadata { anchor: "writers" }
    }

    /// Missing genres anchor.
    pub fn missing_genres() -> Self {
        Self::MissingMetadata { anchor: "genres" }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from script parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
