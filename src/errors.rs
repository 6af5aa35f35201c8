/*!
 * Error types for the youtube-to-xml application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised when a raw transcript fails its structural checks.
///
/// These are only produced by the validator; segmentation and document
/// building never raise them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    /// The input has no non-whitespace content
    #[error("Cannot parse an empty transcript")]
    EmptyInput,

    /// The input does not have the expected shape
    #[error("Invalid transcript format: {0}")]
    InvalidFormat(String),

    /// No line of the input is a timestamp
    #[error("Transcript must contain at least one timestamp")]
    MissingTimestamp,
}

/// Errors that can occur while serializing the XML document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The XML writer rejected an event
    #[error("Failed to write XML: {0}")]
    Write(String),

    /// The serialized buffer was not valid UTF-8
    #[error("Generated XML is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur while reading downloaded subtitle data
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The json3 or info JSON could not be decoded
    #[error("Failed to parse subtitle JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The subtitle track had no usable caption text
    #[error("No transcript lines found in subtitle data")]
    NoTranscriptLines,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from transcript validation
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Error from XML generation
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from subtitle parsing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

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
