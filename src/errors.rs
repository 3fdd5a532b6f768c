/*!
 * Error types for the yawtai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with the completion provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while locating or reinserting the content region
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document has no matching content-region element
    #[error("No <{tag}> element found in the document")]
    RegionNotFound {
        /// Tag name of the content region
        tag: &'static str,
    },

    /// The replacement fragment does not parse back to the expected element
    #[error("Replacement fragment does not parse as a <{tag}> element")]
    InvalidReplacement {
        /// Tag name of the content region
        tag: &'static str,
    },
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Chunk size of zero is not a valid split
    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,

    /// The provider response carried no completion choices
    #[error("Completion response contained no choices")]
    EmptyResponse,

    /// A dispatched chunk never produced a result
    #[error("Chunk {index} completed without a result")]
    MissingChunk {
        /// Zero-based index of the chunk
        index: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error with the user-supplied input source
    #[error("Input error: {0}")]
    Input(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from content-region extraction
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

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
