/*!
 * Error types for the mdlingo application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with provider APIs
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

/// Errors raised while reading, parsing or writing documentation content
#[derive(Error, Debug)]
pub enum ContentError {
    /// The content root directory does not exist. Fatal for a run.
    #[error("Content directory not found: {0}")]
    MissingContentRoot(PathBuf),

    /// A single file could not be read
    #[error("Failed to read {path}: {reason}")]
    FileRead { path: PathBuf, reason: String },

    /// A single file could not be written
    #[error("Failed to write {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// A frontmatter block was opened but never closed
    #[error("Unterminated frontmatter block")]
    FrontmatterParse,

    /// A frontmatter block the YAML parser rejects
    #[error("Frontmatter is not valid YAML: {0}")]
    InvalidYaml(String),

    /// The input is not a format the pipeline understands
    #[error("Unsupported input format: {0}")]
    UnsupportedInputFormat(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from content handling
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error in the configuration
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
