//! Error types for the ocean-notes application.
//!
//! This module defines custom error types that categorize failures occurring
//! in the persistence layer and during configuration resolution. Note-level
//! operations never produce errors: operating on a missing id is a no-op by
//! contract, and persistence failures are suppressed at the store boundary.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the ocean-notes application.
#[derive(Error, Debug)]
pub enum NotesError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}
