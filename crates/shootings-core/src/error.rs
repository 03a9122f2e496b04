//! Error types for shootings-core
//!
//! Report operations themselves never fail; errors come from parsing
//! caller input, loading style configuration, and exporting figures.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Attribute name that is not a categorical column
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Year interval with start after end
    #[error("Invalid year range: {start}-{end}")]
    InvalidYearRange { start: i32, end: i32 },

    /// Style configuration errors
    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    /// Export errors
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Errors related to plot style configuration
#[derive(Error, Debug)]
pub enum StyleError {
    /// Config file could not be read
    #[error("Failed to read style config {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Config file is not valid TOML for a style
    #[error("Failed to parse style config: {0}")]
    Parse(String),

    /// Values out of range
    #[error("Invalid style: {0}")]
    Invalid(String),
}

/// Errors related to export
#[derive(Error, Debug)]
pub enum ExportError {
    /// Invalid dimensions
    #[error("Invalid dimensions: {width}x{height} (must be positive and within limits)")]
    InvalidDimensions { width: u32, height: u32 },

    /// JSON encoding error
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type alias for style operations
pub type StyleResult<T> = Result<T, StyleError>;

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Validation utilities
pub mod validation {
    use super::*;

    /// Largest exportable width or height in pixels
    pub const MAX_DIMENSION: u32 = 16384;
    const MIN_DIMENSION: u32 = 1;

    /// Validate export dimensions
    pub fn validate_dimensions(width: u32, height: u32) -> ExportResult<()> {

        if width < MIN_DIMENSION
            || height < MIN_DIMENSION
            || width > MAX_DIMENSION
            || height > MAX_DIMENSION
        {
            return Err(ExportError::InvalidDimensions { width, height });
        }
        Ok(())
    }
}
