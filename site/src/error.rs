//! Error types for the catalog rendering pipeline.
//!
//! - [`FileReadError`] - Spreadsheet could not be opened or read
//! - [`SchemaError`] - A row does not carry its category
//! - [`TemplateError`] - Template missing, malformed, or failing to render
//! - [`ServerError`] - Static server could not bind or stopped
//! - [`PipelineError`] - Top-level startup errors
//!
//! Every one of them is fatal at startup. Conversion into [`PipelineError`]
//! is automatic via `From`, so `?` works across the pipeline stages.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Spreadsheet Errors
// =============================================================================

/// Errors while loading the catalog workbook.
#[derive(Debug, Error)]
pub enum FileReadError {
    /// Workbook missing, unreadable, or of an unknown format.
    #[error("Cannot open catalog '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Requested sheet is not in the workbook.
    #[error("Sheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },

    /// Sheet exists but its cells could not be decoded.
    #[error("Cannot read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// Sheet has no header row.
    #[error("Sheet '{0}' is empty")]
    EmptySheet(String),
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors while grouping rows by category.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The category column is absent from a row.
    #[error("Line {line}: missing category column '{column}'")]
    MissingCategory { line: usize, column: String },

    /// The category cell is blank.
    #[error("Line {line}: blank value in category column '{column}'")]
    BlankCategory { line: usize, column: String },
}

// =============================================================================
// Template Errors
// =============================================================================

/// Errors while loading or rendering the page template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file does not exist.
    #[error("Template not found: {0}")]
    NotFound(PathBuf),

    /// Template path has no file name component.
    #[error("Invalid template path: {0}")]
    InvalidPath(PathBuf),

    /// Syntax or render-time error reported by the engine.
    #[error("Template error: {0:#}")]
    Render(#[from] minijinja::Error),
}

// =============================================================================
// Server Errors
// =============================================================================

/// Static server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not bind the listening socket.
    #[error("Cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Serve loop terminated with an IO error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level startup errors.
///
/// This is the error type returned by [`crate::transform::pipeline::build_site`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Spreadsheet error.
    #[error("Catalog error: {0}")]
    FileRead(#[from] FileReadError),

    /// Grouping error.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Template error.
    #[error("{0}")]
    Template(#[from] TemplateError),

    /// Rendered page could not be written.
    #[error("Cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Static server error.
    #[error("{0}")]
    Server(#[from] ServerError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for spreadsheet loading.
pub type FileReadResult<T> = Result<T, FileReadError>;

/// Result type for grouping.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for rendering.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
