//! # Winecellar - catalog spreadsheet to web page
//!
//! Reads the wine and drinks catalog from a workbook, groups it by category,
//! renders it into an HTML template together with the "years since founding"
//! phrase, writes `index.html`, and serves the directory over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Workbook   │────▶│   Parser    │────▶│   Grouper   │────▶│  Renderer   │──▶ index.html ──▶ HTTP
//! │ (xlsx, ods) │     │ (blank→NA)  │     │ (NA→null)   │     │ (autoescape)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use winecellar::{build_site, SiteOptions};
//!
//! let report = build_site(&SiteOptions::default()).unwrap();
//! println!("{} rows in {} categories", report.row_count, report.category_count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Defaults and environment variable names
//! - [`logs`] - Pipeline logging
//! - [`models`] - Cells, rows and the category catalog
//! - [`parser`] - Workbook loading
//! - [`age`] - Founding-age phrase
//! - [`transform`] - Grouping and the build pipeline
//! - [`render`] - Template rendering
//! - [`server`] - Static file server

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Loading
pub mod parser;

// Transformation
pub mod age;
pub mod transform;

// Output
pub mod render;
pub mod server;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{FileReadError, PipelineError, SchemaError, ServerError, TemplateError};

pub use models::{Catalog, CategoryGroup, Cell, RawRow, Row};

pub use parser::{load_catalog, rows_from_range};

pub use age::{age_since, year_word, AgePhrase, YearWord};

pub use transform::{
    build_site, group_by_category, group_by_category_column, write_page, BuildReport,
    SiteOptions,
};

pub use render::Renderer;

pub use server::start_server;
