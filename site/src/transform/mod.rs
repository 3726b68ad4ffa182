//! Transformation module.
//!
//! - Grouper: spreadsheet rows to the category catalog
//! - Pipeline: load, group, render and write the page

pub mod grouper;
pub mod pipeline;

pub use grouper::{group_by_category, group_by_category_column};
pub use pipeline::*;
