//! High-level pipeline: spreadsheet in, `index.html` out.
//!
//! # Example
//!
//! ```rust,ignore
//! use winecellar::{build_site, SiteOptions};
//!
//! let report = build_site(&SiteOptions::default())?;
//! println!("{} categories written to {}", report.category_count, report.output_path.display());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::grouper::group_by_category;
use crate::age::AgePhrase;
use crate::config::{DEFAULT_CATALOG_PATH, DEFAULT_SHEET_NAME, DEFAULT_TEMPLATE_PATH, OUTPUT_FILE};
use crate::error::{PipelineError, PipelineResult};
use crate::logs::{
    log_error, log_info, log_info_indent, log_success, log_success_indent, log_warning,
};
use crate::parser::load_catalog;
use crate::render::Renderer;

/// Inputs of a site build.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Catalog workbook
    pub catalog_path: PathBuf,
    /// Sheet within the workbook
    pub sheet: String,
    /// Page template
    pub template_path: PathBuf,
    /// Directory receiving `index.html`
    pub output_dir: PathBuf,
    /// Fixed founding-age phrase; `None` uses today's date
    pub phrase: Option<AgePhrase>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            sheet: DEFAULT_SHEET_NAME.to_string(),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_dir: PathBuf::from("."),
            phrase: None,
        }
    }
}

/// Outcome of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub category_count: usize,
    pub row_count: usize,
    pub phrase: AgePhrase,
}

/// Load, group, render and write the catalog page.
///
/// The template is loaded first so a missing template fails before the
/// workbook is read. Nothing is written unless every step succeeds.
pub fn build_site(options: &SiteOptions) -> PipelineResult<BuildReport> {
    log_info(format!("📄 Template: {}", options.template_path.display()));
    let renderer = stage("Template loading", Renderer::from_path(&options.template_path))?;
    log_success(format!("Loaded template '{}'", renderer.name()));

    log_info(format!(
        "📖 Reading catalog: {} (sheet '{}')",
        options.catalog_path.display(),
        options.sheet
    ));
    let rows = stage("Catalog loading", load_catalog(&options.catalog_path, &options.sheet))?;
    log_success(format!("Read {} rows", rows.len()));

    let catalog = stage("Grouping", group_by_category(rows))?;
    if catalog.is_empty() {
        log_warning("Catalog has no rows; the page will list nothing");
    }
    log_success(format!("Grouped into {} categories", catalog.len()));
    for group in catalog.groups() {
        log_info_indent(format!("{}: {}", group.name, group.rows.len()), 1);
    }

    let phrase = options.phrase.unwrap_or_else(AgePhrase::current);
    log_info(format!("🎂 {} since founding", phrase));

    let html = stage("Rendering", renderer.render(&phrase, &catalog))?;
    let output_path = stage("Writing", write_page(&options.output_dir, &html))?;
    log_success(format!("💾 Page written to {}", output_path.display()));
    log_success_indent(format!("{} bytes", html.len()), 1);

    Ok(BuildReport {
        output_path,
        category_count: catalog.len(),
        row_count: catalog.row_count(),
        phrase,
    })
}

/// Log which step failed and lift its error into [`PipelineError`].
fn stage<T, E: Into<PipelineError>>(name: &str, result: Result<T, E>) -> PipelineResult<T> {
    result.map_err(|e| {
        log_error(format!("{} failed", name));
        e.into()
    })
}

/// Write `html` to [`OUTPUT_FILE`] inside `dir`.
pub fn write_page(dir: &Path, html: &str) -> PipelineResult<PathBuf> {
    let path = dir.join(OUTPUT_FILE);
    fs::write(&path, html).map_err(|source| PipelineError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
