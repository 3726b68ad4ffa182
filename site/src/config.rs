//! Application configuration.
//!
//! Centralized defaults for the catalog site. Every value the CLI exposes
//! can be overridden by a flag or the matching environment variable; the
//! constants below are the fallbacks.

/// Year the winery was founded.
///
/// The "years since founding" phrase on the page is computed from this.
pub const FOUNDATION_YEAR: i32 = 1920;

/// Default catalog workbook, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "wine_and_drinks_catalog.xlsx";

/// Default page template, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "template.html";

/// Sheet holding the catalog rows.
pub const DEFAULT_SHEET_NAME: &str = "Лист1";

/// Reserved column carrying the category of each row.
pub const CATEGORY_COLUMN: &str = "Категория";

/// Name of the rendered page written into the output directory.
pub const OUTPUT_FILE: &str = "index.html";

/// HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Bind address for the static server (all interfaces).
pub const BIND_ADDRESS: [u8; 4] = [0, 0, 0, 0];

// Environment variables consulted when a flag is not given.
pub const ENV_CATALOG_PATH: &str = "EXCEL_FILE_PATH";
pub const ENV_TEMPLATE_PATH: &str = "TEMPLATE_PATH";
pub const ENV_SHEET_NAME: &str = "CATALOG_SHEET";
pub const ENV_PORT: &str = "PORT";
