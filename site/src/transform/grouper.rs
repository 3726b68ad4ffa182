//! Group catalog rows by category.
//!
//! ```text
//! Spreadsheet rows                          Catalog
//! ┌──────────────────────────────────┐      ┌─────────────────────────────┐
//! │ Вино    │ ""    │ Мерло          │      │ Вино:                       │
//! │ Вино    │ Белое │ Шардоне        │  →   │   { Сорт: null,  Мерло }    │
//! │ Напитки │ ""    │ Чача           │      │   { Сорт: Белое, Шардоне }  │
//! └──────────────────────────────────┘      │ Напитки:                    │
//!                                           │   { Сорт: null,  Чача }     │
//!                                           └─────────────────────────────┘
//! ```
//!
//! The category column is removed from each record; blank cells become
//! explicit `null` so templates can test for them uniformly.

use crate::config::CATEGORY_COLUMN;
use crate::error::{SchemaError, SchemaResult};
use crate::models::{Catalog, Cell, RawRow, Row};

/// Group rows by the [`CATEGORY_COLUMN`] column.
pub fn group_by_category(rows: Vec<RawRow>) -> SchemaResult<Catalog> {
    group_by_category_column(rows, CATEGORY_COLUMN)
}

/// Group rows by an arbitrary category column.
///
/// Category order follows first appearance; row order within a category
/// follows input order. Fails on the first row lacking a category.
pub fn group_by_category_column(rows: Vec<RawRow>, column: &str) -> SchemaResult<Catalog> {
    let mut catalog = Catalog::new();

    for mut row in rows {
        let category = match row.take(column) {
            None => {
                return Err(SchemaError::MissingCategory {
                    line: row.line,
                    column: column.to_string(),
                })
            }
            Some(Cell::Missing) => {
                return Err(SchemaError::BlankCategory {
                    line: row.line,
                    column: column.to_string(),
                })
            }
            Some(cell) => cell.to_string(),
        };

        let record: Row = row
            .cells
            .into_iter()
            .map(|(field, value)| (field, value.to_json()))
            .collect();

        catalog.push(&category, record);
    }

    Ok(catalog)
}
