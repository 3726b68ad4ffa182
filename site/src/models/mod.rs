//! Domain models for the catalog pipeline.
//!
//! - [`Cell`] - A single spreadsheet value, with [`Cell::Missing`] for blanks
//! - [`RawRow`] - One spreadsheet row as loaded, in column order
//! - [`Row`] - A cleaned row record (category removed, blanks as `null`)
//! - [`Catalog`] - Rows grouped by category, in first-occurrence order

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};
use std::fmt;

// =============================================================================
// Cells
// =============================================================================

/// A scalar read from a spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Not-available marker for blank cells.
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Convert to JSON, turning the not-available marker into `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Int(i) => Value::Number((*i).into()),
            Cell::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            Cell::Bool(b) => Value::Bool(*b),
            Cell::Missing => Value::Null,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Missing => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    /// Empty strings are blanks, as in the loader.
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Missing
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

// =============================================================================
// Rows
// =============================================================================

/// A spreadsheet row as loaded, before grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based spreadsheet line, for diagnostics.
    pub line: usize,
    /// `(column, value)` pairs in header order.
    pub cells: Vec<(String, Cell)>,
}

impl RawRow {
    pub fn new(line: usize) -> Self {
        Self { line, cells: Vec::new() }
    }

    /// Builder-style append.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Cell>) -> Self {
        self.cells.push((column.into(), value.into()));
        self
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    /// Remove a column and return its value.
    pub fn take(&mut self, column: &str) -> Option<Cell> {
        let idx = self.cells.iter().position(|(c, _)| c == column)?;
        Some(self.cells.remove(idx).1)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, v)| v.is_missing())
    }

    /// JSON object view, blanks as `null`.
    pub fn to_json(&self) -> Value {
        let obj: Map<String, Value> = self
            .cells
            .iter()
            .map(|(c, v)| (c.clone(), v.to_json()))
            .collect();
        Value::Object(obj)
    }
}

/// A cleaned row record, keys in column order.
pub type Row = Map<String, Value>;

// =============================================================================
// Catalog
// =============================================================================

/// Rows of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub name: String,
    pub rows: Vec<Row>,
}

/// Category → rows, in order of first appearance.
///
/// Serializes as a JSON object (templates iterate it with `.items()`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    groups: Vec<CategoryGroup>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to `category`, creating the group on first use.
    pub fn push(&mut self, category: &str, row: Row) {
        match self.groups.iter_mut().find(|g| g.name == category) {
            Some(group) => group.rows.push(row),
            None => self.groups.push(CategoryGroup {
                name: category.to_string(),
                rows: vec![row],
            }),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[Row]> {
        self.groups
            .iter()
            .find(|g| g.name == category)
            .map(|g| g.rows.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total rows across all categories.
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.name, &group.rows)?;
        }
        map.end()
    }
}
