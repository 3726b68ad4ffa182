//! Spreadsheet loader.
//!
//! Reads one sheet of a workbook into [`RawRow`]s keyed by the header row.
//! Blank cells become [`Cell::Missing`]; every other value is carried as-is.
//! No catalog-specific logic here.

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FileReadError, FileReadResult};
use crate::models::{Cell, RawRow};

/// Load the rows of `sheet` from the workbook at `path`.
///
/// The format (xlsx, xlsm, xlsb, xls, ods) is detected from the extension.
///
/// # Example
/// ```ignore
/// let rows = load_catalog("wine_and_drinks_catalog.xlsx", "Лист1")?;
/// println!("{} rows", rows.len());
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P, sheet: &str) -> FileReadResult<Vec<RawRow>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|source| FileReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(FileReadError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| FileReadError::Sheet {
            sheet: sheet.to_string(),
            source,
        })?;

    rows_from_range(&range).ok_or_else(|| FileReadError::EmptySheet(sheet.to_string()))
}

/// Convert a sheet range into rows.
///
/// The first row is the header. Returns `None` when the range has no rows.
pub fn rows_from_range(range: &Range<Data>) -> Option<Vec<RawRow>> {
    let mut rows = range.rows();
    let headers = header_names(rows.next()?);

    // Line numbers are 1-based and account for leading rows outside the range.
    let first_line = range.start().map(|(r, _)| r as usize + 1).unwrap_or(1);

    let records = rows
        .enumerate()
        .map(|(idx, cells)| {
            let mut row = RawRow::new(first_line + idx + 1);
            for (col, header) in headers.iter().enumerate() {
                let value = cells.get(col).map(cell_value).unwrap_or(Cell::Missing);
                row.cells.push((header.clone(), value));
            }
            row
        })
        .filter(|row| !row.is_blank())
        .collect();

    Some(records)
}

/// Column names from the header row.
///
/// Blank headers become `Unnamed: N`; repeats get `.1`, `.2`, ... suffixes.
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = match cell_value(cell) {
                Cell::Missing => format!("Unnamed: {}", idx),
                value => value.to_string(),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

/// Map a raw cell to a [`Cell`].
fn cell_value(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::String(s) => Cell::from(s.as_str()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => float_cell(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(_) => match data.as_datetime() {
            Some(dt) => Cell::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => Cell::Missing,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from(s.as_str()),
    }
}

/// Whole floats (Excel stores every number as one) become integers.
fn float_cell(f: f64) -> Cell {
    if f.is_nan() {
        Cell::Missing
    } else if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Cell::Int(f as i64)
    } else {
        Cell::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(cells: &[&[Data]]) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), value.clone());
            }
        }
        range
    }

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    #[test]
    fn test_rows_keyed_by_header() {
        let range = sheet(&[
            &[s("Категория"), s("Название"), s("Цена")],
            &[s("Белые вина"), s("Шардоне"), Data::Float(2399.0)],
            &[s("Напитки"), s("Чача"), Data::Float(299.5)],
        ]);

        let rows = rows_from_range(&range).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].get("Название"), Some(&Cell::Text("Шардоне".into())));
        assert_eq!(rows[0].get("Цена"), Some(&Cell::Int(2399)));
        assert_eq!(rows[1].get("Цена"), Some(&Cell::Float(299.5)));

        let columns: Vec<&str> = rows[0].cells.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(columns, vec!["Категория", "Название", "Цена"]);
    }

    #[test]
    fn test_blank_cells_are_missing() {
        let range = sheet(&[
            &[s("Категория"), s("Сорт"), s("Акция")],
            &[s("Вино"), s(""), Data::Empty],
        ]);

        let rows = rows_from_range(&range).unwrap();
        assert_eq!(rows[0].get("Сорт"), Some(&Cell::Missing));
        assert_eq!(rows[0].get("Акция"), Some(&Cell::Missing));
    }

    #[test]
    fn test_na_text_preserved() {
        let range = sheet(&[&[s("Сорт")], &[s("NA")], &[s("N/A")]]);

        let rows = rows_from_range(&range).unwrap();
        assert_eq!(rows[0].get("Сорт"), Some(&Cell::Text("NA".into())));
        assert_eq!(rows[1].get("Сорт"), Some(&Cell::Text("N/A".into())));
    }

    #[test]
    fn test_error_cells_are_missing() {
        let range = sheet(&[
            &[s("Цена")],
            &[Data::Error(calamine::CellErrorType::NA)],
        ]);

        // A row whose only cell is an error is blank and dropped.
        assert!(rows_from_range(&range).unwrap().is_empty());
    }

    #[test]
    fn test_blank_rows_skipped() {
        let range = sheet(&[
            &[s("Категория"), s("Название")],
            &[s("Вино"), s("Мерло")],
            &[Data::Empty, Data::Empty],
            &[s("Вино"), s("Рислинг")],
        ]);

        let rows = rows_from_range(&range).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn test_unnamed_and_duplicate_headers() {
        let range = sheet(&[
            &[s("Название"), Data::Empty, s("Название")],
            &[s("a"), s("b"), s("c")],
        ]);

        let rows = rows_from_range(&range).unwrap();
        let columns: Vec<&str> = rows[0].cells.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(columns, vec!["Название", "Unnamed: 1", "Название.1"]);
    }

    #[test]
    fn test_header_only_sheet() {
        let range = sheet(&[&[s("Категория"), s("Название")]]);
        assert!(rows_from_range(&range).unwrap().is_empty());
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(rows_from_range(&range).is_none());
    }

    #[test]
    fn test_missing_file() {
        let result = load_catalog("definitely/not/here.xlsx", "Лист1");
        assert!(matches!(result, Err(FileReadError::Open { .. })));
    }

    #[test]
    fn test_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        std::fs::write(&path, "not a workbook").unwrap();

        let result = load_catalog(&path, "Лист1");
        assert!(matches!(result, Err(FileReadError::Open { .. })));
    }
}
