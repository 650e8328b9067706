//! Workbook export.
//!
//! # Responsibility
//! - Write the grid as one "Inventory" sheet: header row plus one text row
//!   per grid row.
//! - Normalize the destination path to carry the `.xlsx` suffix.

use super::{SpreadsheetError, SpreadsheetResult, SHEET_NAME, XLSX_SUFFIX};
use crate::model::grid::Grid;
use crate::model::row::Column;
use log::{error, info};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Exports the grid to `path`, returning the path actually written.
///
/// A missing `.xlsx` suffix is appended. All cells are written as text;
/// unset dates become empty strings and an unset image cell is written as
/// the sentinel.
///
/// # Errors
/// - [`SpreadsheetError::Write`] on I/O or encoding failure; no partial file
///   semantics are promised, but the grid itself is never touched.
pub fn export_grid(grid: &Grid, path: impl AsRef<Path>) -> SpreadsheetResult<PathBuf> {
    let path = ensure_xlsx_suffix(path.as_ref());
    let started_at = Instant::now();

    match write_workbook(grid, &path) {
        Ok(()) => {
            info!(
                "event=spreadsheet_export module=spreadsheet status=ok rows={} path={} duration_ms={}",
                grid.len(),
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(path)
        }
        Err(err) => {
            error!(
                "event=spreadsheet_export module=spreadsheet status=error path={} duration_ms={} error={err}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn write_workbook(grid: &Grid, path: &Path) -> SpreadsheetResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, column) in Column::ALL.into_iter().enumerate() {
        sheet.write_string(0, col as u16, column.header())?;
    }

    for (row_index, row) in grid.rows().iter().enumerate() {
        for (col, column) in Column::ALL.into_iter().enumerate() {
            sheet.write_string(row_index as u32 + 1, col as u16, &row.cell_text(column))?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn ensure_xlsx_suffix(path: &Path) -> PathBuf {
    let has_suffix = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(XLSX_SUFFIX));
    if has_suffix {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".");
    raw.push(XLSX_SUFFIX);
    PathBuf::from(raw)
}
