//! Workbook import.
//!
//! # Responsibility
//! - Read the first sheet of a workbook into a positional row sequence.
//! - Convert every cell to text, including numeric and datetime cells.
//!
//! # Invariants
//! - Row 0 is always treated as the header and skipped.
//! - Exactly 12 cells are read per data row; missing trailing cells become
//!   empty strings, extra cells are ignored.
//! - Any invalid date cell aborts the whole import; callers replace their
//!   grid only on success.

use super::{SpreadsheetError, SpreadsheetResult};
use crate::model::row::{AssetRow, COLUMN_COUNT, ISO_DATE_FORMAT};
use calamine::{open_workbook_auto, Data, Reader};
use log::{error, info};
use std::path::Path;
use std::time::Instant;

/// Reads the first sheet of the workbook at `path` into rows.
///
/// # Errors
/// - [`SpreadsheetError::Read`] when the workbook cannot be opened.
/// - [`SpreadsheetError::EmptyWorkbook`] when it has no sheets.
/// - [`SpreadsheetError::InvalidCell`] when a date column holds text that is
///   not an ISO date; the error names the offending sheet row.
pub fn read_rows(path: impl AsRef<Path>) -> SpreadsheetResult<Vec<AssetRow>> {
    let path = path.as_ref();
    let started_at = Instant::now();

    match read_rows_inner(path) {
        Ok(rows) => {
            info!(
                "event=spreadsheet_import module=spreadsheet status=ok rows={} path={} duration_ms={}",
                rows.len(),
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(rows)
        }
        Err(err) => {
            error!(
                "event=spreadsheet_import module=spreadsheet status=error path={} duration_ms={} error={err}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn read_rows_inner(path: &Path) -> SpreadsheetResult<Vec<AssetRow>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SpreadsheetError::EmptyWorkbook)??;

    let mut rows = Vec::new();
    for (row_index, cells) in range.rows().enumerate() {
        if row_index == 0 {
            continue;
        }
        let texts: Vec<String> = (0..COLUMN_COUNT)
            .map(|col| cells.get(col).map(cell_to_text).unwrap_or_default())
            .collect();
        let row = AssetRow::from_cells(&texts)
            .map_err(|source| SpreadsheetError::InvalidCell {
                row: row_index,
                source,
            })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Display text of a workbook cell.
///
/// Excel datetimes collapse to their calendar date; time-of-day precision is
/// not preserved across the bridge.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|dt| dt.date().format(ISO_DATE_FORMAT).to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(text) => text.clone(),
        other => other.to_string(),
    }
}
