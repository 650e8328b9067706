//! Excel workbook bridge.
//!
//! # Responsibility
//! - Export the grid to a single-sheet `.xlsx` workbook.
//! - Import a workbook's first sheet back into a row sequence.
//!
//! # Invariants
//! - Sheet name and header row are fixed; row 0 is always the 12 column
//!   names in display order.
//! - Every cell crosses the bridge as text.
//! - A failed import or export leaves the grid untouched.

use crate::model::row::{Column, RowFieldError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod export;
pub mod import;

pub use export::export_grid;
pub use import::read_rows;

/// Name of the one sheet written and the sheet exports are read from.
pub const SHEET_NAME: &str = "Inventory";

/// Default workbook file name offered by shells.
pub const DEFAULT_EXPORT_FILE: &str = "Inventory.xlsx";

pub(crate) const XLSX_SUFFIX: &str = "xlsx";

pub type SpreadsheetResult<T> = Result<T, SpreadsheetError>;

/// Spreadsheet bridge error.
#[derive(Debug)]
pub enum SpreadsheetError {
    /// Workbook writing failed (I/O or encoding).
    Write(rust_xlsxwriter::XlsxError),
    /// Workbook reading failed (missing file, malformed package).
    Read(calamine::Error),
    /// The workbook has no sheets to import from.
    EmptyWorkbook,
    /// A data cell could not be converted to a row field.
    InvalidCell { row: usize, source: RowFieldError },
}

impl Display for SpreadsheetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write(err) => write!(f, "workbook write failed: {err}"),
            Self::Read(err) => write!(f, "workbook read failed: {err}"),
            Self::EmptyWorkbook => write!(f, "workbook contains no sheets"),
            Self::InvalidCell { row, source } => {
                // Rows are reported 1-based the way a spreadsheet shows them.
                write!(f, "sheet row {}: {source}", row + 1)
            }
        }
    }
}

impl Error for SpreadsheetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Write(err) => Some(err),
            Self::Read(err) => Some(err),
            Self::EmptyWorkbook => None,
            Self::InvalidCell { source, .. } => Some(source),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for SpreadsheetError {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        Self::Write(value)
    }
}

impl From<calamine::Error> for SpreadsheetError {
    fn from(value: calamine::Error) -> Self {
        Self::Read(value)
    }
}

/// Header texts in column order, as written to row 0.
pub fn header_row() -> Vec<&'static str> {
    Column::ALL.iter().map(|column| column.header()).collect()
}
