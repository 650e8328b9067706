//! In-memory grid store.
//!
//! # Responsibility
//! - Hold the ordered row sequence the whole application works on.
//! - Provide index-addressed CRUD with semantic out-of-range errors.
//!
//! # Invariants
//! - Insertion order is preserved; filtering and display sorting never
//!   reorder the underlying rows.
//! - The grid itself never touches persistence; the service layer snapshots
//!   after every successful mutation.

use crate::model::row::{AssetRow, Column, RowFieldError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Grid mutation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Index-addressed operation outside the current row range.
    OutOfRange { index: usize, len: usize },
    /// Cell text rejected by the row model (bad date, for example).
    Field(RowFieldError),
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "row index {index} out of range (grid has {len} rows)")
            }
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::Field(err) => Some(err),
        }
    }
}

impl From<RowFieldError> for GridError {
    fn from(value: RowFieldError) -> Self {
        Self::Field(value)
    }
}

/// Ordered sequence of asset rows, entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<AssetRow>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from an existing row sequence, preserving order.
    pub fn from_rows(rows: Vec<AssetRow>) -> Self {
        Self { rows }
    }

    /// Appends a row at the end.
    pub fn append(&mut self, row: AssetRow) {
        self.rows.push(row);
    }

    /// Removes and returns the row at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<AssetRow, GridError> {
        if index >= self.rows.len() {
            return Err(GridError::OutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Row at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&AssetRow> {
        self.rows.get(index)
    }

    /// Sets a single cell from display text.
    pub fn set_cell(&mut self, index: usize, column: Column, value: &str) -> Result<(), GridError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(GridError::OutOfRange { index, len })?;
        row.set_cell(column, value)?;
        Ok(())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in insertion order.
    pub fn rows(&self) -> &[AssetRow] {
        &self.rows
    }

    /// Replaces the entire row sequence. Used by destructive import.
    pub fn replace_all(&mut self, rows: Vec<AssetRow>) {
        self.rows = rows;
    }
}
