//! Inventory use-case service.
//!
//! # Responsibility
//! - Provide the single mutation entry point over the in-memory grid.
//! - Snapshot after every successful mutation, before the next read.
//!
//! # Invariants
//! - All operations take `&mut self`: no persistence or spreadsheet
//!   operation can start while another is in flight.
//! - Snapshot write failures are logged by the repository and returned to
//!   the caller; the in-memory grid stays authoritative for the session.
//! - Import replaces the grid only after the whole workbook parsed cleanly.

use crate::filter::{compute_visible, FilterError};
use crate::model::grid::{Grid, GridError};
use crate::model::row::{AssetRow, Column, ImageRef};
use crate::prefs::RememberedDirs;
use crate::repo::snapshot_repo::{load_or_empty, SnapshotError, SnapshotRepository};
use crate::spreadsheet::{export_grid, read_rows, SpreadsheetError};
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error from any service operation, wrapping the failing layer.
#[derive(Debug)]
pub enum ServiceError {
    Grid(GridError),
    Snapshot(SnapshotError),
    Spreadsheet(SpreadsheetError),
    Filter(FilterError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "snapshot write failed: {err}"),
            Self::Spreadsheet(err) => write!(f, "{err}"),
            Self::Filter(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::Snapshot(err) => Some(err),
            Self::Spreadsheet(err) => Some(err),
            Self::Filter(err) => Some(err),
        }
    }
}

impl From<GridError> for ServiceError {
    fn from(value: GridError) -> Self {
        Self::Grid(value)
    }
}

impl From<SnapshotError> for ServiceError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<SpreadsheetError> for ServiceError {
    fn from(value: SpreadsheetError) -> Self {
        Self::Spreadsheet(value)
    }
}

impl From<FilterError> for ServiceError {
    fn from(value: FilterError) -> Self {
        Self::Filter(value)
    }
}

/// Request model for adding a populated asset row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAsset {
    pub asset_tag: String,
    pub model: String,
    pub manufacturer: String,
    pub category: String,
    pub quantity: String,
    pub serial: String,
    pub physical_location: String,
    pub assigned_to: String,
    pub date_received: Option<NaiveDate>,
    pub note: String,
    /// Stored as an absolute path; `None` keeps the sentinel.
    pub image: Option<PathBuf>,
}

/// Use-case facade over the grid, snapshot store and spreadsheet bridge.
pub struct InventoryService<R: SnapshotRepository> {
    repo: R,
    grid: Grid,
    prefs: RememberedDirs,
}

impl<R: SnapshotRepository> InventoryService<R> {
    /// Opens a session: restores the last snapshot, or starts empty when
    /// none is readable.
    pub fn open(repo: R, prefs: RememberedDirs) -> Self {
        let grid = load_or_empty(&repo);
        Self { repo, grid, prefs }
    }

    /// Read access to the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read access to the remembered chooser directories.
    pub fn prefs(&self) -> &RememberedDirs {
        &self.prefs
    }

    /// Appends an all-empty row (the "Add Row" action).
    pub fn add_blank_row(&mut self) -> ServiceResult<()> {
        self.grid.append(AssetRow::new());
        self.snapshot()
    }

    /// Appends a populated row; the record date is set to today.
    pub fn add_asset(&mut self, asset: NewAsset) -> ServiceResult<()> {
        let mut row = AssetRow::new();
        row.asset_tag = asset.asset_tag;
        row.model = asset.model;
        row.manufacturer = asset.manufacturer;
        row.category = asset.category;
        row.quantity = asset.quantity;
        row.serial = asset.serial;
        row.physical_location = asset.physical_location;
        row.assigned_to = asset.assigned_to;
        row.date_received = asset.date_received;
        row.date_recorded = Some(Local::now().date_naive());
        row.note = asset.note;
        row.image = match asset.image {
            Some(path) => ImageRef::Path(absolutize(&path).display().to_string()),
            None => ImageRef::None,
        };
        self.grid.append(row);
        self.snapshot()
    }

    /// Deletes the row at `index`, returning it.
    pub fn delete_row(&mut self, index: usize) -> ServiceResult<AssetRow> {
        let row = self.grid.remove_at(index)?;
        self.snapshot()?;
        Ok(row)
    }

    /// Deletes every row; the next snapshot persists an empty sequence.
    pub fn delete_all(&mut self) -> ServiceResult<()> {
        self.grid.clear();
        self.snapshot()
    }

    /// Sets one cell from display text.
    pub fn update_cell(&mut self, index: usize, column: Column, value: &str) -> ServiceResult<()> {
        self.grid.set_cell(index, column, value)?;
        self.snapshot()
    }

    /// Replaces the image cell of one row with an absolute path.
    pub fn set_image(&mut self, index: usize, path: &Path) -> ServiceResult<()> {
        let value = absolutize(path).display().to_string();
        self.grid.set_cell(index, Column::Image, &value)?;
        self.snapshot()
    }

    /// Exports the grid to `path`, remembering its directory on success.
    ///
    /// Returns the path actually written (after suffix normalization).
    pub fn export_to(&mut self, path: impl AsRef<Path>) -> ServiceResult<PathBuf> {
        let written = export_grid(&self.grid, path)?;
        if let Some(dir) = written.parent() {
            self.prefs.remember_export_dir(dir);
        }
        Ok(written)
    }

    /// Replaces the entire grid with the workbook's rows, then snapshots.
    ///
    /// This is destructive: every prior row is discarded. Shells must ask
    /// the user to confirm before calling. Returns the imported row count.
    pub fn import_from(&mut self, path: &Path) -> ServiceResult<usize> {
        let rows = read_rows(path)?;
        let count = rows.len();
        self.grid.replace_all(rows);
        self.snapshot()?;
        if let Some(dir) = path.parent() {
            self.prefs.remember_import_dir(dir);
        }
        Ok(count)
    }

    /// Row indices visible under a per-column filter pattern.
    pub fn visible_rows(&self, column: Column, pattern: &str) -> ServiceResult<BTreeSet<usize>> {
        Ok(compute_visible(&self.grid, column, pattern)?)
    }

    fn snapshot(&mut self) -> ServiceResult<()> {
        self.repo.save_all(&self.grid)?;
        Ok(())
    }
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
