//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full grid on every save, in one transaction.
//! - Restore the grid in insertion order at startup.
//!
//! # Invariants
//! - `save_all` is a full overwrite: after it returns, the stored sequence
//!   equals the in-memory grid exactly.
//! - `load_all` returns rows ordered by stored position.
//! - Corrupt persisted values (bad date text) are reported, never guessed.

use crate::db::DbError;
use crate::model::grid::Grid;
use crate::model::row::{format_date, AssetRow, Column, ImageRef, RowFieldError, ISO_DATE_FORMAT};
use chrono::NaiveDate;
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// File name of the snapshot database inside the data directory.
pub const SNAPSHOT_FILE: &str = "inventory.db";

const ASSET_SELECT_SQL: &str = "SELECT
    asset_tag,
    model,
    manufacturer,
    category,
    quantity,
    serial,
    physical_location,
    assigned_to,
    date_received,
    date_recorded,
    note,
    image
FROM assets";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot persistence and decoding error.
#[derive(Debug)]
pub enum SnapshotError {
    Db(DbError),
    InvalidData(String),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted snapshot data: {message}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Snapshot contract used by the service layer.
pub trait SnapshotRepository {
    fn save_all(&self, grid: &Grid) -> SnapshotResult<()>;
    fn load_all(&self) -> SnapshotResult<Grid>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn save_all(&self, grid: &Grid) -> SnapshotResult<()> {
        let started_at = Instant::now();

        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM assets;", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO assets (
                    position,
                    asset_tag,
                    model,
                    manufacturer,
                    category,
                    quantity,
                    serial,
                    physical_location,
                    assigned_to,
                    date_received,
                    date_recorded,
                    note,
                    image
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
            )?;
            for (position, row) in grid.rows().iter().enumerate() {
                stmt.execute(params![
                    position as i64,
                    row.asset_tag.as_str(),
                    row.model.as_str(),
                    row.manufacturer.as_str(),
                    row.category.as_str(),
                    row.quantity.as_str(),
                    row.serial.as_str(),
                    row.physical_location.as_str(),
                    row.assigned_to.as_str(),
                    date_to_db(row.date_received),
                    date_to_db(row.date_recorded),
                    row.note.as_str(),
                    row.image.as_text(),
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "event=snapshot_save module=repo status=ok rows={} duration_ms={}",
            grid.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn load_all(&self) -> SnapshotResult<Grid> {
        let started_at = Instant::now();

        let mut stmt = self
            .conn
            .prepare(&format!("{ASSET_SELECT_SQL} ORDER BY position ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut loaded = Vec::new();
        while let Some(row) = rows.next()? {
            loaded.push(parse_asset_row(row)?);
        }

        info!(
            "event=snapshot_load module=repo status=ok rows={} duration_ms={}",
            loaded.len(),
            started_at.elapsed().as_millis()
        );
        Ok(Grid::from_rows(loaded))
    }
}

/// Loads the persisted grid, degrading to an empty grid on any failure.
///
/// The failure is logged, not surfaced: a missing or unreadable snapshot
/// means "no prior data" for the session.
pub fn load_or_empty<R: SnapshotRepository>(repo: &R) -> Grid {
    match repo.load_all() {
        Ok(grid) => grid,
        Err(err) => {
            error!("event=snapshot_load module=repo status=degraded error={err}");
            Grid::new()
        }
    }
}

fn date_to_db(date: Option<NaiveDate>) -> Option<String> {
    date.map(|date| format_date(Some(date)))
}

fn parse_asset_row(row: &Row<'_>) -> SnapshotResult<AssetRow> {
    let image: String = row.get(11)?;
    Ok(AssetRow {
        asset_tag: row.get(0)?,
        model: row.get(1)?,
        manufacturer: row.get(2)?,
        category: row.get(3)?,
        quantity: row.get(4)?,
        serial: row.get(5)?,
        physical_location: row.get(6)?,
        assigned_to: row.get(7)?,
        date_received: parse_db_date(row.get(8)?, Column::DateReceived)?,
        date_recorded: parse_db_date(row.get(9)?, Column::DateRecorded)?,
        note: row.get(10)?,
        image: ImageRef::parse(&image),
    })
}

fn parse_db_date(value: Option<String>, column: Column) -> SnapshotResult<Option<NaiveDate>> {
    let Some(text) = value else {
        return Ok(None);
    };
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(&text, ISO_DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            SnapshotError::InvalidData(RowFieldError::InvalidDate { column, text }.to_string())
        })
}
