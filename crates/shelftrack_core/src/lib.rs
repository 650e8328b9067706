//! Core data-management logic for Shelftrack.
//! This crate is the single source of truth for grid, snapshot, spreadsheet
//! and filter behavior; shells stay thin.

pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod repo;
pub mod service;
pub mod spreadsheet;

pub use filter::{compute_visible, FilterError, FilterResult};
pub use logging::{default_log_level, init_logging};
pub use model::grid::{Grid, GridError};
pub use model::row::{
    AssetRow, Column, ImageRef, RowFieldError, COLUMN_COUNT, ISO_DATE_FORMAT, NO_IMAGE_SENTINEL,
};
pub use prefs::RememberedDirs;
pub use repo::snapshot_repo::{
    load_or_empty, SnapshotError, SnapshotRepository, SnapshotResult, SqliteSnapshotRepository,
    SNAPSHOT_FILE,
};
pub use service::inventory_service::{InventoryService, NewAsset, ServiceError, ServiceResult};
pub use spreadsheet::{
    export_grid, header_row, read_rows, SpreadsheetError, SpreadsheetResult, DEFAULT_EXPORT_FILE,
    SHEET_NAME,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
