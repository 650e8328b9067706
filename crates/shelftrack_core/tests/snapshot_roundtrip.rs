use chrono::NaiveDate;
use shelftrack_core::db::{open_db, open_db_in_memory};
use shelftrack_core::{
    load_or_empty, AssetRow, Grid, ImageRef, SnapshotError, SnapshotRepository,
    SqliteSnapshotRepository,
};

fn sample_grid() -> Grid {
    let mut first = AssetRow::new();
    first.asset_tag = "A1".to_string();
    first.model = "Latitude 5400".to_string();
    first.manufacturer = "Dell Inc".to_string();
    first.category = "Laptop".to_string();
    first.quantity = "1".to_string();
    first.serial = "SN001".to_string();
    first.physical_location = "Rm 101".to_string();
    first.assigned_to = "IT".to_string();
    first.date_received = NaiveDate::from_ymd_opt(2024, 1, 1);
    first.date_recorded = NaiveDate::from_ymd_opt(2024, 1, 2);
    first.note = "note\nwith a second line".to_string();
    first.image = ImageRef::Path("/srv/photos/a1.png".to_string());

    // Second row keeps every optional thing unset.
    let second = AssetRow::new();

    let mut grid = Grid::new();
    grid.append(first);
    grid.append(second);
    grid
}

#[test]
fn save_then_load_round_trips_exactly() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let grid = sample_grid();
    repo.save_all(&grid).unwrap();

    let loaded = repo.load_all().unwrap();
    assert_eq!(loaded, grid);
}

#[test]
fn empty_grid_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    repo.save_all(&Grid::new()).unwrap();
    let loaded = repo.load_all().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn save_overwrites_the_previous_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    repo.save_all(&sample_grid()).unwrap();

    let mut replacement = Grid::new();
    let mut row = AssetRow::new();
    row.asset_tag = "B1".to_string();
    replacement.append(row);
    repo.save_all(&replacement).unwrap();

    let loaded = repo.load_all().unwrap();
    assert_eq!(loaded, replacement);
    assert_eq!(loaded.len(), 1);
}

#[test]
fn load_survives_a_fresh_database() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("inventory.db")).unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let loaded = repo.load_all().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn snapshot_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteSnapshotRepository::new(&conn);
        repo.save_all(&sample_grid()).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);
    assert_eq!(repo.load_all().unwrap(), sample_grid());
}

#[test]
fn garbage_snapshot_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.db");
    std::fs::write(&path, b"this is not a database").unwrap();

    assert!(open_db(&path).is_err());
}

#[test]
fn corrupt_stored_date_is_rejected_and_degrades_to_empty() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO assets (
            position, asset_tag, model, manufacturer, category, quantity,
            serial, physical_location, assigned_to, date_received,
            date_recorded, note, image
        ) VALUES (0, 'A1', '', '', '', '', '', '', '', 'garbage', NULL, '', 'No Image');",
        [],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::new(&conn);
    let err = repo.load_all().unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidData(_)));

    let grid = load_or_empty(&repo);
    assert!(grid.is_empty());
}
