use shelftrack_core::db::migrations::latest_version;
use shelftrack_core::db::{open_db, open_db_in_memory};

#[test]
fn fresh_database_reaches_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn migrated_schema_has_assets_table() {
    let conn = open_db_in_memory().unwrap();
    let count: u32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'assets';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn reopening_an_existing_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_than_supported_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    assert!(open_db(&path).is_err());
}
