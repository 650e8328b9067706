use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use shelftrack_core::{
    export_grid, header_row, read_rows, AssetRow, Grid, ImageRef, SpreadsheetError,
};

fn scenario_row() -> AssetRow {
    let cells: Vec<String> = [
        "A1",
        "Dell",
        "Dell Inc",
        "Laptop",
        "1",
        "SN001",
        "Rm 101",
        "IT",
        "2024-01-01",
        "2024-01-02",
        "note",
        "No Image",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    AssetRow::from_cells(&cells).unwrap()
}

#[test]
fn export_import_round_trips_the_grid() {
    let dir = tempfile::tempdir().unwrap();
    let mut grid = Grid::new();
    grid.append(scenario_row());

    let mut second = AssetRow::new();
    second.asset_tag = "A2".to_string();
    second.note = "spare".to_string();
    second.image = ImageRef::Path("/srv/photos/a2.png".to_string());
    grid.append(second);

    let written = export_grid(&grid, dir.path().join("inventory.xlsx")).unwrap();
    let imported = read_rows(&written).unwrap();
    assert_eq!(Grid::from_rows(imported), grid);
}

#[test]
fn empty_grid_exports_just_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let written = export_grid(&Grid::new(), dir.path().join("empty.xlsx")).unwrap();

    let imported = read_rows(&written).unwrap();
    assert!(imported.is_empty());
}

#[test]
fn exported_header_row_matches_column_names_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let mut grid = Grid::new();
    grid.append(scenario_row());
    let written = export_grid(&grid, dir.path().join("inventory.xlsx")).unwrap();

    let mut workbook = open_workbook_auto(&written).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Inventory".to_string()]);

    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    let header: Vec<String> = range
        .rows()
        .next()
        .unwrap()
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    assert_eq!(header, header_row());
}

#[test]
fn export_appends_missing_xlsx_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let written = export_grid(&Grid::new(), dir.path().join("inventory")).unwrap();
    assert_eq!(written.extension().unwrap(), "xlsx");
    assert!(written.exists());
}

#[test]
fn import_pads_missing_trailing_cells_with_empty_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.xlsx");

    // Hand-build a sheet whose data row stops after two cells.
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in header_row().into_iter().enumerate() {
        sheet.write_string(0, col as u16, name).unwrap();
    }
    sheet.write_string(1, 0, "A1").unwrap();
    sheet.write_string(1, 1, "Latitude").unwrap();
    workbook.save(&path).unwrap();

    let imported = read_rows(&path).unwrap();
    assert_eq!(imported.len(), 1);
    assert_eq!(imported[0].asset_tag, "A1");
    assert_eq!(imported[0].model, "Latitude");
    assert_eq!(imported[0].serial, "");
    assert_eq!(imported[0].image, ImageRef::None);
}

#[test]
fn import_converts_numeric_cells_to_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbers.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in header_row().into_iter().enumerate() {
        sheet.write_string(0, col as u16, name).unwrap();
    }
    sheet.write_string(1, 0, "A1").unwrap();
    sheet.write_number(1, 4, 3.0).unwrap();
    workbook.save(&path).unwrap();

    let imported = read_rows(&path).unwrap();
    assert_eq!(imported[0].quantity, "3");
}

#[test]
fn import_rejects_garbage_in_a_date_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_date.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in header_row().into_iter().enumerate() {
        sheet.write_string(0, col as u16, name).unwrap();
    }
    sheet.write_string(1, 0, "A1").unwrap();
    sheet.write_string(1, 8, "not a date").unwrap();
    workbook.save(&path).unwrap();

    let err = read_rows(&path).unwrap_err();
    assert!(matches!(err, SpreadsheetError::InvalidCell { row: 1, .. }));
}

#[test]
fn import_of_a_missing_file_is_a_read_error() {
    let err = read_rows("/nonexistent/inventory.xlsx").unwrap_err();
    assert!(matches!(err, SpreadsheetError::Read(_)));
}

#[test]
fn dates_survive_the_bridge_as_iso_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut grid = Grid::new();
    let mut row = AssetRow::new();
    row.date_received = NaiveDate::from_ymd_opt(2023, 12, 31);
    grid.append(row);

    let written = export_grid(&grid, dir.path().join("dates.xlsx")).unwrap();
    let imported = read_rows(&written).unwrap();
    assert_eq!(
        imported[0].date_received,
        NaiveDate::from_ymd_opt(2023, 12, 31)
    );
    assert_eq!(imported[0].date_recorded, None);
}
