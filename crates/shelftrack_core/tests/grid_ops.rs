use shelftrack_core::{AssetRow, Column, Grid, GridError};

fn tagged_row(tag: &str) -> AssetRow {
    let mut row = AssetRow::new();
    row.asset_tag = tag.to_string();
    row
}

#[test]
fn append_preserves_insertion_order() {
    let mut grid = Grid::new();
    grid.append(tagged_row("A1"));
    grid.append(tagged_row("A2"));
    grid.append(tagged_row("A3"));

    assert_eq!(grid.len(), 3);
    let tags: Vec<&str> = grid.rows().iter().map(|row| row.asset_tag.as_str()).collect();
    assert_eq!(tags, vec!["A1", "A2", "A3"]);
}

#[test]
fn remove_at_returns_the_removed_row() {
    let mut grid = Grid::new();
    grid.append(tagged_row("A1"));
    grid.append(tagged_row("A2"));

    let removed = grid.remove_at(0).unwrap();
    assert_eq!(removed.asset_tag, "A1");
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.get(0).unwrap().asset_tag, "A2");
}

#[test]
fn remove_at_out_of_range_is_an_error() {
    let mut grid = Grid::new();
    grid.append(tagged_row("A1"));

    let err = grid.remove_at(5).unwrap_err();
    assert_eq!(err, GridError::OutOfRange { index: 5, len: 1 });
    assert_eq!(grid.len(), 1);
}

#[test]
fn clear_empties_the_grid() {
    let mut grid = Grid::new();
    grid.append(tagged_row("A1"));
    grid.append(tagged_row("A2"));

    grid.clear();
    assert!(grid.is_empty());
    assert_eq!(grid.len(), 0);
}

#[test]
fn set_cell_targets_a_single_cell() {
    let mut grid = Grid::new();
    grid.append(tagged_row("A1"));
    grid.append(tagged_row("A2"));

    grid.set_cell(1, Column::Model, "Latitude 5400").unwrap();
    assert_eq!(grid.get(1).unwrap().model, "Latitude 5400");
    assert_eq!(grid.get(0).unwrap().model, "");
    assert_eq!(grid.get(1).unwrap().asset_tag, "A2");
}

#[test]
fn set_cell_out_of_range_is_an_error() {
    let mut grid = Grid::new();
    let err = grid.set_cell(0, Column::Note, "x").unwrap_err();
    assert_eq!(err, GridError::OutOfRange { index: 0, len: 0 });
}

#[test]
fn set_cell_propagates_field_errors() {
    let mut grid = Grid::new();
    grid.append(tagged_row("A1"));

    let err = grid.set_cell(0, Column::DateReceived, "soon").unwrap_err();
    assert!(matches!(err, GridError::Field(_)));
    assert_eq!(grid.get(0).unwrap().date_received, None);
}

#[test]
fn replace_all_swaps_the_whole_sequence() {
    let mut grid = Grid::new();
    grid.append(tagged_row("A1"));
    grid.append(tagged_row("A2"));

    grid.replace_all(vec![tagged_row("B1")]);
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.get(0).unwrap().asset_tag, "B1");
}
