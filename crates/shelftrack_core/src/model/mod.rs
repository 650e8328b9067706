//! Domain model for the inventory grid.
//!
//! # Responsibility
//! - Define the canonical 12-column asset row and the grid it lives in.
//! - Keep column order and display names as the single source of truth for
//!   persistence, spreadsheet and shell layers.
//!
//! # Invariants
//! - Every row exposes exactly [`row::COLUMN_COUNT`] cells in fixed order.
//! - The image cell is either the `No Image` sentinel or a filesystem path.

pub mod grid;
pub mod row;
