//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate grid, snapshot, spreadsheet and filter calls into the
//!   operations shells invoke.
//! - Keep shells decoupled from storage and workbook details.

pub mod inventory_service;
