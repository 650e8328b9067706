//! Asset row domain model.
//!
//! # Responsibility
//! - Define the canonical 12-column record every layer agrees on.
//! - Convert cells to and from their display-string form.
//!
//! # Invariants
//! - Column order never changes; it is the wire order for snapshots and
//!   spreadsheets alike.
//! - Date columns hold calendar dates (ISO `%Y-%m-%d` as text); every other
//!   column is free-form text.
//! - The image cell round-trips the `No Image` sentinel exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of columns in every row.
pub const COLUMN_COUNT: usize = 12;

/// Display/storage format for the two date columns.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Marker text meaning the image cell is unset.
pub const NO_IMAGE_SENTINEL: &str = "No Image";

/// The fixed inventory columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    AssetTag,
    Model,
    Manufacturer,
    Category,
    Quantity,
    Serial,
    PhysicalLocation,
    /// Shown as "Where" in headers; `where` is reserved in too many places.
    AssignedTo,
    DateReceived,
    DateRecorded,
    Note,
    Image,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::AssetTag,
        Column::Model,
        Column::Manufacturer,
        Column::Category,
        Column::Quantity,
        Column::Serial,
        Column::PhysicalLocation,
        Column::AssignedTo,
        Column::DateReceived,
        Column::DateRecorded,
        Column::Note,
        Column::Image,
    ];

    /// Exact header text written to spreadsheets and shown by shells.
    pub fn header(self) -> &'static str {
        match self {
            Column::AssetTag => "Asset Tag",
            Column::Model => "Model",
            Column::Manufacturer => "Manufacturer",
            Column::Category => "Category",
            Column::Quantity => "Quantity",
            Column::Serial => "Serial",
            Column::PhysicalLocation => "Physical Location",
            Column::AssignedTo => "Where",
            Column::DateReceived => "Date Received",
            Column::DateRecorded => "Date Recorded",
            Column::Note => "Note",
            Column::Image => "Image",
        }
    }

    /// 0-based position of this column.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column at a 0-based position, if in range.
    pub fn from_index(index: usize) -> Option<Column> {
        Column::ALL.get(index).copied()
    }

    /// Resolves a column by its header text, case-insensitively.
    ///
    /// Used by shells to map user input ("where", "Asset Tag") to a column.
    pub fn from_name(name: &str) -> Option<Column> {
        let trimmed = name.trim();
        Column::ALL
            .into_iter()
            .find(|column| column.header().eq_ignore_ascii_case(trimmed))
    }

    /// Whether this column holds a calendar date.
    pub fn is_date(self) -> bool {
        matches!(self, Column::DateReceived | Column::DateRecorded)
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// Image cell content: unset sentinel or a filesystem path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageRef {
    #[default]
    None,
    Path(String),
}

impl ImageRef {
    /// Parses display text back into an image reference.
    ///
    /// Empty text and the sentinel both mean "no image".
    pub fn parse(text: &str) -> ImageRef {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == NO_IMAGE_SENTINEL {
            ImageRef::None
        } else {
            ImageRef::Path(trimmed.to_string())
        }
    }

    /// Display text: the full path, or the sentinel when unset.
    pub fn as_text(&self) -> &str {
        match self {
            ImageRef::None => NO_IMAGE_SENTINEL,
            ImageRef::Path(path) => path.as_str(),
        }
    }

    /// File name component for compact display, or the sentinel when unset.
    pub fn file_name(&self) -> &str {
        match self {
            ImageRef::None => NO_IMAGE_SENTINEL,
            ImageRef::Path(path) => std::path::Path::new(path)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(path.as_str()),
        }
    }

    /// Returns the path when an image is set.
    pub fn path(&self) -> Option<&str> {
        match self {
            ImageRef::None => None,
            ImageRef::Path(path) => Some(path.as_str()),
        }
    }
}

impl Serialize for ImageRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_text())
    }
}

impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(ImageRef::parse(&text))
    }
}

/// Field-level conversion error for row cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFieldError {
    /// Text in a date column that is not an ISO calendar date.
    InvalidDate { column: Column, text: String },
}

impl Display for RowFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { column, text } => write!(
                f,
                "column `{column}` expects an ISO date ({ISO_DATE_FORMAT}), got `{text}`"
            ),
        }
    }
}

impl Error for RowFieldError {}

/// One inventory record: 10 free-form text fields, 2 dates, 1 image cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRow {
    pub asset_tag: String,
    pub model: String,
    pub manufacturer: String,
    pub category: String,
    pub quantity: String,
    pub serial: String,
    pub physical_location: String,
    /// Serialized as `where` to match the external column name.
    #[serde(rename = "where")]
    pub assigned_to: String,
    pub date_received: Option<NaiveDate>,
    pub date_recorded: Option<NaiveDate>,
    pub note: String,
    pub image: ImageRef,
}

impl AssetRow {
    /// Creates an all-empty row with the image cell unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from positional display strings, one per column.
    ///
    /// Missing trailing cells are treated as empty. Extra cells are ignored.
    ///
    /// # Errors
    /// - [`RowFieldError::InvalidDate`] when a date column holds text that is
    ///   neither empty nor an ISO date. Import paths reject invalid values
    ///   instead of masking them.
    pub fn from_cells(cells: &[String]) -> Result<AssetRow, RowFieldError> {
        let mut row = AssetRow::new();
        for (index, column) in Column::ALL.into_iter().enumerate() {
            let text = cells.get(index).map(String::as_str).unwrap_or("");
            row.set_cell(column, text)?;
        }
        Ok(row)
    }

    /// Display string of one cell; empty string for unset dates.
    pub fn cell_text(&self, column: Column) -> String {
        match column {
            Column::AssetTag => self.asset_tag.clone(),
            Column::Model => self.model.clone(),
            Column::Manufacturer => self.manufacturer.clone(),
            Column::Category => self.category.clone(),
            Column::Quantity => self.quantity.clone(),
            Column::Serial => self.serial.clone(),
            Column::PhysicalLocation => self.physical_location.clone(),
            Column::AssignedTo => self.assigned_to.clone(),
            Column::DateReceived => format_date(self.date_received),
            Column::DateRecorded => format_date(self.date_recorded),
            Column::Note => self.note.clone(),
            Column::Image => self.image.as_text().to_string(),
        }
    }

    /// Sets one cell from display text.
    ///
    /// Text columns accept anything. Date columns accept empty (unset) or an
    /// ISO date. The image column parses the `No Image` sentinel.
    pub fn set_cell(&mut self, column: Column, value: &str) -> Result<(), RowFieldError> {
        match column {
            Column::AssetTag => self.asset_tag = value.to_string(),
            Column::Model => self.model = value.to_string(),
            Column::Manufacturer => self.manufacturer = value.to_string(),
            Column::Category => self.category = value.to_string(),
            Column::Quantity => self.quantity = value.to_string(),
            Column::Serial => self.serial = value.to_string(),
            Column::PhysicalLocation => self.physical_location = value.to_string(),
            Column::AssignedTo => self.assigned_to = value.to_string(),
            Column::DateReceived => self.date_received = parse_date(Column::DateReceived, value)?,
            Column::DateRecorded => self.date_recorded = parse_date(Column::DateRecorded, value)?,
            Column::Note => self.note = value.to_string(),
            Column::Image => self.image = ImageRef::parse(value),
        }
        Ok(())
    }
}

/// Formats an optional date as ISO text, empty when unset.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(ISO_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(column: Column, value: &str) -> Result<Option<NaiveDate>, RowFieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map(Some)
        .map_err(|_| RowFieldError::InvalidDate {
            column,
            text: trimmed.to_string(),
        })
}
