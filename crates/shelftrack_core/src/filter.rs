//! Per-column row filtering.
//!
//! # Responsibility
//! - Compute which rows a shell should display for a search pattern.
//! - Keep result shaping deterministic and side-effect free.
//!
//! # Invariants
//! - Filtering never mutates the grid; it only selects indices.
//! - An empty pattern selects every row.
//! - A malformed pattern is a typed error; callers keep their previous
//!   visible set.

use crate::model::grid::Grid;
use crate::model::row::Column;
use log::warn;
use regex::RegexBuilder;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FilterResult<T> = Result<T, FilterError>;

/// Filter pattern error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// User-provided pattern is not a valid regular expression.
    InvalidPattern { pattern: String, message: String },
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid filter pattern `{pattern}`: {message}")
            }
        }
    }
}

impl Error for FilterError {}

/// Returns the set of row indices whose `column` cell matches `pattern`.
///
/// Matching is a case-insensitive regex search against the cell's display
/// string, so a plain word behaves as a substring match. An empty pattern
/// selects all rows.
///
/// # Errors
/// - [`FilterError::InvalidPattern`] when the pattern does not compile. The
///   previous visible set stays whatever the caller had; stale results are
///   the caller's explicit choice, not a silent one.
pub fn compute_visible(
    grid: &Grid,
    column: Column,
    pattern: &str,
) -> FilterResult<BTreeSet<usize>> {
    if pattern.is_empty() {
        return Ok((0..grid.len()).collect());
    }

    let matcher = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|err| {
            warn!(
                "event=filter_pattern module=filter status=rejected column={} error={err}",
                column.header()
            );
            FilterError::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            }
        })?;

    Ok(grid
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| matcher.is_match(&row.cell_text(column)))
        .map(|(index, _)| index)
        .collect())
}
