//! Data types shared between the grid and its header cells.
//!
//! - [`Column`]: read-only column descriptor
//! - [`SortColumn`]: one entry of the grid's ordered sort list
//! - [`CellPosition`]: a cell address used for selection requests

mod column;
mod sort;

pub use column::{Column, ColumnGroup, ColumnKey, ColumnWidth, DEFAULT_MIN_WIDTH};
pub use sort::{
    SortColumn, SortDirection, SortLookup, SortStatus, find_sort_column, next_sort_columns,
};

/// Address of a grid cell, as passed to selection requests.
///
/// For header cells `row_idx` is the 1-based header row number; the grid
/// maps it onto its own row numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPosition {
    /// Column display index.
    pub idx: usize,
    /// Row index.
    pub row_idx: usize,
}

impl CellPosition {
    /// Create a cell position.
    pub const fn new(idx: usize, row_idx: usize) -> Self {
        Self { idx, row_idx }
    }
}
