//! Multi-column sort lists and their toggle rules.
//!
//! The grid owns the list of [`SortColumn`]s; index 0 is the primary sort
//! key. Header cells compute the *next* list with [`next_sort_columns`] and
//! hand it back to the grid. The current list is never modified in place.
//!
//! # Toggle cycle
//!
//! Each column cycles through three states: its first direction (ascending,
//! or descending for `sort_descending_first` columns), the opposite
//! direction, then unsorted. A plain activation collapses any multi-column
//! sort to at most the activated column; a multi-gesture (Ctrl/Cmd held)
//! edits only the activated column's entry and leaves the rest untouched.

use std::fmt;

use crate::model::column::{Column, ColumnKey};

/// Sort order of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// The direction a column sorts in on its first activation.
    pub fn initial_for(column: &Column) -> Self {
        if column.sort_descending_first {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        })
    }
}

/// One entry of a sort list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortColumn {
    /// The sorted column.
    pub column_key: ColumnKey,
    /// Its direction.
    pub direction: SortDirection,
}

impl SortColumn {
    /// Create a sort entry.
    pub fn new(column_key: impl Into<ColumnKey>, direction: SortDirection) -> Self {
        Self {
            column_key: column_key.into(),
            direction,
        }
    }
}

/// Result of looking a column up in a sort list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortLookup<'a> {
    /// The column is sorted, at `index` in the list.
    Found { index: usize, entry: &'a SortColumn },
    /// The column is not sorted (or sorting is disabled).
    NotFound,
}

/// Finds the entry for `key` in an optional sort list.
pub fn find_sort_column<'a>(sort_columns: Option<&'a [SortColumn]>, key: &str) -> SortLookup<'a> {
    let Some(columns) = sort_columns else {
        return SortLookup::NotFound;
    };
    match columns.iter().position(|entry| entry.column_key == key) {
        Some(index) => SortLookup::Found {
            index,
            entry: &columns[index],
        },
        None => SortLookup::NotFound,
    }
}

/// Computes the sort list that results from activating `column`.
///
/// `multi` is the multi-column gesture (Ctrl/Cmd held). The input list is
/// left untouched; a fresh list is always returned.
pub fn next_sort_columns(
    sort_columns: Option<&[SortColumn]>,
    column: &Column,
    multi: bool,
) -> Vec<SortColumn> {
    match find_sort_column(sort_columns, column.key.as_str()) {
        SortLookup::NotFound => {
            let entry = SortColumn::new(column.key.clone(), SortDirection::initial_for(column));
            match sort_columns {
                Some(existing) if multi => {
                    let mut next = Vec::with_capacity(existing.len() + 1);
                    next.extend_from_slice(existing);
                    next.push(entry);
                    next
                }
                _ => vec![entry],
            }
        }
        SortLookup::Found { index, entry } => {
            let next_entry = next_direction(column, entry.direction)
                .map(|direction| SortColumn::new(column.key.clone(), direction));

            if multi {
                // The lookup succeeded, so the list is present.
                let existing = sort_columns.unwrap_or_default();
                existing
                    .iter()
                    .enumerate()
                    .filter_map(|(i, current)| {
                        if i == index {
                            next_entry.clone()
                        } else {
                            Some(current.clone())
                        }
                    })
                    .collect()
            } else {
                next_entry.into_iter().collect()
            }
        }
    }
}

/// The direction that follows `current` in the column's cycle, or `None`
/// when the next activation unsorts the column.
fn next_direction(column: &Column, current: SortDirection) -> Option<SortDirection> {
    if current == SortDirection::initial_for(column) {
        Some(current.reversed())
    } else {
        None
    }
}

/// How a single column is sorted, as displayed in its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStatus {
    /// Direction of the column, if it is sorted.
    pub direction: Option<SortDirection>,
    /// 1-based rank in the sort list, only present when two or more columns
    /// are sorted.
    pub priority: Option<usize>,
}

impl SortStatus {
    /// Derives the status of the column identified by `key`.
    pub fn of(sort_columns: Option<&[SortColumn]>, key: &str) -> Self {
        match find_sort_column(sort_columns, key) {
            SortLookup::NotFound => Self::default(),
            SortLookup::Found { index, entry } => {
                let sorted_count = sort_columns.map_or(0, <[SortColumn]>::len);
                Self {
                    direction: Some(entry.direction),
                    priority: (sorted_count > 1).then_some(index + 1),
                }
            }
        }
    }

    /// The direction to announce to assistive technology.
    ///
    /// Only a sole sort key has an unambiguous direction; under multi-column
    /// sort the priority is exposed instead.
    pub fn announced_direction(&self) -> Option<SortDirection> {
        match self.priority {
            Some(_) => None,
            None => self.direction,
        }
    }
}
