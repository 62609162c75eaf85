//! Column descriptors.
//!
//! A [`Column`] is owned by the grid and handed to header cells read-only.
//! Header cells never change a column; they report requested changes (a new
//! width, a new sort order) through signals and let the grid apply them.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::widget::widgets::RenderHeaderCell;

/// Minimum width applied when a column does not configure one.
pub const DEFAULT_MIN_WIDTH: f32 = 50.0;

/// Identity of a column, unique within a grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnKey(Arc<str>);

impl ColumnKey {
    /// Create a key from any string.
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnKey {
    fn from(key: &str) -> Self {
        Self(key.into())
    }
}

impl From<String> for ColumnKey {
    fn from(key: String) -> Self {
        Self(key.into())
    }
}

impl AsRef<str> for ColumnKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ColumnKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ColumnKey {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for ColumnKey {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// The column group a grouped-header column belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    /// Group label.
    pub name: String,
    /// Depth of the group in the header hierarchy (0 = top row).
    pub level: usize,
}

/// A width reported by a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// An explicit width in pixels, already clamped to the column's limits.
    Pixels(f32),
    /// Size the column to its intrinsic content width.
    MaxContent,
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(width) => write!(f, "{width}px"),
            Self::MaxContent => f.write_str("max-content"),
        }
    }
}

/// A column of the grid, as seen by its header cell.
///
/// # Example
///
/// ```
/// use horizon_grid::model::Column;
///
/// let column = Column::new("name", 0)
///     .with_name("Name")
///     .sortable()
///     .resizable()
///     .with_min_width(80.0);
///
/// assert_eq!(column.clamp_width(20.0), 80.0);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Unique identity of the column.
    pub key: ColumnKey,
    /// Header label.
    pub name: String,
    /// Display position in the header row. Stable and unique within a row.
    pub idx: usize,
    /// Current computed width in pixels.
    pub width: f32,
    /// Smallest width a resize may report.
    pub min_width: f32,
    /// Largest width a resize may report.
    pub max_width: Option<f32>,
    /// Whether clicking the header toggles sorting.
    pub sortable: bool,
    /// Whether the header shows a resize handle.
    pub resizable: bool,
    /// Whether the header can be dragged onto another header to reorder.
    pub draggable: bool,
    /// Whether the column stays pinned while the grid scrolls horizontally.
    pub frozen: bool,
    /// Whether this is the last column of the frozen block.
    pub last_frozen: bool,
    /// Whether the first sort activation sorts descending.
    pub sort_descending_first: bool,
    /// Extra class applied to the header cell.
    pub header_cell_class: Option<String>,
    /// Custom renderer for the header content.
    pub header_renderer: Option<Arc<dyn RenderHeaderCell>>,
    /// Depth of the column in the header hierarchy.
    pub level: usize,
    /// Group this column belongs to in grouped-header layouts.
    pub parent: Option<ColumnGroup>,
}

impl Column {
    /// Creates a column with the given key at display position `idx`.
    pub fn new(key: impl Into<ColumnKey>, idx: usize) -> Self {
        let key = key.into();
        Self {
            name: key.to_string(),
            key,
            idx,
            width: 150.0,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: None,
            sortable: false,
            resizable: false,
            draggable: false,
            frozen: false,
            last_frozen: false,
            sort_descending_first: false,
            header_cell_class: None,
            header_renderer: None,
            level: 0,
            parent: None,
        }
    }

    /// Sets the header label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the current width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Sets the minimum width.
    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    /// Sets the maximum width.
    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Makes the column resizable.
    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    /// Makes the column draggable for reordering.
    pub fn draggable(mut self) -> Self {
        self.draggable = true;
        self
    }

    /// Pins the column. `last` marks the final column of the frozen block.
    pub fn frozen(mut self, last: bool) -> Self {
        self.frozen = true;
        self.last_frozen = last;
        self
    }

    /// Sorts descending on the first activation.
    pub fn sort_descending_first(mut self) -> Self {
        self.sort_descending_first = true;
        self
    }

    /// Sets an extra class for the header cell.
    pub fn with_header_cell_class(mut self, class: impl Into<String>) -> Self {
        self.header_cell_class = Some(class.into());
        self
    }

    /// Sets a custom header renderer.
    pub fn with_header_renderer(mut self, renderer: Arc<dyn RenderHeaderCell>) -> Self {
        self.header_renderer = Some(renderer);
        self
    }

    /// Places the column at `level` inside `group`.
    pub fn with_group(mut self, group: ColumnGroup, level: usize) -> Self {
        self.parent = Some(group);
        self.level = level;
        self
    }

    /// Clamps `width` into this column's limits.
    ///
    /// The maximum only applies when it is not below the minimum.
    pub fn clamp_width(&self, width: f32) -> f32 {
        let width = width.max(self.min_width);
        match self.max_width {
            Some(max_width) if max_width >= self.min_width => width.min(max_width),
            _ => width,
        }
    }

    /// Number of header rows this column's header spans when placed in
    /// header row `row_idx` (1-based). Never less than one.
    pub fn header_row_span(&self, row_idx: usize) -> usize {
        let span = match &self.parent {
            None => row_idx,
            Some(parent) => self.level.saturating_sub(parent.level),
        };
        span.max(1)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("idx", &self.idx)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("sortable", &self.sortable)
            .field("resizable", &self.resizable)
            .field("draggable", &self.draggable)
            .field("frozen", &self.frozen)
            .field("sort_descending_first", &self.sort_descending_first)
            .field("header_cell_class", &self.header_cell_class)
            .field("custom_renderer", &self.header_renderer.is_some())
            .field("level", &self.level)
            .field("parent", &self.parent)
            .finish()
    }
}
