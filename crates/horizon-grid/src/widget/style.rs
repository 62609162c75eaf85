//! Class lists and layout style of header cells.
//!
//! Header cells are laid out on a CSS grid: columns by `idx` and `colSpan`,
//! header rows by row index. Grouped headers stack several rows; a column
//! without a group spans every header row down to its own.

use std::fmt;

use crate::config::{ClassNames, HeaderCellConfig};
use crate::model::Column;

/// An ordered set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `class` unless it is empty or already present.
    pub fn add(&mut self, class: impl AsRef<str>) {
        let class = class.as_ref();
        if !class.is_empty() && !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Appends `class` when `condition` holds.
    pub fn add_if(&mut self, condition: bool, class: impl AsRef<str>) {
        if condition {
            self.add(class);
        }
    }

    /// Whether `class` is in the list.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The classes in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

/// Transient visual state of a header cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellVisualState {
    /// The cell is being dragged.
    pub dragging: bool,
    /// A column drag hovers over the cell.
    pub over: bool,
}

/// Composes the class list of a header cell.
pub fn header_cell_classes(
    column: &Column,
    classes: &ClassNames,
    state: CellVisualState,
) -> ClassList {
    let mut list = ClassList::new();
    list.add(&classes.cell);
    list.add_if(column.frozen, &classes.frozen);
    list.add_if(column.frozen && column.last_frozen, &classes.frozen_last);
    if let Some(custom) = &column.header_cell_class {
        list.add(custom);
    }
    list.add_if(column.sortable, &classes.sortable);
    list.add_if(column.resizable, &classes.resizable);
    list.add_if(column.draggable, &classes.draggable);
    list.add_if(state.dragging, &classes.dragging);
    list.add_if(state.over, &classes.over);
    list
}

/// Formats a pixel length.
pub fn px(value: f32) -> String {
    format!("{value}px")
}

/// Name of the custom property holding a frozen column's inline offset.
pub fn frozen_offset_var(idx: usize) -> String {
    format!("--hg-frozen-inline-start-{idx}")
}

/// Layout style of a header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCellStyle {
    /// 1-based first grid column.
    pub grid_column_start: usize,
    /// Number of grid columns spanned, when given.
    pub grid_column_span: Option<usize>,
    /// Column width in pixels.
    pub width: f32,
    /// Inline inset of a frozen column, as a custom property name.
    pub inset_inline_start: Option<String>,
    /// 1-based first grid row.
    pub grid_row_start: usize,
    /// Exclusive last grid row.
    pub grid_row_end: usize,
    /// Block inset in pixels.
    pub inset_block_start: f32,
    /// Block padding in pixels, pushing the content to the bottom row.
    pub padding_block_start: f32,
}

impl HeaderCellStyle {
    /// Computes the style of `column`'s header in header row `row_idx`
    /// (1-based).
    pub fn compute(
        column: &Column,
        col_span: Option<usize>,
        row_idx: usize,
        config: &HeaderCellConfig,
    ) -> Self {
        let row_height = config.header_row_height;
        let row_span = column.header_row_span(row_idx);
        let grid_row_end = row_idx + 1;

        let (grid_row_start, inset_rows) = if column.parent.is_some() {
            (grid_row_end.saturating_sub(row_span).max(1), row_idx.saturating_sub(row_span))
        } else {
            (1, 0)
        };

        Self {
            grid_column_start: column.idx + 1,
            grid_column_span: col_span,
            width: column.width,
            inset_inline_start: column.frozen.then(|| frozen_offset_var(column.idx)),
            grid_row_start,
            grid_row_end,
            inset_block_start: inset_rows as f32 * row_height,
            padding_block_start: (row_span - 1) as f32 * row_height,
        }
    }

    /// The style as CSS declarations.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut decls = vec![("grid-column-start", self.grid_column_start.to_string())];
        if let Some(span) = self.grid_column_span {
            decls.push(("grid-column-end", format!("span {span}")));
        }
        decls.push(("width", px(self.width)));
        if let Some(var) = &self.inset_inline_start {
            decls.push(("inset-inline-start", format!("var({var})")));
        }
        decls.push(("grid-row-start", self.grid_row_start.to_string()));
        decls.push(("grid-row-end", self.grid_row_end.to_string()));
        decls.push(("inset-block-start", px(self.inset_block_start)));
        decls.push(("padding-block-start", px(self.padding_block_start)));
        decls
    }

    /// The declarations joined into an inline `style` attribute.
    pub fn to_css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnGroup;

    #[test]
    fn test_class_list_skips_duplicates_and_empty() {
        let mut list = ClassList::new();
        list.add("a");
        list.add("a");
        list.add("");
        list.add_if(false, "b");
        list.add_if(true, "c");
        assert_eq!(list.to_string(), "a c");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_header_cell_classes() {
        let classes = ClassNames::default();
        let column = Column::new("name", 0)
            .sortable()
            .resizable()
            .frozen(true)
            .with_header_cell_class("custom");

        let list = header_cell_classes(&column, &classes, CellVisualState::default());
        assert!(list.contains("hg-cell"));
        assert!(list.contains("custom"));
        assert!(list.contains("hg-cell-sortable"));
        assert!(list.contains("hg-cell-resizable"));
        assert!(list.contains("hg-cell-frozen"));
        assert!(list.contains("hg-cell-frozen-last"));
        assert!(!list.contains("hg-cell-dragging"));

        let plain = header_cell_classes(
            &Column::new("age", 1),
            &classes,
            CellVisualState {
                dragging: true,
                over: true,
            },
        );
        assert_eq!(
            plain.to_string(),
            "hg-cell hg-cell-dragging hg-cell-drag-over"
        );
    }

    #[test]
    fn test_top_level_style() {
        let config = HeaderCellConfig::default();
        let column = Column::new("id", 2).with_width(120.0);

        let style = HeaderCellStyle::compute(&column, None, 1, &config);
        assert_eq!(style.grid_column_start, 3);
        assert_eq!(style.grid_row_start, 1);
        assert_eq!(style.grid_row_end, 2);
        assert_eq!(style.inset_block_start, 0.0);
        assert_eq!(style.padding_block_start, 0.0);
        assert_eq!(style.inset_inline_start, None);

        // A top-level column in the third header row spans all three rows.
        let style = HeaderCellStyle::compute(&column, Some(2), 3, &config);
        assert_eq!(style.grid_row_start, 1);
        assert_eq!(style.grid_row_end, 4);
        assert_eq!(style.padding_block_start, 70.0);
        assert_eq!(style.grid_column_span, Some(2));
    }

    #[test]
    fn test_grouped_style() {
        let config = HeaderCellConfig::default();
        let group = ColumnGroup {
            name: "Address".into(),
            level: 0,
        };
        let column = Column::new("city", 1).with_group(group, 1);

        let style = HeaderCellStyle::compute(&column, None, 3, &config);
        assert_eq!(style.grid_row_start, 3);
        assert_eq!(style.grid_row_end, 4);
        assert_eq!(style.inset_block_start, 70.0);
        assert_eq!(style.padding_block_start, 0.0);
    }

    #[test]
    fn test_frozen_inset_and_css() {
        let config = HeaderCellConfig::default();
        let column = Column::new("id", 0).frozen(false).with_width(80.0);

        let style = HeaderCellStyle::compute(&column, Some(1), 1, &config);
        let css = style.to_css();
        assert!(css.starts_with("grid-column-start: 1;"));
        assert!(css.contains("grid-column-end: span 1;"));
        assert!(css.contains("width: 80px;"));
        assert!(css.contains("inset-inline-start: var(--hg-frozen-inline-start-0);"));
    }
}
