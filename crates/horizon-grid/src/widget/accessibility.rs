//! ARIA metadata for header cells.
//!
//! [`HeaderCellAria`] is the toolkit-neutral description a host renders as
//! DOM attributes. With the `accessibility` feature it also converts into an
//! AccessKit [`Node`](accesskit::Node) for native accessibility trees.

use std::fmt;

use crate::model::{SortDirection, SortStatus};

/// The `aria-sort` state of a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaSort {
    Ascending,
    Descending,
}

impl AriaSort {
    /// The attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl From<SortDirection> for AriaSort {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => Self::Ascending,
            SortDirection::Descending => Self::Descending,
        }
    }
}

impl fmt::Display for AriaSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ARIA attributes of one header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCellAria {
    /// Accessible label (the column name).
    pub label: String,
    /// 1-based column index (`aria-colindex`).
    pub col_index: usize,
    /// Number of columns spanned (`aria-colspan`), when given.
    pub col_span: Option<usize>,
    /// Number of header rows spanned (`aria-rowspan`).
    pub row_span: usize,
    /// Whether the cell is the grid's selected cell (`aria-selected`).
    pub selected: bool,
    /// Sort state (`aria-sort`). Only set for a sole sort key.
    pub sort: Option<AriaSort>,
    /// 1-based sort priority, shown when several columns are sorted.
    pub sort_priority: Option<usize>,
}

impl HeaderCellAria {
    /// The role of every header cell.
    pub const ROLE: &'static str = "columnheader";

    /// Fills the sort fields from a column's sort status.
    pub fn with_sort_status(mut self, status: SortStatus) -> Self {
        self.sort = status.announced_direction().map(AriaSort::from);
        self.sort_priority = status.priority;
        self
    }

    /// The attributes as `(name, value)` pairs, in a stable order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("role", Self::ROLE.to_string()),
            ("aria-colindex", self.col_index.to_string()),
        ];
        if let Some(span) = self.col_span {
            attrs.push(("aria-colspan", span.to_string()));
        }
        attrs.push(("aria-rowspan", self.row_span.to_string()));
        attrs.push(("aria-selected", self.selected.to_string()));
        if let Some(sort) = self.sort {
            attrs.push(("aria-sort", sort.as_str().to_string()));
        }
        attrs
    }

    /// Builds an AccessKit node for native accessibility trees.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_node(&self) -> accesskit::Node {
        use accesskit::{Action, Node, Role};

        let mut node = Node::new(Role::ColumnHeader);
        node.set_label(self.label.clone());
        // AccessKit indices are 0-based.
        node.set_column_index(self.col_index.saturating_sub(1));
        if let Some(span) = self.col_span {
            node.set_column_span(span);
        }
        node.set_row_span(self.row_span);
        node.set_selected(self.selected);
        if let Some(sort) = self.sort {
            node.set_sort_direction(match sort {
                AriaSort::Ascending => accesskit::SortDirection::Ascending,
                AriaSort::Descending => accesskit::SortDirection::Descending,
            });
        }
        node.add_action(Action::Focus);
        node.add_action(Action::Click);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_attribute(aria: &HeaderCellAria, name: &str) -> bool {
        aria.attributes().iter().any(|(n, _)| *n == name)
    }

    fn aria() -> HeaderCellAria {
        HeaderCellAria {
            label: "Name".into(),
            col_index: 3,
            col_span: None,
            row_span: 1,
            selected: false,
            sort: None,
            sort_priority: None,
        }
    }

    #[test]
    fn test_sort_attribute_only_for_sole_key() {
        let single = aria().with_sort_status(SortStatus {
            direction: Some(SortDirection::Descending),
            priority: None,
        });
        assert_eq!(single.sort, Some(AriaSort::Descending));

        let multi = aria().with_sort_status(SortStatus {
            direction: Some(SortDirection::Ascending),
            priority: Some(2),
        });
        assert_eq!(multi.sort, None);
        assert_eq!(multi.sort_priority, Some(2));
        assert!(!has_attribute(&multi, "aria-sort"));
    }

    #[test]
    fn test_attributes() {
        let mut aria = aria();
        aria.col_span = Some(2);
        aria.selected = true;
        aria.sort = Some(AriaSort::Ascending);

        let attrs = aria.attributes();
        assert_eq!(attrs[0], ("role", "columnheader".to_string()));
        assert!(attrs.contains(&("aria-colindex", "3".to_string())));
        assert!(attrs.contains(&("aria-colspan", "2".to_string())));
        assert!(attrs.contains(&("aria-selected", "true".to_string())));
        assert!(attrs.contains(&("aria-sort", "ascending".to_string())));
    }

    #[test]
    fn test_colspan_omitted_when_absent() {
        assert!(!has_attribute(&aria(), "aria-colspan"));
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_accesskit_node() {
        let node = aria().to_accesskit_node();
        assert_eq!(node.role(), accesskit::Role::ColumnHeader);
        assert_eq!(node.column_index(), Some(2));
    }
}
