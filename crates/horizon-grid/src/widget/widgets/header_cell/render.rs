//! Header content rendering.

use crate::model::{Column, SortDirection};
use crate::widget::focus::TabIndex;

/// What a header renderer gets to work with.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRenderProps<'a> {
    /// The column being rendered.
    pub column: &'a Column,
    /// Sort direction, if the column is sorted.
    pub sort_direction: Option<SortDirection>,
    /// 1-based sort priority under multi-column sort.
    pub priority: Option<usize>,
    /// Tab index to give interactive content inside the header.
    pub tab_index: TabIndex,
}

/// Renders the content of a header cell.
///
/// Implement this to put custom content (filters, menus) into a header.
/// Interactive elements should use [`HeaderRenderProps::tab_index`] so the
/// cell's roving focus keeps working.
pub trait RenderHeaderCell: Send + Sync {
    /// Produces the header content markup.
    fn render(&self, props: &HeaderRenderProps<'_>) -> String;
}

/// Renders the column name followed by a sort indicator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHeaderRenderer;

impl DefaultHeaderRenderer {
    /// Indicator glyph for a sort direction.
    pub fn sort_icon(direction: SortDirection) -> &'static str {
        match direction {
            SortDirection::Ascending => "\u{25B2}",
            SortDirection::Descending => "\u{25BC}",
        }
    }
}

impl RenderHeaderCell for DefaultHeaderRenderer {
    fn render(&self, props: &HeaderRenderProps<'_>) -> String {
        let name = &props.column.name;
        if !props.column.sortable {
            return name.clone();
        }
        match (props.sort_direction, props.priority) {
            (Some(direction), Some(priority)) => {
                format!("{name} {}{priority}", Self::sort_icon(direction))
            }
            (Some(direction), None) => format!("{name} {}", Self::sort_icon(direction)),
            (None, _) => name.clone(),
        }
    }
}

impl<F> RenderHeaderCell for F
where
    F: Fn(&HeaderRenderProps<'_>) -> String + Send + Sync,
{
    fn render(&self, props: &HeaderRenderProps<'_>) -> String {
        self(props)
    }
}
