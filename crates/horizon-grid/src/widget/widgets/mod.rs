//! Grid widgets.

mod header_cell;

pub use header_cell::{
    ColumnReorder, ColumnResize, DefaultHeaderRenderer, HeaderCell, HeaderCellHost, HeaderCellView,
    HeaderRenderProps, RenderHeaderCell, ReorderController, ResizeController, ResizeHandleView,
    ResizeSession,
};
