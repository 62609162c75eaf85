//! Commonly used types.
//!
//! ```
//! use horizon_grid::prelude::*;
//! ```

pub use crate::config::{ClassNames, HeaderCellConfig};
pub use crate::error::{Error, Result};
pub use crate::geometry::{Direction, Point, Rect, Size};
pub use crate::model::{
    CellPosition, Column, ColumnGroup, ColumnKey, ColumnWidth, SortColumn, SortDirection,
    SortStatus,
};
pub use crate::widget::events::{
    ClickEvent, DataTransfer, DragEvent, DragPhase, FocusInEvent, FocusTarget, HeaderCellEvent,
    HitRegion, Key, KeyPressEvent, KeyboardModifiers, MouseButton, PointerEvent, PointerId,
    PointerType,
};
pub use crate::widget::focus::{RovingFocus, RovingTabIndex, TabIndex};
pub use crate::widget::widgets::{
    ColumnReorder, ColumnResize, HeaderCell, HeaderCellHost, HeaderCellView, HeaderRenderProps,
    RenderHeaderCell,
};
pub use horizon_grid_core::Signal;
