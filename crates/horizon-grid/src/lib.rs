//! Interactive header cells for Horizon data grids.
//!
//! A [`HeaderCell`](widget::widgets::HeaderCell) owns the interaction logic
//! of one column header:
//!
//! - **Resizing**: dragging the resize handle on the inline end edge reports
//!   new widths; double-clicking it asks for an auto-fit width
//! - **Sorting**: clicks and Space/Enter cycle the column through its sort
//!   directions, with Ctrl/Cmd building a multi-column sort
//! - **Focus**: a roving tab index keeps exactly one grid cell in the Tab
//!   sequence, and the header doubles as the grid's entry tab stop
//! - **Reordering**: dropping one header onto another requests a column move
//!
//! The grid owns all state. Header cells read their column, sort list and
//! selection, and propose changes through [`Signal`](horizon_grid_core::Signal)s.
//!
//! # Example
//!
//! ```
//! use horizon_grid::prelude::*;
//!
//! struct Viewport {
//!     bounds: Rect,
//! }
//!
//! impl HeaderCellHost for Viewport {
//!     fn set_pointer_capture(&mut self, _pointer_id: PointerId) {}
//!     fn release_pointer_capture(&mut self, _pointer_id: PointerId) {}
//!     fn cell_bounds(&self) -> Rect {
//!         self.bounds
//!     }
//! }
//!
//! let column = Column::new("name", 0).with_name("Name").resizable();
//! let mut cell = HeaderCell::new(column);
//! cell.column_resized.connect(|resize| {
//!     println!("{} -> {}", resize.column_key, resize.width);
//! });
//!
//! let mut host = Viewport { bounds: Rect::new(0.0, 0.0, 150.0, 35.0) };
//! let down = PointerEvent::mouse(PointerId(1), Point::new(146.0, 10.0), HitRegion::ResizeHandle);
//! cell.event(&mut HeaderCellEvent::PointerDown(down), &mut host);
//!
//! let drag = PointerEvent::mouse(PointerId(1), Point::new(196.0, 10.0), HitRegion::ResizeHandle);
//! cell.event(&mut HeaderCellEvent::PointerMove(drag), &mut host);
//! ```

pub mod config;
pub mod geometry;
pub mod model;
pub mod prelude;
pub mod widget;

mod error;

pub use error::{Error, Result};
