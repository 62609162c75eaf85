//! HeaderCell widget for data grid column headers.
//!
//! This module provides [`HeaderCell`], one header cell of a data grid. It
//! supports:
//!
//! - Column resizing by dragging the resize handle (auto-fit on double-click)
//! - Single and multi-column sort toggling by click or Space/Enter
//! - Roving-tab-index focus, with the header as the grid's entry tab stop
//! - Column reordering by dragging one header onto another
//!
//! The cell never changes its column or the sort list itself. It emits
//! requests through its signals and the grid feeds the new state back with
//! the setters.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use horizon_grid::model::{Column, SortColumn};
//! use horizon_grid::widget::widgets::HeaderCell;
//!
//! let column = Column::new("name", 0).with_name("Name").sortable();
//! let cell = HeaderCell::new(column).with_row_idx(1);
//!
//! let sort = Arc::new(Mutex::new(Vec::<SortColumn>::new()));
//! let sort_clone = sort.clone();
//! cell.sort_columns_changed.connect(move |next| {
//!     *sort_clone.lock() = next.clone();
//! });
//!
//! cell.sort(false);
//! assert_eq!(sort.lock()[0].column_key, "name");
//! ```

mod render;
mod reorder;
mod resize;

pub use render::{DefaultHeaderRenderer, HeaderRenderProps, RenderHeaderCell};
pub use reorder::{ColumnReorder, ReorderController};
pub use resize::{ResizeController, ResizeSession};

use std::fmt;
use std::sync::Arc;

use horizon_grid_core::logging::{span_names, targets};
use horizon_grid_core::{Signal, grid_debug, grid_trace};

use crate::config::HeaderCellConfig;
use crate::geometry::{Direction, InlineAxis, Point, Rect};
use crate::model::{
    CellPosition, Column, ColumnKey, ColumnWidth, SortColumn, SortStatus, next_sort_columns,
};
use crate::widget::accessibility::HeaderCellAria;
use crate::widget::events::{
    ClickEvent, DragEvent, DragPhase, FocusInEvent, HeaderCellEvent, HitRegion, KeyPressEvent,
    MouseButton, PointerEvent, PointerId,
};
use crate::widget::focus::{FocusDelegate, RovingFocus, RovingTabIndex, TabIndex};
use crate::widget::style::{ClassList, HeaderCellStyle, header_cell_classes};

/// The imperative shell a header cell runs in.
///
/// Implemented by the host toolkit for the element rendering the cell.
pub trait HeaderCellHost {
    /// Routes all further events of `pointer_id` to the cell.
    fn set_pointer_capture(&mut self, pointer_id: PointerId);

    /// Stops routing `pointer_id` to the cell. The host answers with a
    /// [`HeaderCellEvent::LostPointerCapture`].
    fn release_pointer_capture(&mut self, pointer_id: PointerId);

    /// Current bounding box of the cell, in client coordinates.
    fn cell_bounds(&self) -> Rect;
}

/// A width change requested by the resize handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResize {
    /// The resized column.
    pub column_key: ColumnKey,
    /// Its display position.
    pub idx: usize,
    /// The requested width.
    pub width: ColumnWidth,
}

/// The resize handle as rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeHandleView {
    /// Class of the handle element.
    pub class: String,
    /// Thickness of the strip along the inline end edge, in pixels.
    pub thickness: f32,
}

/// Everything a host needs to render a header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCellView {
    /// ARIA attributes.
    pub aria: HeaderCellAria,
    /// Tab index of the cell element.
    pub tab_index: TabIndex,
    /// Class list of the cell element.
    pub classes: ClassList,
    /// Layout style of the cell element.
    pub style: HeaderCellStyle,
    /// Rendered header content.
    pub content: String,
    /// Whether the element is a drag source.
    pub draggable: bool,
    /// The resize handle, for resizable columns.
    pub resize_handle: Option<ResizeHandleView>,
}

/// One header cell of a data grid.
///
/// # Signals
///
/// - `column_resized(ColumnResize)`: a resize gesture requests a new width
/// - `sort_columns_changed(Vec<SortColumn>)`: a sort activation proposes a new sort list
/// - `cell_selected(CellPosition)`: the grid should select a cell
/// - `columns_reordered(ColumnReorder)`: a header was dropped onto this one
pub struct HeaderCell {
    column: Column,
    col_span: Option<usize>,
    /// 1-based header row.
    row_idx: usize,
    is_cell_selected: bool,
    sort_columns: Option<Vec<SortColumn>>,
    direction: Direction,
    should_focus_grid: bool,
    drag_drop_key: Option<String>,
    config: Arc<HeaderCellConfig>,

    resize: ResizeController,
    reorder: ReorderController,
    focus: FocusDelegate<Box<dyn RovingTabIndex>>,

    /// Emitted when the resize handle requests a new column width.
    pub column_resized: Signal<ColumnResize>,

    /// Emitted with the proposed sort list after a sort activation.
    ///
    /// Sorting is disabled while nothing is connected.
    pub sort_columns_changed: Signal<Vec<SortColumn>>,

    /// Emitted when the grid should select a cell.
    pub cell_selected: Signal<CellPosition>,

    /// Emitted when another column's header is dropped onto this one.
    pub columns_reordered: Signal<ColumnReorder>,
}

static_assertions::assert_impl_all!(HeaderCell: Send, Sync);

impl HeaderCell {
    /// Creates a header cell for `column` in the first header row.
    pub fn new(column: Column) -> Self {
        Self {
            column,
            col_span: None,
            row_idx: 1,
            is_cell_selected: false,
            sort_columns: None,
            direction: Direction::Ltr,
            should_focus_grid: false,
            drag_drop_key: None,
            config: Arc::new(HeaderCellConfig::default()),
            resize: ResizeController::new(),
            reorder: ReorderController::new(),
            focus: FocusDelegate::new(Box::new(RovingFocus::new(false))),
            column_resized: Signal::new(),
            sort_columns_changed: Signal::new(),
            cell_selected: Signal::new(),
            columns_reordered: Signal::new(),
        }
    }

    /// Set the header row using builder pattern.
    pub fn with_row_idx(mut self, row_idx: usize) -> Self {
        self.row_idx = row_idx;
        self
    }

    /// Set the column span using builder pattern.
    pub fn with_col_span(mut self, col_span: usize) -> Self {
        self.col_span = Some(col_span);
        self
    }

    /// Set the text direction using builder pattern.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the sort list using builder pattern.
    pub fn with_sort_columns(mut self, sort_columns: Vec<SortColumn>) -> Self {
        self.sort_columns = Some(sort_columns);
        self
    }

    /// Set the shared configuration using builder pattern.
    pub fn with_config(mut self, config: Arc<HeaderCellConfig>) -> Self {
        self.config = config;
        self
    }

    /// Replace the roving-tab-index primitive using builder pattern.
    pub fn with_roving_tab_index(mut self, roving: impl RovingTabIndex + 'static) -> Self {
        let mut roving: Box<dyn RovingTabIndex> = Box::new(roving);
        roving.set_selected(self.is_cell_selected);
        self.focus = FocusDelegate::new(roving);
        self
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// The column this cell heads.
    pub fn column(&self) -> &Column {
        &self.column
    }

    /// Replaces the column, e.g. after the grid applied a resize.
    pub fn set_column(&mut self, column: Column) {
        self.column = column;
    }

    /// Number of grid columns the cell spans.
    pub fn col_span(&self) -> Option<usize> {
        self.col_span
    }

    /// Sets the number of grid columns the cell spans.
    pub fn set_col_span(&mut self, col_span: Option<usize>) {
        self.col_span = col_span;
    }

    /// The 1-based header row of the cell.
    pub fn row_idx(&self) -> usize {
        self.row_idx
    }

    /// Sets the 1-based header row of the cell.
    pub fn set_row_idx(&mut self, row_idx: usize) {
        self.row_idx = row_idx;
    }

    /// Whether the cell is the grid's selected cell.
    pub fn is_cell_selected(&self) -> bool {
        self.is_cell_selected
    }

    /// Marks the cell as the grid's selected cell.
    pub fn set_cell_selected(&mut self, selected: bool) {
        self.is_cell_selected = selected;
        self.focus.set_selected(selected);
    }

    /// The current sort list. `None` when the grid does not sort.
    pub fn sort_columns(&self) -> Option<&[SortColumn]> {
        self.sort_columns.as_deref()
    }

    /// Sets the current sort list.
    pub fn set_sort_columns(&mut self, sort_columns: Option<Vec<SortColumn>>) {
        self.sort_columns = sort_columns;
    }

    /// Text direction of the grid.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the text direction of the grid.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Whether the cell is the grid's entry tab stop.
    pub fn should_focus_grid(&self) -> bool {
        self.should_focus_grid
    }

    /// Makes the cell the grid's entry tab stop. Set by the grid while no
    /// cell is selected.
    pub fn set_should_focus_grid(&mut self, should_focus_grid: bool) {
        self.should_focus_grid = should_focus_grid;
    }

    /// Payload format for column drags.
    pub fn drag_drop_key(&self) -> &str {
        match &self.drag_drop_key {
            Some(key) => key,
            None => &self.config.drag_drop_key,
        }
    }

    /// Overrides the configured payload format for column drags.
    pub fn set_drag_drop_key(&mut self, key: impl Into<String>) {
        self.drag_drop_key = Some(key.into());
    }

    /// The shared configuration.
    pub fn config(&self) -> &HeaderCellConfig {
        &self.config
    }

    /// Replaces the shared configuration.
    pub fn set_config(&mut self, config: Arc<HeaderCellConfig>) {
        self.config = config;
    }

    // =========================================================================
    // Interaction State
    // =========================================================================

    /// Active resize sessions.
    pub fn resize_controller(&self) -> &ResizeController {
        &self.resize
    }

    /// Drag state of the cell.
    pub fn reorder_controller(&self) -> &ReorderController {
        &self.reorder
    }

    /// Whether `pointer_id` is dragging the resize handle.
    pub fn is_resizing(&self, pointer_id: PointerId) -> bool {
        self.resize.is_dragging(pointer_id)
    }

    /// Releases the capture of every pointer dragging the handle.
    ///
    /// Sessions end once the host reports the capture loss.
    pub fn cancel_resize(&self, host: &mut dyn HeaderCellHost) {
        for pointer_id in self.resize.pointer_ids() {
            host.release_pointer_capture(pointer_id);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The resize handle strip for a cell with the given `bounds`.
    pub fn resize_handle_rect(&self, bounds: &Rect) -> Option<Rect> {
        if !self.column.resizable {
            return None;
        }
        let axis = InlineAxis::new(self.direction);
        Some(axis.end_strip(bounds, self.config.resize_handle_width))
    }

    /// Which region of a cell with the given `bounds` contains `point`.
    pub fn hit_test(&self, point: Point, bounds: &Rect) -> HitRegion {
        match self.resize_handle_rect(bounds) {
            Some(handle) if handle.contains(point) => HitRegion::ResizeHandle,
            _ => HitRegion::Cell,
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Proposes the sort list that results from activating this column.
    ///
    /// `multi` extends the current multi-column sort instead of replacing
    /// it. Does nothing unless the column is sortable and something listens
    /// to [`sort_columns_changed`](Self::sort_columns_changed).
    pub fn sort(&self, multi: bool) {
        if !self.column.sortable {
            return;
        }
        if !self.sort_columns_changed.is_connected() {
            grid_trace!(targets::SORT, column = %self.column.key, "sort ignored: no listener");
            return;
        }

        let next = next_sort_columns(self.sort_columns.as_deref(), &self.column, multi);
        grid_debug!(
            targets::SORT,
            column = %self.column.key,
            multi,
            sorted = next.len(),
            "sort columns changed"
        );
        self.sort_columns_changed.emit(next);
    }

    /// Requests selection of this cell.
    pub fn select(&self) {
        let position = CellPosition::new(self.column.idx, self.row_idx);
        self.cell_selected.emit(position);
    }

    /// Requests that the column be sized to its content.
    pub fn auto_fit(&self) {
        self.emit_resize(ColumnWidth::MaxContent);
    }

    fn emit_resize(&self, width: ColumnWidth) {
        grid_trace!(targets::RESIZE, column = %self.column.key, %width, "column resized");
        self.column_resized.emit(ColumnResize {
            column_key: self.column.key.clone(),
            idx: self.column.idx,
            width,
        });
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Sort status of the column in the current sort list.
    pub fn sort_status(&self) -> SortStatus {
        SortStatus::of(self.sort_columns.as_deref(), self.column.key.as_str())
    }

    /// ARIA attributes of the cell.
    pub fn aria(&self) -> HeaderCellAria {
        HeaderCellAria {
            label: self.column.name.clone(),
            col_index: self.column.idx + 1,
            col_span: self.col_span,
            row_span: self.column.header_row_span(self.row_idx),
            selected: self.is_cell_selected,
            sort: None,
            sort_priority: None,
        }
        .with_sort_status(self.sort_status())
    }

    /// Tab index of the cell element.
    pub fn tab_index(&self) -> TabIndex {
        self.focus.tab_index(self.should_focus_grid)
    }

    /// Tab index for interactive content inside the cell.
    pub fn child_tab_index(&self) -> TabIndex {
        self.focus.child_tab_index()
    }

    /// Computes the cell's rendered state.
    pub fn render(&self) -> HeaderCellView {
        let status = self.sort_status();
        let props = HeaderRenderProps {
            column: &self.column,
            sort_direction: status.direction,
            priority: status.priority,
            tab_index: self.child_tab_index(),
        };
        let renderer: &dyn RenderHeaderCell = match self.column.header_renderer.as_deref() {
            Some(renderer) => renderer,
            None => &DefaultHeaderRenderer,
        };

        HeaderCellView {
            aria: self.aria(),
            tab_index: self.tab_index(),
            classes: header_cell_classes(
                &self.column,
                &self.config.classes,
                self.reorder.visual_state(),
            ),
            style: HeaderCellStyle::compute(
                &self.column,
                self.col_span,
                self.row_idx,
                &self.config,
            ),
            content: renderer.render(&props),
            draggable: self.column.draggable,
            resize_handle: self.column.resizable.then(|| ResizeHandleView {
                class: self.config.classes.resize_handle.clone(),
                thickness: self.config.resize_handle_width,
            }),
        }
    }

    /// Builds an AccessKit node for the cell.
    #[cfg(feature = "accessibility")]
    pub fn accessible_node(&self) -> accesskit::Node {
        self.aria().to_accesskit_node()
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Dispatches an event to the cell.
    ///
    /// Returns `true` if the cell handled the event.
    pub fn event(&mut self, event: &mut HeaderCellEvent, host: &mut dyn HeaderCellHost) -> bool {
        let _span = tracing::trace_span!(
            target: targets::HEADER,
            span_names::HEADER_EVENT,
            column = %self.column.key
        )
        .entered();

        match event {
            HeaderCellEvent::PointerDown(e) => self.handle_pointer_down(e, host),
            HeaderCellEvent::PointerMove(e) => self.handle_pointer_move(e, host),
            HeaderCellEvent::LostPointerCapture(pointer_id) => {
                self.resize.capture_lost(*pointer_id).is_some()
            }
            HeaderCellEvent::Click(e) => self.handle_click(e),
            HeaderCellEvent::DoubleClick(e) => self.handle_double_click(e),
            HeaderCellEvent::KeyPress(e) => self.handle_key_press(e),
            HeaderCellEvent::FocusIn(e) => self.handle_focus_in(e),
            HeaderCellEvent::Drag(e) => self.handle_drag(e),
        }
    }

    fn handle_pointer_down(
        &mut self,
        event: &mut PointerEvent,
        host: &mut dyn HeaderCellHost,
    ) -> bool {
        if event.region != HitRegion::ResizeHandle || !self.column.resizable {
            return false;
        }

        let bounds = host.cell_bounds();
        if !self.resize.begin(event, &bounds, self.direction) {
            return false;
        }
        host.set_pointer_capture(event.pointer_id);
        event.base.accept();
        true
    }

    fn handle_pointer_move(
        &mut self,
        event: &mut PointerEvent,
        host: &mut dyn HeaderCellHost,
    ) -> bool {
        if !self.resize.is_dragging(event.pointer_id) {
            return false;
        }
        event.base.prevent_default();
        event.base.accept();

        let bounds = host.cell_bounds();
        let x = event.client_pos.x;
        let width = self.resize.pointer_moved(event.pointer_id, x, &bounds);
        if let Some(width) = width {
            self.emit_resize(ColumnWidth::Pixels(self.column.clamp_width(width)));
        }
        true
    }

    fn handle_click(&mut self, event: &mut ClickEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if event.region == HitRegion::ResizeHandle && self.column.resizable {
            // Finishing a drag must not also sort.
            event.base.stop_propagation();
            event.base.accept();
            return true;
        }

        self.select();
        self.sort(event.modifiers.command());
        event.base.accept();
        true
    }

    fn handle_double_click(&mut self, event: &mut ClickEvent) -> bool {
        if event.region != HitRegion::ResizeHandle || !self.column.resizable {
            return false;
        }
        self.auto_fit();
        event.base.accept();
        true
    }

    fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        if !self.column.sortable || !event.key.is_activation() {
            return false;
        }
        // Space would otherwise scroll the grid.
        event.base.prevent_default();
        event.base.accept();
        self.sort(event.modifiers.command());
        true
    }

    fn handle_focus_in(&mut self, event: &mut FocusInEvent) -> bool {
        let (enter_grid, row_idx) = (self.should_focus_grid, self.row_idx);
        let redirect = self.focus.handle_focus(event, enter_grid, row_idx);
        if let Some(position) = redirect {
            self.cell_selected.emit(position);
        }
        event.base.accept();
        true
    }

    fn handle_drag(&mut self, event: &mut DragEvent) -> bool {
        if !self.column.draggable {
            return false;
        }

        match event.phase {
            DragPhase::Start => {
                let key = self.drag_drop_key().to_string();
                self.reorder.drag_start(event, &self.column.key, &key);
            }
            DragPhase::End => self.reorder.drag_end(),
            DragPhase::Over => self.reorder.drag_over(event),
            DragPhase::Enter => self.reorder.drag_enter(event),
            DragPhase::Leave => self.reorder.drag_leave(event),
            DragPhase::Drop => {
                let key = self.drag_drop_key().to_string();
                if let Some(reorder) = self.reorder.drop(event, &self.column.key, &key) {
                    grid_debug!(
                        targets::REORDER,
                        source = %reorder.source_key,
                        target = %reorder.target_key,
                        "columns reordered"
                    );
                    self.columns_reordered.emit(reorder);
                }
            }
        }
        true
    }
}

impl fmt::Debug for HeaderCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderCell")
            .field("column", &self.column)
            .field("col_span", &self.col_span)
            .field("row_idx", &self.row_idx)
            .field("is_cell_selected", &self.is_cell_selected)
            .field("sort_columns", &self.sort_columns)
            .field("direction", &self.direction)
            .field("should_focus_grid", &self.should_focus_grid)
            .field("resize", &self.resize)
            .field("reorder", &self.reorder)
            .finish_non_exhaustive()
    }
}
