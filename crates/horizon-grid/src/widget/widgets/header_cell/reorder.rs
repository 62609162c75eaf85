//! Column reordering by dragging one header onto another.

use horizon_grid_core::grid_trace;
use horizon_grid_core::logging::targets;

use crate::model::ColumnKey;
use crate::widget::events::DragEvent;
use crate::widget::style::CellVisualState;

/// A request to move the `source_key` column to `target_key`'s position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReorder {
    /// The dragged column.
    pub source_key: ColumnKey,
    /// The column it was dropped on.
    pub target_key: ColumnKey,
}

/// Drag state of one header cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderController {
    dragging: bool,
    over: bool,
}

impl ReorderController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this cell is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a drag hovers over this cell.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The state as seen by the class list.
    pub fn visual_state(&self) -> CellVisualState {
        CellVisualState {
            dragging: self.dragging,
            over: self.over,
        }
    }

    /// This cell started being dragged: publish its key in the payload.
    pub fn drag_start(&mut self, event: &mut DragEvent, key: &ColumnKey, drag_drop_key: &str) {
        event.data_transfer.set_data(drag_drop_key, key.as_str());
        event.base.accept();
        self.dragging = true;
        grid_trace!(targets::REORDER, column = %key, "column drag started");
    }

    /// The drag this cell started finished, dropped or not.
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// A drag moves over the cell. Suppressing the default marks the cell
    /// as a valid drop target.
    pub fn drag_over(&self, event: &mut DragEvent) {
        event.base.prevent_default();
    }

    /// A drag entered the cell.
    pub fn drag_enter(&mut self, event: &DragEvent) {
        // Moving between the cell's own children is not an enter.
        if !event.related_target_inside {
            self.over = true;
        }
    }

    /// A drag left the cell.
    pub fn drag_leave(&mut self, event: &DragEvent) {
        if !event.related_target_inside {
            self.over = false;
        }
    }

    /// A drag was dropped on the cell of column `target_key`.
    ///
    /// Returns the reorder request, if the payload names another column of
    /// this grid.
    pub fn drop(
        &mut self,
        event: &mut DragEvent,
        target_key: &ColumnKey,
        drag_drop_key: &str,
    ) -> Option<ColumnReorder> {
        self.over = false;

        let Some(source) = event.data_transfer.data(drag_drop_key) else {
            grid_trace!(targets::REORDER, "drop ignored: foreign drag payload");
            return None;
        };
        if *target_key == source {
            grid_trace!(targets::REORDER, column = %target_key, "drop ignored: same column");
            return None;
        }

        event.base.prevent_default();
        event.base.accept();
        Some(ColumnReorder {
            source_key: ColumnKey::from(source),
            target_key: target_key.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::events::{DataTransfer, DragPhase};

    const KEY: &str = "grid-7";

    fn payload(column: &str) -> DataTransfer {
        let mut data = DataTransfer::new();
        data.set_data(KEY, column);
        data
    }

    #[test]
    fn test_drag_start_and_end() {
        let mut controller = ReorderController::new();
        let mut event = DragEvent::new(DragPhase::Start, DataTransfer::new());

        controller.drag_start(&mut event, &ColumnKey::from("name"), KEY);
        assert!(controller.is_dragging());
        assert_eq!(event.data_transfer.data(KEY), Some("name"));

        controller.drag_end();
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drag_over_allows_drop() {
        let controller = ReorderController::new();
        let mut event = DragEvent::new(DragPhase::Over, payload("name"));
        controller.drag_over(&mut event);
        assert!(event.base.is_default_prevented());
    }

    #[test]
    fn test_enter_leave_ignore_inner_moves() {
        let mut controller = ReorderController::new();
        let mut event = DragEvent::new(DragPhase::Enter, payload("name"));

        controller.drag_enter(&event);
        assert!(controller.is_over());

        event.phase = DragPhase::Leave;
        event.related_target_inside = true;
        controller.drag_leave(&event);
        assert!(controller.is_over());

        event.related_target_inside = false;
        controller.drag_leave(&event);
        assert!(!controller.is_over());
    }

    #[test]
    fn test_drop_emits_reorder() {
        let mut controller = ReorderController::new();
        let mut enter = DragEvent::new(DragPhase::Enter, payload("name"));
        controller.drag_enter(&enter);
        enter.phase = DragPhase::Drop;

        let reorder = controller.drop(&mut enter, &ColumnKey::from("age"), KEY);
        assert_eq!(
            reorder,
            Some(ColumnReorder {
                source_key: ColumnKey::from("name"),
                target_key: ColumnKey::from("age"),
            })
        );
        assert!(enter.base.is_default_prevented());
        assert!(!controller.is_over());
    }

    #[test]
    fn test_drop_on_self_is_ignored() {
        let mut controller = ReorderController::new();
        let mut event = DragEvent::new(DragPhase::Drop, payload("age"));
        let target = ColumnKey::from("age");
        assert_eq!(controller.drop(&mut event, &target, KEY), None);
        assert!(!event.base.is_default_prevented());
    }

    #[test]
    fn test_drop_from_foreign_source_is_ignored() {
        let mut controller = ReorderController::new();
        let mut data = DataTransfer::new();
        data.set_data("text/plain", "name");
        let mut event = DragEvent::new(DragPhase::Drop, data);
        let target = ColumnKey::from("age");
        assert_eq!(controller.drop(&mut event, &target, KEY), None);
    }
}
