//! Keyboard focus arbitration for grid cells.
//!
//! Grids use a *roving tab index*: only the selected cell is reachable with
//! Tab, and once focus moves into interactive content inside that cell the
//! cell itself steps out of the tab sequence so Shift+Tab leaves the grid
//! instead of bouncing back to the cell.
//!
//! The roving behaviour sits behind the [`RovingTabIndex`] trait.
//! [`RovingFocus`] is the stock implementation; [`FocusDelegate`] layers the
//! header-specific rule on top: when the grid signals that no cell is
//! selected yet, the header cell becomes the grid's tab-stop entry point and
//! focusing it moves selection to the first column.

use horizon_grid_core::grid_trace;
use horizon_grid_core::logging::targets;

use crate::model::CellPosition;
use crate::widget::events::{FocusInEvent, FocusTarget};

/// Tab order participation of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabIndex {
    /// Reachable with Tab, in document order (`tabindex="0"`).
    Sequential,
    /// Focusable programmatically only (`tabindex="-1"`).
    #[default]
    Programmatic,
}

impl TabIndex {
    /// The HTML `tabindex` value.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Sequential => 0,
            Self::Programmatic => -1,
        }
    }

    /// Whether the element is part of the Tab sequence.
    pub fn is_sequential(self) -> bool {
        self == Self::Sequential
    }
}

/// A roving-tab-index primitive.
///
/// Yields a tab index for a cell and for the interactive content inside
/// it, and observes focus changes within the cell.
pub trait RovingTabIndex: Send + Sync {
    /// Informs the primitive whether its cell is the selected one.
    fn set_selected(&mut self, selected: bool);

    /// Tab index of the cell element.
    fn tab_index(&self) -> TabIndex;

    /// Tab index for interactive content inside the cell.
    fn child_tab_index(&self) -> TabIndex;

    /// Called whenever focus lands on the cell or its content.
    fn on_focus(&mut self, event: &FocusInEvent);
}

impl<R: RovingTabIndex + ?Sized> RovingTabIndex for Box<R> {
    fn set_selected(&mut self, selected: bool) {
        (**self).set_selected(selected);
    }

    fn tab_index(&self) -> TabIndex {
        (**self).tab_index()
    }

    fn child_tab_index(&self) -> TabIndex {
        (**self).child_tab_index()
    }

    fn on_focus(&mut self, event: &FocusInEvent) {
        (**self).on_focus(event);
    }
}

/// The stock roving tab index.
#[derive(Debug, Clone, Copy, Default)]
pub struct RovingFocus {
    selected: bool,
    child_focused: bool,
}

impl RovingFocus {
    /// Create a primitive for a cell with the given selection state.
    pub fn new(selected: bool) -> Self {
        Self {
            selected,
            child_focused: false,
        }
    }

    /// Whether interactive content inside the selected cell holds focus.
    pub fn is_child_focused(&self) -> bool {
        self.child_focused
    }
}

impl RovingTabIndex for RovingFocus {
    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if !selected {
            self.child_focused = false;
        }
    }

    fn tab_index(&self) -> TabIndex {
        if self.selected && !self.child_focused {
            TabIndex::Sequential
        } else {
            TabIndex::Programmatic
        }
    }

    fn child_tab_index(&self) -> TabIndex {
        if self.selected {
            TabIndex::Sequential
        } else {
            TabIndex::Programmatic
        }
    }

    fn on_focus(&mut self, event: &FocusInEvent) {
        // Only the selected cell tracks its content's focus.
        if self.selected && event.target == FocusTarget::Child {
            self.child_focused = true;
        }
    }
}

/// Focus handling for a header cell.
#[derive(Debug, Clone, Default)]
pub struct FocusDelegate<R = RovingFocus> {
    roving: R,
}

impl<R: RovingTabIndex> FocusDelegate<R> {
    /// Wrap a roving-tab-index primitive.
    pub fn new(roving: R) -> Self {
        Self { roving }
    }

    /// The wrapped primitive.
    pub fn roving(&self) -> &R {
        &self.roving
    }

    /// Forwards the cell's selection state to the primitive.
    pub fn set_selected(&mut self, selected: bool) {
        self.roving.set_selected(selected);
    }

    /// Tab index of the cell element.
    ///
    /// `should_focus_grid` makes the cell the grid's entry tab stop,
    /// whatever the primitive computed.
    pub fn tab_index(&self, should_focus_grid: bool) -> TabIndex {
        if should_focus_grid {
            TabIndex::Sequential
        } else {
            self.roving.tab_index()
        }
    }

    /// Tab index for interactive content inside the cell.
    pub fn child_tab_index(&self) -> TabIndex {
        self.roving.child_tab_index()
    }

    /// Handles focus landing on the cell.
    ///
    /// The primitive always sees the event first. Returns the cell the grid
    /// should select, if focus has to be redirected.
    pub fn handle_focus(
        &mut self,
        event: &FocusInEvent,
        should_focus_grid: bool,
        row_idx: usize,
    ) -> Option<CellPosition> {
        self.roving.on_focus(event);

        if should_focus_grid {
            grid_trace!(
                targets::FOCUS,
                row_idx,
                "focus entered grid, selecting first cell"
            );
            Some(CellPosition::new(0, row_idx))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_index_values() {
        assert_eq!(TabIndex::Sequential.as_i32(), 0);
        assert_eq!(TabIndex::Programmatic.as_i32(), -1);
    }

    #[test]
    fn test_roving_focus_unselected() {
        let roving = RovingFocus::new(false);
        assert_eq!(roving.tab_index(), TabIndex::Programmatic);
        assert_eq!(roving.child_tab_index(), TabIndex::Programmatic);
    }

    #[test]
    fn test_roving_focus_child_takes_over() {
        let mut roving = RovingFocus::new(true);
        assert_eq!(roving.tab_index(), TabIndex::Sequential);
        assert_eq!(roving.child_tab_index(), TabIndex::Sequential);

        roving.on_focus(&FocusInEvent::new(FocusTarget::Cell));
        assert!(!roving.is_child_focused());

        roving.on_focus(&FocusInEvent::new(FocusTarget::Child));
        assert!(roving.is_child_focused());
        assert_eq!(roving.tab_index(), TabIndex::Programmatic);
        assert_eq!(roving.child_tab_index(), TabIndex::Sequential);
    }

    #[test]
    fn test_roving_focus_resets_on_deselect() {
        let mut roving = RovingFocus::new(true);
        roving.on_focus(&FocusInEvent::new(FocusTarget::Child));

        roving.set_selected(false);
        assert!(!roving.is_child_focused());

        roving.set_selected(true);
        assert_eq!(roving.tab_index(), TabIndex::Sequential);
    }

    #[test]
    fn test_unselected_cell_ignores_child_focus() {
        let mut roving = RovingFocus::new(false);
        roving.on_focus(&FocusInEvent::new(FocusTarget::Child));
        assert!(!roving.is_child_focused());
    }

    #[test]
    fn test_delegate_forces_entry_tab_stop() {
        let delegate = FocusDelegate::new(RovingFocus::new(false));
        assert_eq!(delegate.tab_index(false), TabIndex::Programmatic);
        assert_eq!(delegate.tab_index(true), TabIndex::Sequential);
    }

    #[test]
    fn test_delegate_redirects_selection() {
        let mut delegate = FocusDelegate::new(RovingFocus::new(false));
        let event = FocusInEvent::new(FocusTarget::Cell);

        assert_eq!(delegate.handle_focus(&event, false, 1), None);
        assert_eq!(
            delegate.handle_focus(&event, true, 1),
            Some(CellPosition::new(0, 1))
        );
    }

    /// Records the calls it receives.
    #[derive(Default)]
    struct RecordingRoving {
        focus_calls: usize,
    }

    impl RovingTabIndex for RecordingRoving {
        fn set_selected(&mut self, _selected: bool) {}

        fn tab_index(&self) -> TabIndex {
            TabIndex::Programmatic
        }

        fn child_tab_index(&self) -> TabIndex {
            TabIndex::Programmatic
        }

        fn on_focus(&mut self, _event: &FocusInEvent) {
            self.focus_calls += 1;
        }
    }

    #[test]
    fn test_delegate_always_notifies_primitive() {
        let mut delegate = FocusDelegate::new(RecordingRoving::default());
        let event = FocusInEvent::new(FocusTarget::Cell);

        delegate.handle_focus(&event, true, 1);
        delegate.handle_focus(&event, false, 1);
        assert_eq!(delegate.roving().focus_calls, 2);
    }
}
