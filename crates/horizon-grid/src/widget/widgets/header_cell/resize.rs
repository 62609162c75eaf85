//! Pointer-driven column resizing.
//!
//! A drag on the resize handle is a [`ResizeSession`]: created on pointer
//! down, consulted on every pointer move, and dropped when pointer capture is
//! lost. Capture loss is the only teardown path; a pointer-up always releases
//! capture, so the host reports it as capture loss as well.
//!
//! Widths are derived from the cell bounds measured *at move time*, so the
//! gesture keeps tracking the pointer even when the grid scrolls or the cell
//! shifts while dragging.

use std::collections::HashMap;

use horizon_grid_core::grid_trace;
use horizon_grid_core::logging::targets;

use crate::geometry::{Direction, InlineAxis, Rect};
use crate::widget::events::{PointerEvent, PointerId, PointerType};

/// State of one resize drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    /// The captured pointer.
    pub pointer_id: PointerId,
    /// Distance from the pointer to the inline end edge at drag start.
    ///
    /// Keeps the edge under the same point of the handle for the whole drag.
    pub offset: f32,
    axis: InlineAxis,
}

impl ResizeSession {
    /// Starts a session for `event` on a cell with the given `bounds`.
    ///
    /// Returns `None` for mouse input unless exactly the primary button is
    /// held. Pen and touch input always qualifies.
    pub fn begin(event: &PointerEvent, bounds: &Rect, direction: Direction) -> Option<Self> {
        if event.pointer_type == PointerType::Mouse && !event.is_primary_only() {
            return None;
        }

        let axis = InlineAxis::new(direction);
        Some(Self {
            pointer_id: event.pointer_id,
            offset: axis.end(bounds) - axis.position(event.client_pos.x),
            axis,
        })
    }

    /// The width requested by a pointer at physical `x`, given the cell's
    /// current `bounds`.
    ///
    /// Returns `None` when the resulting width is not positive.
    pub fn pointer_moved(&self, x: f32, bounds: &Rect) -> Option<f32> {
        let width = self.axis.position(x) + self.offset - self.axis.start(bounds);
        (width > 0.0).then_some(width)
    }
}

/// Active resize sessions of one header cell, keyed by pointer.
#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    sessions: HashMap<PointerId, ResizeSession>,
}

impl ResizeController {
    /// Create a controller with no active sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to start a session. Returns `true` if one was started, in which
    /// case the caller must capture the pointer.
    pub fn begin(&mut self, event: &PointerEvent, bounds: &Rect, direction: Direction) -> bool {
        match ResizeSession::begin(event, bounds, direction) {
            Some(session) => {
                grid_trace!(
                    targets::RESIZE,
                    pointer = event.pointer_id.0,
                    offset = session.offset,
                    "resize started"
                );
                self.sessions.insert(event.pointer_id, session);
                true
            }
            None => {
                grid_trace!(
                    targets::RESIZE,
                    pointer = event.pointer_id.0,
                    buttons = event.buttons,
                    "resize ignored: not a primary-button press"
                );
                false
            }
        }
    }

    /// Whether `pointer_id` is dragging.
    pub fn is_dragging(&self, pointer_id: PointerId) -> bool {
        self.sessions.contains_key(&pointer_id)
    }

    /// Whether any pointer is dragging.
    pub fn is_active(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Number of concurrent sessions.
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    /// Pointers with an active session.
    pub fn pointer_ids(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.sessions.keys().copied()
    }

    /// The width requested by `pointer_id` moving to physical `x`.
    ///
    /// `None` when the pointer has no session or the width is not positive.
    pub fn pointer_moved(&self, pointer_id: PointerId, x: f32, bounds: &Rect) -> Option<f32> {
        self.sessions.get(&pointer_id)?.pointer_moved(x, bounds)
    }

    /// Ends the session of `pointer_id`. Unknown pointers are ignored.
    pub fn capture_lost(&mut self, pointer_id: PointerId) -> Option<ResizeSession> {
        let session = self.sessions.remove(&pointer_id);
        grid_trace!(
            targets::RESIZE,
            pointer = pointer_id.0,
            known = session.is_some(),
            "pointer capture lost"
        );
        session
    }
}
