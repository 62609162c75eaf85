//! Input event types delivered to grid widgets.
//!
//! The host toolkit translates its platform events into these types and
//! routes them to the widget under the pointer (or to the widget holding
//! pointer capture). Events carry an [`EventBase`] through which the widget
//! reports back whether the host should run its default action and whether
//! the event should keep propagating to enclosing elements.

use std::collections::HashMap;

use crate::geometry::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Control or Meta (Cmd on macOS) is held.
    ///
    /// This is the "extend the current multi-column sort" gesture.
    pub fn command(&self) -> bool {
        self.control || self.meta
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
    /// Additional button 1 (e.g., browser back).
    Button4 = 3,
    /// Additional button 2 (e.g., browser forward).
    Button5 = 4,
}

impl MouseButton {
    /// Bit of this button in a pressed-buttons mask.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Ask the host to skip its default action (scrolling, text selection).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop the event from reaching enclosing elements.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Identifier of one active pointer (mouse, pen contact or touch point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// The kind of device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerType {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// Which part of a header cell an event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// The cell body (label, sort indicator, padding).
    #[default]
    Cell,
    /// The resize handle strip on the inline end edge.
    ResizeHandle,
}

/// Pointer down/move event.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Base event data.
    pub base: EventBase,
    /// The pointer that produced the event.
    pub pointer_id: PointerId,
    /// Device kind.
    pub pointer_type: PointerType,
    /// Pressed-buttons mask, see [`MouseButton::mask`].
    pub buttons: u8,
    /// Position in client coordinates.
    pub client_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Region of the cell the pointer is over.
    pub region: HitRegion,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(
        pointer_id: PointerId,
        pointer_type: PointerType,
        buttons: u8,
        client_pos: Point,
        region: HitRegion,
    ) -> Self {
        Self {
            base: EventBase::new(),
            pointer_id,
            pointer_type,
            buttons,
            client_pos,
            modifiers: KeyboardModifiers::NONE,
            region,
        }
    }

    /// A primary-button mouse event, the common case in tests and hosts.
    pub fn mouse(pointer_id: PointerId, client_pos: Point, region: HitRegion) -> Self {
        Self::new(
            pointer_id,
            PointerType::Mouse,
            MouseButton::Left.mask(),
            client_pos,
            region,
        )
    }

    /// Check if a specific button is pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        (self.buttons & button.mask()) != 0
    }

    /// `true` when exactly the primary button is held.
    pub fn is_primary_only(&self) -> bool {
        self.buttons == MouseButton::Left.mask()
    }
}

/// Click or double-click event.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was clicked.
    pub button: MouseButton,
    /// Position in client coordinates.
    pub client_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Region of the cell that was clicked.
    pub region: HitRegion,
}

impl ClickEvent {
    /// Create a new primary-button click event.
    pub fn new(client_pos: Point, modifiers: KeyboardModifiers, region: HitRegion) -> Self {
        Self {
            base: EventBase::new(),
            button: MouseButton::Left,
            client_pos,
            modifiers,
            region,
        }
    }
}

/// Keyboard key codes relevant to grid interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Tab,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    /// Any other key, by platform code.
    Other(u16),
}

impl Key {
    /// Keys that activate a focused control.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Key press event.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is an auto-repeat event.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat: false,
        }
    }
}

/// Where focus landed within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The cell element itself.
    #[default]
    Cell,
    /// Interactive content rendered inside the cell.
    Child,
}

/// Focus in event, sent when the cell or its content gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// The element that received focus.
    pub target: FocusTarget,
}

impl FocusInEvent {
    /// Create a new focus in event.
    pub fn new(target: FocusTarget) -> Self {
        Self {
            base: EventBase::new(),
            target,
        }
    }
}

/// Typed payload carried by a drag-and-drop operation.
///
/// Entries are keyed by a format string, so unrelated drag sources on the
/// same page cannot be mistaken for one another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: HashMap<String, String>,
}

impl DataTransfer {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `format`, replacing any previous value.
    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<String>) {
        self.entries.insert(format.into(), data.into());
    }

    /// The value stored under `format`, if any.
    pub fn data(&self, format: &str) -> Option<&str> {
        self.entries.get(format).map(String::as_str)
    }

    /// Whether a value is stored under `format`.
    pub fn has_format(&self, format: &str) -> bool {
        self.entries.contains_key(format)
    }
}

/// Phase of a drag-and-drop gesture as seen by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// This cell started being dragged.
    Start,
    /// A drag entered this cell.
    Enter,
    /// A drag moved over this cell.
    Over,
    /// A drag left this cell.
    Leave,
    /// A drag was dropped on this cell.
    Drop,
    /// The drag this cell started has finished.
    End,
}

/// Drag-and-drop event.
#[derive(Debug, Clone)]
pub struct DragEvent {
    /// Base event data.
    pub base: EventBase,
    /// Phase of the gesture.
    pub phase: DragPhase,
    /// The payload of the drag.
    pub data_transfer: DataTransfer,
    /// For enter/leave: whether the element the pointer came from (enter) or
    /// moved to (leave) lies inside this cell.
    pub related_target_inside: bool,
}

impl DragEvent {
    /// Create a new drag event.
    pub fn new(phase: DragPhase, data_transfer: DataTransfer) -> Self {
        Self {
            base: EventBase::new(),
            phase,
            data_transfer,
            related_target_inside: false,
        }
    }
}

/// Events understood by a header cell.
#[derive(Debug, Clone)]
pub enum HeaderCellEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    /// The pointer previously captured by this cell was released.
    LostPointerCapture(PointerId),
    Click(ClickEvent),
    DoubleClick(ClickEvent),
    KeyPress(KeyPressEvent),
    FocusIn(FocusInEvent),
    Drag(DragEvent),
}

impl HeaderCellEvent {
    /// Base data of the wrapped event, if it has any.
    pub fn base(&self) -> Option<&EventBase> {
        match self {
            Self::PointerDown(e) | Self::PointerMove(e) => Some(&e.base),
            Self::Click(e) | Self::DoubleClick(e) => Some(&e.base),
            Self::KeyPress(e) => Some(&e.base),
            Self::FocusIn(e) => Some(&e.base),
            Self::Drag(e) => Some(&e.base),
            Self::LostPointerCapture(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_command() {
        assert!(KeyboardModifiers::CTRL.command());
        assert!(KeyboardModifiers::META.command());
        assert!(!KeyboardModifiers::SHIFT.command());
        assert!(KeyboardModifiers::NONE.none());
    }

    #[test]
    fn test_pointer_buttons() {
        let mut event = PointerEvent::mouse(PointerId(1), Point::ZERO, HitRegion::Cell);
        assert!(event.is_primary_only());
        assert!(event.is_button_pressed(MouseButton::Left));

        event.buttons = MouseButton::Left.mask() | MouseButton::Right.mask();
        assert!(!event.is_primary_only());

        event.buttons = MouseButton::Right.mask();
        assert!(!event.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn test_event_base_flags() {
        let mut base = EventBase::new();
        assert!(!base.is_default_prevented());
        assert!(!base.is_propagation_stopped());

        base.prevent_default();
        base.stop_propagation();
        base.accept();
        assert!(base.is_default_prevented());
        assert!(base.is_propagation_stopped());
        assert!(base.is_accepted());
    }

    #[test]
    fn test_data_transfer() {
        let mut data = DataTransfer::new();
        assert!(!data.has_format("grid-1"));
        data.set_data("grid-1", "name");
        assert_eq!(data.data("grid-1"), Some("name"));
        assert_eq!(data.data("grid-2"), None);
    }
}
