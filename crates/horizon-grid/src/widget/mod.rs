//! Widget building blocks: input events, focus, accessibility and styling,
//! plus the widgets built from them.

pub mod accessibility;
pub mod events;
pub mod focus;
pub mod style;
pub mod widgets;

pub use accessibility::{AriaSort, HeaderCellAria};
pub use events::{
    ClickEvent, DataTransfer, DragEvent, DragPhase, EventBase, FocusInEvent, FocusTarget,
    HeaderCellEvent, HitRegion, Key, KeyPressEvent, KeyboardModifiers, MouseButton, PointerEvent,
    PointerId, PointerType,
};
pub use focus::{FocusDelegate, RovingFocus, RovingTabIndex, TabIndex};
pub use style::{CellVisualState, ClassList, HeaderCellStyle};
