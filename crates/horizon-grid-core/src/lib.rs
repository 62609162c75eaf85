//! Core systems for Horizon Grid.
//!
//! This crate provides the foundational pieces shared by the Horizon Grid
//! widgets:
//!
//! - **Signal/Slot System**: Type-safe notifications from widgets to their owners
//! - **Logging**: `tracing` targets, span names and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_grid_core::Signal;
//!
//! let sort_changed = Signal::<Vec<String>>::new();
//!
//! let conn_id = sort_changed.connect(|keys| {
//!     println!("Sorted by: {:?}", keys);
//! });
//!
//! sort_changed.emit(vec!["name".to_string()]);
//! sort_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
