//! Core systems for Canopy Picker.
//!
//! This crate provides the foundational plumbing shared by the Canopy Picker
//! engine:
//!
//! - **Signal/Slot System**: Type-safe change notification between the
//!   selection engine and its presentation-layer collaborators
//!
//! The picker engine is a synchronous, single-threaded state machine, so
//! signals here invoke their connected slots directly on the emitting thread.
//! Signals are still `Send + Sync` and may be shared across threads; callers
//! that need deferred delivery can queue from inside a slot.
//!
//! # Signal/Slot Example
//!
//! ```
//! use canopy_picker_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
