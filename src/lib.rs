//! Retrace: linear undo/redo history for a single piece of state
//!
//! Retrace wraps one logical value in a [`HistoryState`] container that
//! remembers every value it has held. Writing records a new entry, undo
//! and redo walk the timeline, and writing after an undo discards the
//! redo branch. It is meant to be embedded in a larger application's
//! state-management layer; values are treated as opaque and never
//! inspected.
//!
//! # Core Concepts
//!
//! - **History buffer**: an ordered, never-empty sequence of every value
//!   the state has held
//! - **Current index**: the position of the observable value within that
//!   buffer, always in bounds
//! - **Capability signaling**: undo/redo return `Option` values instead of
//!   failing, so availability is checked, not assumed
//!
//! # Example
//!
//! ```rust
//! use retrace::HistoryState;
//!
//! let mut counter = HistoryState::new(0);
//! counter.set_state(1);
//! counter.set_state(2);
//!
//! assert_eq!(*counter.state(), 2);
//! assert_eq!(counter.undo(), Some(&1));
//! assert_eq!(counter.redo(), Some(&2));
//!
//! // A write after undo drops the undone branch for good.
//! counter.undo();
//! counter.set_state(5);
//! assert_eq!(counter.history(), [0, 1, 5]);
//! ```
//!
//! Hosts whose state cell batches or defers updates should use the pure
//! transition methods ([`HistoryState::record`], [`HistoryState::undone`],
//! [`HistoryState::redone`]) so every queued update derives from the
//! latest applied state.

pub mod core;

// Re-export commonly used types
pub use core::HistoryState;
