//! Core history container types.
//!
//! This module contains the pure functional core of the crate: the
//! [`HistoryState`] container and its navigation logic. All state changes
//! are either `&mut self` methods on an exclusively owned container or
//! pure `(prior) -> next` transitions, following the "pure core,
//! imperative shell" philosophy.

mod history;

pub use history::HistoryState;
