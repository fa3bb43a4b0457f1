//! Linear undo/redo history for a single piece of state.
//!
//! Provides a container that remembers every value a piece of state has
//! held, with navigation back and forth along that timeline.

use serde::{Deserialize, Serialize};

/// A single value of type `T` augmented with linear undo/redo history.
///
/// The container owns an ordered buffer of every value the state has held
/// and an index identifying the current one. Writing a new value truncates
/// any redo branch and appends; undo and redo move the index without
/// touching the buffer.
///
/// Two invariants hold across all high-level operations:
///
/// - the buffer is never empty (it is seeded with the initial value), and
/// - the index always identifies a valid buffer position.
///
/// Values are opaque to the container: they are never compared, inspected,
/// or deduplicated. Writing a value equal to the current one still appends
/// a new entry.
///
/// # Example
///
/// ```rust
/// use retrace::HistoryState;
///
/// let mut doc = HistoryState::new("draft one".to_string());
/// doc.set_state("draft two".to_string());
/// doc.set_state("final".to_string());
///
/// assert_eq!(doc.state(), "final");
/// assert_eq!(doc.undo(), Some(&"draft two".to_string()));
///
/// // Writing after undo discards the redo branch.
/// doc.set_state("final, revised".to_string());
/// assert!(!doc.can_redo());
/// assert_eq!(
///     doc.history(),
///     ["draft one", "draft two", "final, revised"]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryState<T> {
    entries: Vec<T>,
    index: usize,
}

impl<T> HistoryState<T> {
    /// Create a container holding `initial` with no past and no future.
    ///
    /// The buffer contains exactly the initial value and the index points
    /// at it, so neither undo nor redo is available.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::HistoryState;
    ///
    /// let counter = HistoryState::new(0);
    /// assert_eq!(*counter.state(), 0);
    /// assert_eq!(counter.len(), 1);
    /// assert!(!counter.can_undo());
    /// assert!(!counter.can_redo());
    /// ```
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Get the current value.
    ///
    /// Pure read with no side effects; always succeeds because the buffer
    /// is never empty. Repeated calls without an intervening write or
    /// navigation return the same value.
    pub fn state(&self) -> &T {
        &self.entries[self.index]
    }

    /// Write a new value, recording it in history.
    ///
    /// As one logical step this truncates the buffer to everything up to
    /// and including the current value, appends `value`, and advances the
    /// index to it. Any entries that were reachable via redo are
    /// permanently discarded. Cannot fail; accepts any value, including
    /// one equal to the current value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::HistoryState;
    ///
    /// let mut counter = HistoryState::new(0);
    /// counter.set_state(1);
    /// counter.set_state(2);
    /// counter.undo();
    ///
    /// // The entry `2` is dropped; `7` takes its place.
    /// counter.set_state(7);
    /// assert_eq!(counter.history(), [0, 1, 7]);
    /// assert!(!counter.can_redo());
    /// ```
    pub fn set_state(&mut self, value: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push(value);
        self.index += 1;
    }

    /// Step back to the previous value.
    ///
    /// Available only when the index is past the first entry. Returns the
    /// new current value, or `None` (leaving the container untouched) when
    /// there is nothing earlier to move to. The `Option` is the capability
    /// signal: check it rather than assuming the step happened.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::HistoryState;
    ///
    /// let mut counter = HistoryState::new(0);
    /// counter.set_state(1);
    ///
    /// assert_eq!(counter.undo(), Some(&0));
    /// assert_eq!(counter.undo(), None);
    /// ```
    pub fn undo(&mut self) -> Option<&T> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward to the next value.
    ///
    /// Available only when the index is before the last entry, i.e. after
    /// at least one undo with no intervening write. Returns the new
    /// current value, or `None` when already at the newest entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::HistoryState;
    ///
    /// let mut counter = HistoryState::new(0);
    /// counter.set_state(1);
    /// counter.undo();
    ///
    /// assert_eq!(counter.redo(), Some(&1));
    /// assert_eq!(counter.redo(), None);
    /// ```
    pub fn redo(&mut self) -> Option<&T> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// Whether a step back is available.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether a step forward is available.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Get the full history buffer, oldest first.
    ///
    /// Intended for diagnostics and advanced use such as rendering a
    /// history list. The current value sits at [`index`](Self::index).
    pub fn history(&self) -> &[T] {
        &self.entries
    }

    /// Get the position of the current value within the buffer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries in the buffer. At least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Replace the history buffer wholesale.
    ///
    /// Escape hatch for callers manipulating history outside the normal
    /// `set_state`/`undo`/`redo` flow. Unchecked: the caller is
    /// responsible for keeping the buffer non-empty and the current index
    /// in bounds. The high-level operations assume both.
    pub fn set_history(&mut self, entries: Vec<T>) {
        self.entries = entries;
    }

    /// Assign the current index directly.
    ///
    /// Escape hatch, unchecked like [`set_history`](Self::set_history):
    /// passing an index outside the buffer is a caller bug the container
    /// neither detects nor reports.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl<T: Clone> HistoryState<T> {
    /// Record a value, returning a new container.
    ///
    /// Pure counterpart of [`set_state`](Self::set_state): the prior
    /// container is untouched. Hosts whose state cell batches or defers
    /// updates should apply history changes through these pure transitions
    /// (`|prev| prev.record(v)`), so that several updates queued in the
    /// same turn each derive from the latest applied state instead of a
    /// stale snapshot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::HistoryState;
    ///
    /// let base = HistoryState::new(0);
    /// let next = base.record(1);
    ///
    /// assert_eq!(*base.state(), 0); // original unchanged
    /// assert_eq!(*next.state(), 1);
    /// assert_eq!(next.history(), [0, 1]);
    /// ```
    pub fn record(&self, value: T) -> Self {
        let mut entries = self.entries[..=self.index].to_vec();
        entries.push(value);
        Self {
            entries,
            index: self.index + 1,
        }
    }

    /// Pure counterpart of [`undo`](Self::undo).
    ///
    /// Returns the container as it would be after one step back, or `None`
    /// when no step back is available.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::HistoryState;
    ///
    /// let two = HistoryState::new(0).record(1);
    /// let one = two.undone().unwrap();
    ///
    /// assert_eq!(*one.state(), 0);
    /// assert!(one.undone().is_none());
    /// ```
    pub fn undone(&self) -> Option<Self> {
        if !self.can_undo() {
            return None;
        }
        Some(Self {
            entries: self.entries.clone(),
            index: self.index - 1,
        })
    }

    /// Pure counterpart of [`redo`](Self::redo).
    ///
    /// Returns the container as it would be after one step forward, or
    /// `None` when already at the newest entry.
    pub fn redone(&self) -> Option<Self> {
        if !self.can_redo() {
            return None;
        }
        Some(Self {
            entries: self.entries.clone(),
            index: self.index + 1,
        })
    }
}

impl<T: Default> Default for HistoryState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for HistoryState<T> {
    fn from(initial: T) -> Self {
        Self::new(initial)
    }
}
