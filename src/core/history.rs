//! Linear undo/redo log of visited states.
//!
//! The log is a single growable sequence with a cursor, not a pair of
//! stacks: recording a state while the cursor sits behind the end drops
//! everything past the cursor first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One slot of the log.
///
/// `recorded_at` is informational; undo and redo only look at `state`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Name of the state held in this slot
    pub state: String,
    /// When the slot was written
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: &str) -> Self {
        Self {
            state: state.to_string(),
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered history of state names plus a cursor into it.
///
/// `pointer()` is always in `0..=len()`. When it equals `len()` the log is
/// at its live edge and there is nothing to redo.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::History;
///
/// let mut history = History::new();
/// history.record("normal");
/// history.record("busy");
/// assert_eq!(history.pointer(), 2);
///
/// // Leaving "hungry": the live state is snapshotted so redo can return to it.
/// assert_eq!(history.step_back("hungry").as_deref(), Some("busy"));
/// assert_eq!(history.states().collect::<Vec<_>>(), vec!["normal", "busy", "hungry"]);
///
/// assert_eq!(history.step_back("busy").as_deref(), Some("normal"));
/// assert_eq!(history.step_forward().as_deref(), Some("busy"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    pointer: usize,
}

impl History {
    /// Create an empty history with the cursor at zero.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pointer: 0,
        }
    }

    /// Record the state being left.
    ///
    /// Any redo tail past the cursor is discarded before the state is
    /// appended, then the cursor moves to the new live edge.
    pub fn record(&mut self, state: &str) {
        self.entries.truncate(self.pointer);
        self.entries.push(HistoryEntry::now(state));
        self.pointer += 1;
    }

    /// Move the cursor one slot back, returning the state found there.
    ///
    /// `current` is the state being left. At the live edge it is appended
    /// first so a later [`step_forward`](Self::step_forward) can reach it.
    /// Returns `None` when the cursor is already at zero.
    pub fn step_back(&mut self, current: &str) -> Option<String> {
        if self.pointer == 0 {
            return None;
        }
        if self.pointer == self.entries.len() {
            self.entries.push(HistoryEntry::now(current));
        }
        self.pointer -= 1;
        Some(self.entries[self.pointer].state.clone())
    }

    /// Move the cursor one slot forward, returning the state found there.
    ///
    /// Only succeeds while `pointer < len - 1`. The bound is one tighter
    /// than the slot count.
    pub fn step_forward(&mut self) -> Option<String> {
        if !self.can_step_forward() {
            return None;
        }
        self.pointer += 1;
        Some(self.entries[self.pointer].state.clone())
    }

    pub fn can_step_back(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_step_forward(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Drop every entry and return the cursor to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pointer = 0;
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// State names in slot order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.state.as_str())
    }

    /// Time between the first and last recorded slots.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.recorded_at.signed_duration_since(first.recorded_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
