//! Snapshot history.
//!
//! Keeps an ordered log of snapshots for one subject:
//! - index 0 is the oldest snapshot, the last index the newest
//! - capture appends, undo removes from the end
//! - identical states are kept as separate entries
//!
//! Undo only drops the newest entry. Putting the subject back into an older
//! state is a separate, explicit `restore`.

pub mod caretaker;

use std::fmt::Display;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::HistoryError;
use crate::snapshot::{LabelStyle, Snapshot};
use crate::subject::Subject;

pub use caretaker::Caretaker;

#[derive(Debug, Clone)]
pub struct SnapshotHistory<S, C: Clock = SystemClock> {
    snapshots: Vec<Snapshot<S>>,
    clock: C,
    style: LabelStyle,
}

impl<S> SnapshotHistory<S> {
    pub fn new() -> Self {
        SnapshotHistory::with_clock(SystemClock)
    }
}

impl<S> Default for SnapshotHistory<S> {
    fn default() -> Self {
        SnapshotHistory::new()
    }
}

impl<S, C: Clock> SnapshotHistory<S, C> {
    pub fn with_clock(clock: C) -> Self {
        SnapshotHistory {
            snapshots: Vec::new(),
            clock,
            style: LabelStyle::default(),
        }
    }

    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Copies the subject's current state into a new snapshot and appends it.
    ///
    /// Timestamps never go backwards within one history: if the clock reads
    /// earlier than the newest snapshot, the newest snapshot's time is reused.
    pub fn capture<T>(&mut self, subject: &T) -> &Snapshot<S>
    where
        T: Subject<State = S> + ?Sized,
        S: Display,
    {
        let state = subject.state();
        let now = self.clock.now();
        let created_at = match self.snapshots.last() {
            Some(newest) if newest.created_at() > now => newest.created_at(),
            _ => now,
        };

        let label = self.style.label(&state, created_at);
        debug!(index = self.snapshots.len(), %label, "captured snapshot");

        self.snapshots.push(Snapshot::new(state, created_at, label));
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Removes and returns the newest snapshot, or `None` when there is
    /// nothing to undo. The subject is not touched.
    pub fn undo(&mut self) -> Option<Snapshot<S>> {
        let popped = self.snapshots.pop();
        match &popped {
            Some(snapshot) => debug!(label = snapshot.label(), remaining = self.snapshots.len(), "undo"),
            None => debug!("undo on empty history, nothing to do"),
        }
        popped
    }

    /// Like [`undo`](Self::undo), but an empty history is an error.
    pub fn try_undo(&mut self) -> Result<Snapshot<S>, HistoryError> {
        self.undo().ok_or(HistoryError::NothingToUndo)
    }

    pub fn oldest(&self) -> Result<&Snapshot<S>, HistoryError> {
        self.snapshots.first().ok_or(HistoryError::EmptyHistory)
    }

    pub fn latest(&self) -> Option<&Snapshot<S>> {
        self.snapshots.last()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot<S>> {
        self.snapshots.get(index)
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> std::slice::Iter<'_, Snapshot<S>> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<'a, S, C: Clock> IntoIterator for &'a SnapshotHistory<S, C> {
    type Item = &'a Snapshot<S>;
    type IntoIter = std::slice::Iter<'a, Snapshot<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.history()
    }
}
