use std::fmt::Display;

use tracing::info;

use super::SnapshotHistory;
use crate::clock::{Clock, SystemClock};
use crate::error::HistoryError;
use crate::snapshot::Snapshot;
use crate::subject::Subject;

/// A history bound to the one subject it tracks.
///
/// The caretaker owns the subject so `backup` needs no argument. It never
/// looks inside the state; it only moves snapshots around.
pub struct Caretaker<T: Subject, C: Clock = SystemClock> {
    subject: T,
    history: SnapshotHistory<T::State, C>,
}

impl<T: Subject> Caretaker<T> {
    pub fn new(subject: T) -> Self {
        Caretaker::with_history(subject, SnapshotHistory::new())
    }
}

impl<T: Subject, C: Clock> Caretaker<T, C> {
    pub fn with_history(subject: T, history: SnapshotHistory<T::State, C>) -> Self {
        Caretaker { subject, history }
    }

    pub fn subject(&self) -> &T {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut T {
        &mut self.subject
    }

    pub fn history(&self) -> &SnapshotHistory<T::State, C> {
        &self.history
    }

    pub fn into_parts(self) -> (T, SnapshotHistory<T::State, C>) {
        (self.subject, self.history)
    }

    /// Captures the subject's current state.
    pub fn backup(&mut self) -> &Snapshot<T::State>
    where
        T::State: Display,
    {
        self.history.capture(&self.subject)
    }

    pub fn undo(&mut self) -> Option<Snapshot<T::State>> {
        self.history.undo()
    }

    pub fn try_undo(&mut self) -> Result<Snapshot<T::State>, HistoryError> {
        self.history.try_undo()
    }

    pub fn oldest(&self) -> Result<&Snapshot<T::State>, HistoryError> {
        self.history.oldest()
    }

    /// Restores the subject to the snapshot at `index` (0 = oldest).
    /// The history itself is unchanged.
    pub fn restore_to(&mut self, index: usize) -> Result<&Snapshot<T::State>, HistoryError> {
        let len = self.history.len();
        let snapshot = self
            .history
            .get(index)
            .ok_or(HistoryError::OutOfRange { index, len })?;

        info!(index, label = snapshot.label(), "restoring subject");
        self.subject.restore(snapshot);
        Ok(snapshot)
    }

    pub fn restore_oldest(&mut self) -> Result<&Snapshot<T::State>, HistoryError> {
        if self.history.is_empty() {
            return Err(HistoryError::EmptyHistory);
        }
        self.restore_to(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::Originator;

    fn caretaker_with(states: &[&str]) -> Caretaker<Originator> {
        let mut caretaker = Caretaker::new(Originator::new(states[0]));
        for state in states {
            caretaker.subject_mut().handle(*state);
            caretaker.backup();
        }
        caretaker
    }

    #[test]
    fn backup_captures_bound_subject() {
        let caretaker = caretaker_with(&["A", "B", "C"]);
        let states: Vec<_> = caretaker.history().history().map(|s| s.state().clone()).collect();
        assert_eq!(states, ["A", "B", "C"]);
    }

    #[test]
    fn restore_to_keeps_history() {
        let mut caretaker = caretaker_with(&["A", "B", "C"]);
        caretaker.subject_mut().handle("D");

        let restored = caretaker.restore_to(1).unwrap().state().clone();
        assert_eq!(restored, "B");
        assert_eq!(caretaker.subject().current(), "B");
        assert_eq!(caretaker.history().len(), 3);
    }

    #[test]
    fn restore_to_out_of_range() {
        let mut caretaker = caretaker_with(&["A"]);
        let err = caretaker.restore_to(4).unwrap_err();
        assert_eq!(err, HistoryError::OutOfRange { index: 4, len: 1 });
        assert_eq!(caretaker.subject().current(), "A");
    }

    #[test]
    fn restore_oldest_on_empty() {
        let mut caretaker = Caretaker::new(Originator::new("x"));
        assert_eq!(caretaker.restore_oldest().unwrap_err(), HistoryError::EmptyHistory);
    }

    #[test]
    fn restore_then_backup_tracks_restored_state() {
        let mut caretaker = caretaker_with(&["A", "B"]);
        caretaker.restore_oldest().unwrap();
        caretaker.backup();

        let newest = caretaker.history().latest().unwrap();
        assert_eq!(newest.state(), "A");
        assert_eq!(caretaker.history().len(), 3);
    }
}
