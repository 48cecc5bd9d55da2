//! The tracked side of the pattern: anything whose state can be read out and
//! written back.

use tracing::debug;

use crate::snapshot::Snapshot;

pub trait Subject {
    type State: Clone;

    /// A copy of the current state. Snapshots keep this value, so it must not
    /// share mutable storage with the subject.
    fn state(&self) -> Self::State;

    fn set_state(&mut self, state: Self::State);

    /// Puts the subject back into the state stored in `snapshot`.
    ///
    /// History is untouched; capture again if the restored state should
    /// become a tracked point of its own.
    fn restore(&mut self, snapshot: &Snapshot<Self::State>) {
        self.set_state(snapshot.state().clone());
    }
}

/// A subject holding a single string, as used by the demo and `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new(state: impl Into<String>) -> Self {
        Originator { state: state.into() }
    }

    pub fn current(&self) -> &str {
        &self.state
    }

    /// Does some work that leaves the originator in `next`.
    pub fn handle(&mut self, next: impl Into<String>) {
        let next = next.into();
        debug!(from = %self.state, to = %next, "originator state changed");
        self.state = next;
    }
}

impl Subject for Originator {
    type State = String;

    fn state(&self) -> String {
        self.state.clone()
    }

    fn set_state(&mut self, state: String) {
        self.state = state;
    }
}
