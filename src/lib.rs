//! keepsake: an in-memory snapshot history for a single mutable subject.
//!
//! A [`SnapshotHistory`] records copies of a subject's state, oldest first.
//! [`Caretaker`] binds one history to the subject it tracks. Undo removes
//! the newest snapshot; restoring the subject to any snapshot is a separate
//! step that leaves the history alone.
//!
//! ```
//! use keepsake::{Caretaker, Originator};
//!
//! let mut caretaker = Caretaker::new(Originator::new("A"));
//! caretaker.backup();
//! caretaker.subject_mut().handle("B");
//! caretaker.backup();
//!
//! assert_eq!(caretaker.undo().unwrap().state(), "B");
//! caretaker.restore_oldest().unwrap();
//! assert_eq!(caretaker.subject().current(), "A");
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod demo;
pub mod error;
pub mod history;
pub mod report;
pub mod script;
pub mod snapshot;
pub mod subject;
pub mod util;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::HistoryError;
pub use history::{Caretaker, SnapshotHistory};
pub use snapshot::{LabelStyle, Snapshot};
pub use subject::{Originator, Subject};
