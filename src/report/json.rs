//! JSON output for history trails and scripted runs.

use serde::Serialize;

use crate::clock::Clock;
use crate::history::{Caretaker, SnapshotHistory};
use crate::script::Step;
use crate::snapshot::Snapshot;
use crate::subject::Originator;

#[derive(Serialize)]
struct HistoryView<'a, S> {
    len: usize,
    snapshots: Vec<&'a Snapshot<S>>,
}

#[derive(Serialize)]
struct RunView<'a> {
    steps: &'a [Step],
    subject: &'a str,
    history: HistoryView<'a, String>,
}

fn view<S, C: Clock>(history: &SnapshotHistory<S, C>) -> HistoryView<'_, S> {
    HistoryView {
        len: history.len(),
        snapshots: history.history().collect(),
    }
}

pub fn render_history<S: Serialize, C: Clock>(history: &SnapshotHistory<S, C>) -> String {
    serde_json::to_string_pretty(&view(history)).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

pub fn render_run<C: Clock>(steps: &[Step], caretaker: &Caretaker<Originator, C>) -> String {
    let run = RunView {
        steps,
        subject: caretaker.subject().current(),
        history: view(caretaker.history()),
    };
    serde_json::to_string_pretty(&run).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
