//! Plain text rendering of history trails.
//!
//! - `render_labels` lists one label per line, oldest first
//! - `render` adds index and age columns
//! - `render_steps` narrates a scripted run

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::history::SnapshotHistory;
use crate::script::Step;
use crate::util::{format_age, truncate};

const LABEL_WIDTH: usize = 48;

pub fn render_labels<S, C: Clock>(history: &SnapshotHistory<S, C>) -> String {
    let mut output = String::new();
    for snapshot in history {
        output.push_str(snapshot.label());
        output.push('\n');
    }
    output
}

pub fn render<S, C: Clock>(history: &SnapshotHistory<S, C>, now: DateTime<Utc>) -> String {
    if history.is_empty() {
        return String::from("No snapshots.\n");
    }

    let mut output = String::new();
    output.push_str(&format!("\n{:<4} {:>10}  {}\n", "#", "Age", "Snapshot"));
    output.push_str(&"-".repeat(LABEL_WIDTH + 16));
    output.push('\n');

    for (index, snapshot) in history.history().enumerate() {
        // snapshots stamped after `now` show as 0s
        let age = (now - snapshot.created_at()).to_std().unwrap_or_default();
        output.push_str(&format!(
            "{:<4} {:>10}  {}\n",
            index,
            format_age(age),
            truncate(snapshot.label(), LABEL_WIDTH)
        ));
    }

    output.push_str(&format!("\n{} snapshot(s)\n", history.len()));
    output
}

pub fn render_steps(steps: &[Step]) -> String {
    let mut output = String::new();

    for step in steps {
        let line = match step {
            Step::Set { state } => format!("Originator: state changed to: {state}"),
            Step::Backup { label } => format!("Caretaker: saved {label}"),
            Step::Undo { removed: Some(label) } => format!("Caretaker: rolled back {label}"),
            Step::Undo { removed: None } => String::from("Caretaker: nothing to undo"),
            Step::Restore { index, state } => {
                format!("Originator: restored snapshot #{index}, state is now: {state}")
            }
            Step::Oldest { label } => format!("Caretaker: oldest snapshot is {label}"),
            Step::History { labels } => {
                let mut listing = String::from("Caretaker: these are all current snapshots:");
                for label in labels {
                    listing.push_str("\n  ");
                    listing.push_str(label);
                }
                listing
            }
        };
        output.push_str(&line);
        output.push('\n');
    }

    output
}
