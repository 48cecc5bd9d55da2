pub mod table;
pub mod json;

use chrono::Utc;
use serde::Serialize;

use crate::clock::Clock;
use crate::config::Config;
use crate::history::{Caretaker, SnapshotHistory};
use crate::script::Step;
use crate::subject::Originator;

/// Prints the outcome of a scripted run: step narration and the final
/// history, or one JSON document.
pub fn print_run<C: Clock>(steps: &[Step], caretaker: &Caretaker<Originator, C>, config: &Config) {
    if config.json {
        println!("{}", json::render_run(steps, caretaker));
    } else {
        print!("{}", table::render_steps(steps));
        println!("\nsubject: {}", caretaker.subject().current());
        print!("{}", table::render(caretaker.history(), Utc::now()));
    }
}

/// Prints only the final history, as a table or JSON.
pub fn print_history<S: Serialize, C: Clock>(history: &SnapshotHistory<S, C>, config: &Config) {
    if config.json {
        println!("{}", json::render_history(history));
    } else {
        print!("{}", table::render(history, Utc::now()));
    }
}
