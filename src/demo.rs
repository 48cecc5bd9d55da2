//! The classic caretaker walkthrough, narrated.
//!
//! Three rounds of backup-then-change, two undos, four more rounds, then the
//! originator is put back into its very first state and backed up again.

use std::io::{self, Write};

use crate::clock::Clock;
use crate::history::{Caretaker, SnapshotHistory};
use crate::report;
use crate::subject::Originator;

pub const INITIAL_STATE: &str = "this is the beginning";

/// States the originator moves through, in order.
const WORK: &[&str] = &[
    "qWfLpZrTbXyKcNdMhVgJsAeUoIiRtY",
    "mKdPsWqLzXvBnCtYhGfJrEaUiOpLkM",
    "ZxCvBnMaSdFgHjKlQwErTyUiOpLkJh",
    "pOiUyTrEwQaSdFgHjKlMnBvCxZqWeR",
    "tRfVgBhYnUjMiKoLpQaZwSxEdCrFvT",
    "lKjHgFdSaPoIuYtReWqMnBvCxZaSdF",
    "yHnUjMiKoLpQaZwSxEdCrFvTgBhYnU",
    "bVcXzAsDfGhJkLpOiUyTrEwQmNbVcX",
];

pub fn run<W: Write, C: Clock>(
    out: &mut W,
    history: SnapshotHistory<String, C>,
) -> io::Result<Caretaker<Originator, C>> {
    let mut work = WORK.iter().cycle();

    writeln!(out, "Originator: my initial state is: {INITIAL_STATE}")?;
    let mut caretaker = Caretaker::with_history(Originator::new(INITIAL_STATE), history);

    for _ in 0..3 {
        backup_and_work(out, &mut caretaker, &mut work)?;
    }

    writeln!(out)?;
    show_history(out, &caretaker)?;

    writeln!(out, "and now one step back!")?;
    undo(out, &mut caretaker)?;

    writeln!(out, "and another one!")?;
    undo(out, &mut caretaker)?;

    writeln!(out, "adding a few more")?;
    for _ in 0..4 {
        backup_and_work(out, &mut caretaker, &mut work)?;
    }

    writeln!(out, "and now back to the first")?;
    match caretaker.restore_oldest() {
        Ok(snapshot) => {
            let state = snapshot.state().clone();
            writeln!(out, "Originator: state changed to: {state}")?;
        }
        Err(e) => writeln!(out, "Caretaker: cannot restore: {e}")?,
    }
    work_once(out, &mut caretaker, &mut work)?;
    backup(out, &mut caretaker)?;

    show_history(out, &caretaker)?;
    Ok(caretaker)
}

fn backup<W: Write, C: Clock>(out: &mut W, caretaker: &mut Caretaker<Originator, C>) -> io::Result<()> {
    writeln!(out, "Caretaker: saving originator state ...")?;
    caretaker.backup();
    Ok(())
}

fn work_once<'a, W: Write, C: Clock>(
    out: &mut W,
    caretaker: &mut Caretaker<Originator, C>,
    work: &mut impl Iterator<Item = &'a &'static str>,
) -> io::Result<()> {
    let originator = caretaker.subject_mut();
    writeln!(out, "Originator: doing work with state \"{}\"", originator.current())?;
    if let Some(next) = work.next() {
        originator.handle(*next);
    }
    writeln!(out, "Originator: state changed to: {}", originator.current())
}

fn backup_and_work<'a, W: Write, C: Clock>(
    out: &mut W,
    caretaker: &mut Caretaker<Originator, C>,
    work: &mut impl Iterator<Item = &'a &'static str>,
) -> io::Result<()> {
    backup(out, caretaker)?;
    work_once(out, caretaker, work)
}

fn undo<W: Write, C: Clock>(out: &mut W, caretaker: &mut Caretaker<Originator, C>) -> io::Result<()> {
    match caretaker.undo() {
        Some(snapshot) => writeln!(out, "Caretaker: rolling back state: {}", snapshot.label()),
        None => writeln!(out, "Caretaker: nothing to undo"),
    }
}

fn show_history<W: Write, C: Clock>(out: &mut W, caretaker: &Caretaker<Originator, C>) -> io::Result<()> {
    writeln!(out, "Caretaker: these are all current snapshots:")?;
    write!(out, "{}", report::table::render_labels(caretaker.history()))
}
