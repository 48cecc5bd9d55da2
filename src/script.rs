//! Scripted runs against a string subject.
//!
//! Each operation maps onto one history call. Running stops at the first
//! failing operation.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::error::ScriptError;
use crate::history::Caretaker;
use crate::subject::Originator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Set(String),
    Backup,
    Undo,
    Restore(usize),
    Oldest,
    History,
}

impl FromStr for Op {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match (name, arg) {
            ("set", Some(value)) => Ok(Op::Set(value.to_string())),
            ("restore", Some(index)) => index
                .trim()
                .parse()
                .map(Op::Restore)
                .map_err(|_| ScriptError::InvalidIndex(index.to_string())),
            ("set" | "restore", None) => Err(ScriptError::MissingArgument(name.to_string())),
            ("backup", None) => Ok(Op::Backup),
            ("undo", None) => Ok(Op::Undo),
            ("oldest", None) => Ok(Op::Oldest),
            ("history", None) => Ok(Op::History),
            _ => Err(ScriptError::UnknownOp(s.to_string())),
        }
    }
}

/// Parses one operation per line. Blank lines and `#` comments are skipped.
pub fn parse_script(contents: &str) -> Result<Vec<Op>, ScriptError> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::parse)
        .collect()
}

pub fn read_script(path: &Path) -> Result<Vec<Op>, ScriptError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&contents)
}

pub fn parse_ops<I, T>(ops: I) -> Result<Vec<Op>, ScriptError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    ops.into_iter().map(|op| op.as_ref().parse()).collect()
}

/// What a single operation did, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Set { state: String },
    Backup { label: String },
    Undo { removed: Option<String> },
    Restore { index: usize, state: String },
    Oldest { label: String },
    History { labels: Vec<String> },
}

pub fn run<C: Clock>(
    caretaker: &mut Caretaker<Originator, C>,
    ops: &[Op],
) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::with_capacity(ops.len());

    for op in ops {
        debug!(?op, "applying");
        let step = match op {
            Op::Set(value) => {
                caretaker.subject_mut().handle(value.as_str());
                Step::Set { state: value.clone() }
            }
            Op::Backup => Step::Backup {
                label: caretaker.backup().label().to_string(),
            },
            Op::Undo => Step::Undo {
                removed: caretaker.undo().map(|s| s.label().to_string()),
            },
            Op::Restore(index) => Step::Restore {
                index: *index,
                state: caretaker.restore_to(*index)?.state().clone(),
            },
            Op::Oldest => Step::Oldest {
                label: caretaker.oldest()?.label().to_string(),
            },
            Op::History => Step::History {
                labels: caretaker.history().history().map(|s| s.label().to_string()).collect(),
            },
        };
        steps.push(step);
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HistoryError;

    #[test]
    fn parses_every_op() {
        let ops = parse_ops(["set:hello world", "backup", "undo", "restore: 2", "oldest", "history"]).unwrap();
        assert_eq!(
            ops,
            [
                Op::Set("hello world".to_string()),
                Op::Backup,
                Op::Undo,
                Op::Restore(2),
                Op::Oldest,
                Op::History,
            ]
        );
    }

    #[test]
    fn set_keeps_colons_in_value() {
        assert_eq!("set:a:b".parse::<Op>().unwrap(), Op::Set("a:b".to_string()));
        assert_eq!("set:".parse::<Op>().unwrap(), Op::Set(String::new()));
    }

    #[test]
    fn rejects_bad_ops() {
        assert!(matches!("redo".parse::<Op>(), Err(ScriptError::UnknownOp(_))));
        assert!(matches!("backup:now".parse::<Op>(), Err(ScriptError::UnknownOp(_))));
        assert!(matches!("restore".parse::<Op>(), Err(ScriptError::MissingArgument(_))));
        assert!(matches!("restore:x".parse::<Op>(), Err(ScriptError::InvalidIndex(_))));
    }

    #[test]
    fn script_skips_comments_and_blanks() {
        let ops = parse_script("# setup\nbackup\n\n  set:B  \nbackup\n").unwrap();
        assert_eq!(ops, [Op::Backup, Op::Set("B".to_string()), Op::Backup]);
    }

    #[test]
    fn reads_script_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.txt");
        std::fs::write(&path, "backup\nundo\n").unwrap();
        assert_eq!(read_script(&path).unwrap(), [Op::Backup, Op::Undo]);

        let missing = read_script(&dir.path().join("nope.txt"));
        assert!(matches!(missing, Err(ScriptError::Read { .. })));
    }

    #[test]
    fn runs_abc_scenario() {
        let mut caretaker = Caretaker::new(Originator::new("A"));
        let ops = parse_ops(["backup", "set:B", "backup", "set:C", "backup", "undo", "oldest"]).unwrap();
        let steps = run(&mut caretaker, &ops).unwrap();

        assert_eq!(steps.len(), 7);
        let Step::Undo { removed: Some(removed) } = &steps[5] else { panic!("expected undo") };
        assert!(removed.ends_with("(C...)"));
        let Step::Oldest { label } = &steps[6] else { panic!("expected oldest") };
        assert!(label.ends_with("(A...)"));

        let states: Vec<_> = caretaker.history().history().map(|s| s.state().as_str()).collect();
        assert_eq!(states, ["A", "B"]);
    }

    #[test]
    fn undo_on_empty_reports_nothing_removed() {
        let mut caretaker = Caretaker::new(Originator::new("A"));
        let steps = run(&mut caretaker, &[Op::Undo]).unwrap();
        assert_eq!(steps, [Step::Undo { removed: None }]);
    }

    #[test]
    fn stops_at_failing_op() {
        let mut caretaker = Caretaker::new(Originator::new("A"));
        let err = run(&mut caretaker, &[Op::Oldest, Op::Backup]).unwrap_err();
        assert!(matches!(err, ScriptError::History(HistoryError::EmptyHistory)));
        assert!(caretaker.history().is_empty());
    }

    #[test]
    fn restore_changes_subject_only() {
        let mut caretaker = Caretaker::new(Originator::new("A"));
        let ops = [Op::Backup, Op::Set("B".to_string()), Op::Restore(0)];
        let steps = run(&mut caretaker, &ops).unwrap();

        assert_eq!(steps[2], Step::Restore { index: 0, state: "A".to_string() });
        assert_eq!(caretaker.subject().current(), "A");
        assert_eq!(caretaker.history().len(), 1);
    }
}
