use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::util;

pub const DEFAULT_PREVIEW_LEN: usize = 9;
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An immutable capture of a subject's state.
///
/// The state is an owned copy taken at capture time, so later changes to the
/// subject never reach it. `label` is for display only; two snapshots with the
/// same label are still distinct entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<S> {
    state: S,
    created_at: DateTime<Utc>,
    label: String,
}

impl<S> Snapshot<S> {
    pub(crate) fn new(state: S, created_at: DateTime<Utc>, label: String) -> Self {
        Snapshot { state, created_at, label }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S> fmt::Display for Snapshot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// How snapshot labels are built: `<timestamp> / (<preview>...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStyle {
    pub preview_len: usize,
    pub time_format: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            preview_len: DEFAULT_PREVIEW_LEN,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl LabelStyle {
    pub fn label<S: fmt::Display + ?Sized>(&self, state: &S, created_at: DateTime<Utc>) -> String {
        let mut stamp = String::new();
        // chrono reports a bad format string as fmt::Error rather than panicking here
        if write!(stamp, "{}", created_at.format(&self.time_format)).is_err() {
            stamp = created_at.to_rfc3339();
        }

        let preview = util::preview(&state.to_string(), self.preview_len);
        format!("{stamp} / ({preview}...)")
    }
}
