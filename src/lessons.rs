//! End-to-end pipelines built from the library modules.
//!
//! Each pipeline takes its input text (or data) plus a [`SaplingConfig`] and
//! returns a report that is both `Serialize` (for JSON output) and
//! `Display` (for the console). Every text pipeline exposes the input it
//! runs on by default as a `DEFAULT_*` constant.
//!
//! [`SaplingConfig`]: crate::config::SaplingConfig

pub mod disease;
pub mod lemmatization;
pub mod ner;
pub mod reviews;
pub mod sentiment;
pub mod tokens;
pub mod topics;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ranked `(item, count)` pairs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub top: Vec<(String, usize)>,
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .top
            .iter()
            .map(|(item, count)| format!("('{item}', {count})"))
            .collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

/// Render strings as a bracketed, quoted list: `['a', 'b']`.
pub(crate) fn quoted_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}
