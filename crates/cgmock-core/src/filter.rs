//! Allowlist predicate over function names.
//!
//! An empty allowlist accepts every name: a filter source that yields no
//! names is a no-op, not a reject-all.

use std::collections::BTreeSet;
use std::io::BufRead;

use crate::errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter {
    accepted: BTreeSet<String>,
}

impl NameFilter {
    #[must_use]
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Accept exactly `names`, or everything when `names` is empty.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from allowlist lines.
    ///
    /// Each line is trimmed of trailing whitespace; blank lines and lines
    /// starting with `#` are dropped, the rest are taken verbatim.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_names(lines.into_iter().filter_map(|line| {
            let line = line.as_ref().trim_end();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(line.to_string())
            }
        }))
    }

    /// Build from a line-oriented reader (a file or standard input).
    ///
    /// # Errors
    /// Returns [`CoreError::FilterSource`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CoreError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_lines(lines))
    }

    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        self.accepted.is_empty() || self.accepted.contains(name)
    }

    #[must_use]
    pub fn is_accept_all(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Number of explicitly accepted names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accepted.iter().map(String::as_str)
    }
}
