use std::fmt;
use std::ops::{Index, Range};

use serde::{Deserialize, Serialize};

/// An ordered, immutable sequence of text lines.
///
/// Positions are 0-indexed. Lines never contain their terminating newline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineSequence(Vec<String>);

impl LineSequence {
    /// Create a sequence from already-split lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    /// Split raw text into lines.
    ///
    /// `\n`, `\r\n` and a bare `\r` each terminate a line. A final line
    /// terminator does not produce a trailing empty line, so `"a\nb\n"` and
    /// `"a\nb"` split identically.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;
        while let Some(end) = rest.find(['\n', '\r']) {
            lines.push(rest[..end].to_owned());
            let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[end + terminator..];
        }
        if !rest.is_empty() {
            lines.push(rest.to_owned());
        }
        Self(lines)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence has no lines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// All lines as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The lines in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> &[String] {
        &self.0[range]
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Index<usize> for LineSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl From<Vec<String>> for LineSequence {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}

impl<S: Into<String>> FromIterator<S> for LineSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LineSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.0 {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
