//! Per-lint-call document model.
//!
//! A [`Document`] is the immutable snapshot a lint plugin works against: the
//! file-system path identifying it plus its full text. Line access is
//! rope-based and line slices keep their terminators, matching the shape the
//! host's document store hands out.

use ropey::Rope;
use std::path::{Path, PathBuf};

/// An immutable document snapshot handed to lint plugins.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: Rope,
}

impl Document {
    /// Create a document from its path and full source text.
    pub fn new(path: impl Into<PathBuf>, source: &str) -> Self {
        Self {
            path: path.into(),
            text: Rope::from_str(source),
        }
    }

    /// The file-system path identifying this document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full source text.
    pub fn source(&self) -> String {
        self.text.to_string()
    }

    /// Number of lines. An empty document still has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    /// The line at `index` (0-based), terminator included.
    ///
    /// Returns `None` past the last line.
    pub fn line(&self, index: usize) -> Option<String> {
        if index < self.text.len_lines() {
            Some(self.text.line(index).to_string())
        } else {
            None
        }
    }

    /// All lines in order, terminators included.
    pub fn lines(&self) -> Vec<String> {
        self.text.lines().map(|line| line.to_string()).collect()
    }
}
