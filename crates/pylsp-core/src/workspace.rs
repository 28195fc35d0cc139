//! Workspace state shared across lint invocations.

use crate::document::Document;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The open-documents workspace a host serves plugins from.
#[derive(Debug, Default)]
pub struct Workspace {
    root: PathBuf,
    documents: HashMap<PathBuf, Document>,
}

impl Workspace {
    /// Create a workspace rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            documents: HashMap::new(),
        }
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Insert or replace a document, keyed by its path.
    pub fn put_document(&mut self, document: Document) {
        self.documents.insert(document.path().to_path_buf(), document);
    }

    /// Look up a document by path.
    pub fn document(&self, path: &Path) -> Option<&Document> {
        self.documents.get(path)
    }

    /// Open a named progress scope. The scope reports until dropped.
    pub fn report_progress(&self, title: &str) -> ProgressScope {
        ProgressScope::begin(title)
    }
}

/// An RAII progress-reporting scope; reports completion when dropped.
#[derive(Debug)]
pub struct ProgressScope {
    title: String,
}

impl ProgressScope {
    fn begin(title: &str) -> Self {
        log::debug!("progress begin: {}", title);
        Self {
            title: title.to_string(),
        }
    }

    /// The title this scope was opened with.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Drop for ProgressScope {
    fn drop(&mut self) {
        log::debug!("progress end: {}", self.title);
    }
}
