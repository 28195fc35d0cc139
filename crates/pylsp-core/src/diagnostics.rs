//! LSP-shaped lint diagnostics.
//!
//! Diagnostics are transient values: plugins build them fresh per lint
//! call and the host publishes them; nothing is persisted.

use serde_json::{Map, Value, json};

/// A zero-based line/character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based line.
    pub line: u32,
    /// Zero-based character offset within the line.
    pub character: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A start/end position pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Range start (inclusive).
    pub start: Position,
    /// Range end (exclusive).
    pub end: Position,
}

impl Range {
    /// Create a new range.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Severity levels for published diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

impl DiagnosticSeverity {
    /// Convert the numeric LSP `DiagnosticSeverity` into an enum.
    pub fn from_u64(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Information),
            4 => Some(Self::Hint),
            _ => None,
        }
    }

    /// The numeric LSP `DiagnosticSeverity` value.
    pub fn to_u64(self) -> u64 {
        match self {
            Self::Error => 1,
            Self::Warning => 2,
            Self::Information => 3,
            Self::Hint => 4,
        }
    }
}

/// A single lint finding in the host's diagnostic protocol shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic range.
    pub range: Range,
    /// Optional severity.
    pub severity: Option<DiagnosticSeverity>,
    /// Optional rule code (e.g. `D100`).
    pub code: Option<String>,
    /// Optional producer name (e.g. `"pydocstyle"`).
    pub source: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Encode as a `textDocument/publishDiagnostics` item.
    ///
    /// Absent optional fields are omitted from the payload.
    pub fn to_value(&self) -> Value {
        let mut item = Map::new();
        item.insert(
            "range".to_string(),
            json!({
                "start": {"line": self.range.start.line, "character": self.range.start.character},
                "end": {"line": self.range.end.line, "character": self.range.end.character},
            }),
        );
        item.insert("message".to_string(), Value::String(self.message.clone()));
        if let Some(severity) = self.severity {
            item.insert("severity".to_string(), json!(severity.to_u64()));
        }
        if let Some(code) = &self.code {
            item.insert("code".to_string(), Value::String(code.clone()));
        }
        if let Some(source) = &self.source {
            item.insert("source".to_string(), Value::String(source.clone()));
        }
        Value::Object(item)
    }
}
