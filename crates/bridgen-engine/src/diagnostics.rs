//! Per-declaration diagnostics.
//!
//! Failures never propagate past one declaration's transformation; they are
//! collected here, attributed to the originating source location, and the
//! declaration is skipped.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Declaration kind the engine cannot handle (e.g. object declarations).
    UnsupportedDeclaration,
    /// No mapping rule and not structurally identity-safe.
    UnmappableType,
    /// Direct export of a generic declaration; an instantiation request is
    /// needed instead.
    UnboundGenericParameters,
    /// Instantiation request whose argument count does not match the
    /// declaration.
    GenericArityMismatch,
    /// Manifest entry that could not be decoded.
    InvalidDescriptor,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        Severity::Error
    }
}

/// Originating source position as reported by discovery. Line 0 means the
/// position within the file is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    #[serde(default)]
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{}:{}", self.file, self.line)
        } else {
            f.write_str(&self.file)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub location: Option<SourceLocation>,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not recorded, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    diagnostic: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            diagnostic: Diagnostic {
                kind,
                severity: kind.severity(),
                location: None,
                message: message.into(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// `file:line: severity: message` lines, one per diagnostic.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.messages {
            if let Some(location) = &diagnostic.location {
                out.push_str(&format!("{location}: "));
            }
            out.push_str(&format!(
                "{}: {}\n",
                diagnostic.severity.as_str(),
                diagnostic.message
            ));
        }
        out
    }
}

impl DiagnosticBuilder<'_> {
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.diagnostic.location = Some(location);
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.diagnostic);
    }
}
