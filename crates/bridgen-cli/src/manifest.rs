//! The declaration manifest: the interchange format between the discovery
//! tool and the engine.
//!
//! Entries are decoded one by one so a single malformed declaration (an
//! unsupported kind, a missing field) becomes a diagnostic and a skip
//! instead of failing the whole file.

use bridgen_core::TypeShape;
use bridgen_engine::descriptor::Descriptor;
use bridgen_engine::{DiagnosticKind, Diagnostics, SourceLocation};
use serde::Deserialize;

const KNOWN_KINDS: &[&str] = &["class", "sealed_class", "interface", "enum"];

/// One export request: a direct per-declaration export, or a
/// generics-instantiation export when `type_arguments` is present.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub descriptor: Descriptor,
    /// Ordered concrete type arguments for a generics-instantiation export.
    #[serde(default)]
    pub type_arguments: Option<Vec<TypeShape>>,
    /// Facade name for an instantiation (e.g. `IntBox` for `Box<Int>`).
    #[serde(default)]
    pub export_name: Option<String>,
    /// Originating source files, opaque here; carried through for
    /// incremental-build invalidation.
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    declarations: Vec<serde_json::Value>,
}

#[derive(Debug, Default)]
pub struct Manifest {
    pub requests: Vec<ExportRequest>,
}

/// Parses the manifest text. The outer `Result` covers malformed JSON;
/// per-entry failures land in the returned diagnostics.
pub fn parse(text: &str, origin: &str) -> Result<(Manifest, Diagnostics), serde_json::Error> {
    let raw: RawManifest = serde_json::from_str(text)?;
    let mut diagnostics = Diagnostics::new();
    let mut requests = Vec::new();

    for (index, value) in raw.declarations.into_iter().enumerate() {
        let kind = value
            .get("descriptor")
            .and_then(|d| d.get("kind"))
            .and_then(|k| k.as_str())
            .map(str::to_string);

        match serde_json::from_value::<ExportRequest>(value) {
            Ok(request) => requests.push(request),
            Err(err) => {
                let (diagnostic_kind, message) = match kind.as_deref() {
                    Some(kind) if !KNOWN_KINDS.contains(&kind) => (
                        DiagnosticKind::UnsupportedDeclaration,
                        format!("declaration #{index}: cannot export '{kind}' declarations"),
                    ),
                    _ => (
                        DiagnosticKind::InvalidDescriptor,
                        format!("declaration #{index}: {err}"),
                    ),
                };
                diagnostics
                    .report(diagnostic_kind, message)
                    .at(SourceLocation::new(origin, 0))
                    .emit();
            }
        }
    }

    Ok((Manifest { requests }, diagnostics))
}
