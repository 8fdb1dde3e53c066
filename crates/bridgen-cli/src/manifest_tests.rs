use bridgen_engine::descriptor::Descriptor;
use bridgen_engine::{DiagnosticKind, Severity};
use indoc::indoc;

use crate::manifest;

const MANIFEST: &str = indoc! {r#"
    {
      "declarations": [
        {
          "descriptor": {
            "kind": "enum",
            "package": "foo.bar",
            "name": "Season",
            "entries": ["SPRING", "SUMMER", "AUTUMN", "WINTER"],
            "location": { "file": "src/Season.kt", "line": 3 }
          },
          "sources": ["src/Season.kt:3"]
        },
        {
          "descriptor": {
            "kind": "class",
            "package": "org.lib",
            "name": "Box",
            "type_parameters": ["T"],
            "properties": [ { "name": "value", "type": { "name": "T" } } ]
          },
          "type_arguments": [ { "package": "kotlin", "name": "Long" } ],
          "export_name": "LongBox"
        }
      ]
    }
"#};

#[test]
fn parses_direct_and_instantiation_requests() {
    let (manifest, diagnostics) = manifest::parse(MANIFEST, "declarations.json").unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(manifest.requests.len(), 2);

    let enum_request = &manifest.requests[0];
    assert!(matches!(enum_request.descriptor, Descriptor::Enum(_)));
    assert!(enum_request.type_arguments.is_none());
    assert_eq!(enum_request.sources, vec!["src/Season.kt:3"]);
    assert_eq!(enum_request.descriptor.location().to_string(), "src/Season.kt:3");

    let box_request = &manifest.requests[1];
    assert_eq!(
        box_request.type_arguments.as_deref().map(|a| a.len()),
        Some(1)
    );
    assert_eq!(box_request.export_name.as_deref(), Some("LongBox"));
}

#[test]
fn unsupported_declaration_kind_is_skipped_not_fatal() {
    let text = indoc! {r#"
        {
          "declarations": [
            { "descriptor": { "kind": "object", "package": "x", "name": "Singleton" } },
            {
              "descriptor": {
                "kind": "enum",
                "package": "x",
                "name": "Mode",
                "entries": ["ON", "OFF"]
              }
            }
          ]
        }
    "#};

    let (manifest, diagnostics) = manifest::parse(text, "declarations.json").unwrap();
    // The bad entry is reported; the good one survives.
    assert_eq!(manifest.requests.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::UnsupportedDeclaration);
    assert_eq!(diagnostic.severity, Severity::Error);
    assert!(diagnostic.message.contains("object"));
}

#[test]
fn missing_fields_report_invalid_descriptor() {
    let text = indoc! {r#"
        { "declarations": [ { "descriptor": { "kind": "class", "package": "x" } } ] }
    "#};

    let (manifest, diagnostics) = manifest::parse(text, "declarations.json").unwrap();
    assert!(manifest.requests.is_empty());
    assert_eq!(
        diagnostics.iter().next().map(|d| d.kind),
        Some(DiagnosticKind::InvalidDescriptor)
    );
}

#[test]
fn malformed_json_is_a_hard_error() {
    assert!(manifest::parse("{ not json", "declarations.json").is_err());
}
