use bridgen_core::{TypeShape, kotlin};

use crate::descriptor::{ClassDescriptor, Descriptor, PropertyDescriptor};
use crate::diagnostics::{DiagnosticKind, SourceLocation};
use crate::exporter::{ExportConfig, Exporter};

fn class_with_property(name: &str, ty: TypeShape) -> Descriptor {
    Descriptor::Class(ClassDescriptor {
        package: "org.lib".into(),
        name: "Holder".into(),
        type_parameters: Vec::new(),
        export_name: None,
        applied_arguments: Vec::new(),
        supertypes: Vec::new(),
        constructor_params: Vec::new(),
        properties: vec![PropertyDescriptor {
            name: name.into(),
            ty,
            mutable: false,
            is_override: false,
        }],
        functions: Vec::new(),
        location: SourceLocation::new("src/Holder.kt", 7),
    })
}

#[test]
fn exports_a_plain_class() {
    let exporter = Exporter::new(ExportConfig::default());
    let (file, diagnostics) = exporter.export(&class_with_property("id", kotlin::long()));

    let file = file.expect("expected a generated file");
    assert_eq!(file.package, "org.lib.js");
    assert_eq!(file.name, "Holder");
    assert!(diagnostics.is_empty());
}

#[test]
fn erase_package_flattens_the_namespace() {
    let exporter = Exporter::new(ExportConfig {
        erase_package: true,
    });
    let (file, _) = exporter.export(&class_with_property("id", kotlin::long()));
    assert_eq!(file.expect("expected a generated file").package, "");
}

#[test]
fn unmappable_member_skips_the_declaration() {
    let exporter = Exporter::new(ExportConfig::default());
    let shape = TypeShape::parameterized("other", "Weird", vec![kotlin::int()]);
    let (file, diagnostics) = exporter.export(&class_with_property("weird", shape));

    assert!(file.is_none());
    assert_eq!(diagnostics.error_count(), 1);
    let diagnostic = diagnostics.iter().next().expect("one diagnostic");
    assert_eq!(diagnostic.kind, DiagnosticKind::UnmappableType);
    assert_eq!(
        diagnostic.location,
        Some(SourceLocation::new("src/Holder.kt", 7))
    );
    assert!(diagnostic.message.contains("Holder.weird"));
    assert_eq!(diagnostics.render().lines().count(), 1);
    assert!(
        diagnostics
            .render()
            .starts_with("src/Holder.kt:7: error: ")
    );
}

#[test]
fn generic_declarations_need_an_instantiation_request() {
    let exporter = Exporter::new(ExportConfig::default());
    let descriptor = Descriptor::Class(ClassDescriptor {
        package: "org.lib".into(),
        name: "Box".into(),
        type_parameters: vec!["T".into()],
        export_name: None,
        applied_arguments: Vec::new(),
        supertypes: Vec::new(),
        constructor_params: Vec::new(),
        properties: Vec::new(),
        functions: Vec::new(),
        location: SourceLocation::default(),
    });

    let (file, diagnostics) = exporter.export(&descriptor);
    assert!(file.is_none());
    assert_eq!(
        diagnostics.iter().next().map(|d| d.kind),
        Some(DiagnosticKind::UnboundGenericParameters)
    );

    // The same declaration exports fine through an instantiation request.
    let (file, diagnostics) = exporter
        .export_instantiated(&descriptor, &[kotlin::int()], Some("IntBox"))
        .expect("arity matches");
    let file = file.expect("expected a generated file");
    assert_eq!(file.name, "IntBox");
    assert!(diagnostics.is_empty());
    // The wrapper wraps the instantiated native type under the facade alias.
    let rendered = file.render();
    assert!(rendered.contains("import org.lib.Box as CommonIntBox"));
    assert!(rendered.contains("class IntBox internal constructor(internal val common: CommonIntBox<Int>)"));
    assert!(rendered.contains("fun IntBox.importIntBox(): CommonIntBox<Int> = common"));

    // A mismatched request is a caller error for that request only.
    assert!(exporter.export_instantiated(&descriptor, &[], None).is_err());
}

#[test]
fn one_bad_declaration_does_not_affect_others() {
    let exporter = Exporter::new(ExportConfig::default());
    let bad = class_with_property(
        "weird",
        TypeShape::parameterized("other", "Weird", vec![kotlin::int()]),
    );
    let good = class_with_property("id", kotlin::long());

    let (bad_file, bad_diagnostics) = exporter.export(&bad);
    let (good_file, good_diagnostics) = exporter.export(&good);

    assert!(bad_file.is_none());
    assert!(bad_diagnostics.has_errors());
    assert!(good_file.is_some());
    assert!(good_diagnostics.is_empty());
}
