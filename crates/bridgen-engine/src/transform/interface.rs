//! Interface transformer: facade interface plus the two internal adapters
//! that carry values across in either direction.

use bridgen_ast::{
    Constructor, CtorParam, File, Modifier, PropertyBinding, SupertypeClause, TypeDecl, TypeKind,
};

use crate::descriptor::InterfaceDescriptor;
use crate::transform::{
    Context, Direction, abstract_function, abstract_property, delegating_function,
    delegating_property, export_function, import_function, member_modifiers, scaffold,
};

pub fn transform_interface(descriptor: &InterfaceDescriptor, ctx: &Context) -> File {
    let facade_name = descriptor.facade_name().to_string();
    let scaffold = scaffold(
        &descriptor.package,
        &descriptor.name,
        &descriptor.applied_arguments,
        &facade_name,
        ctx,
    );
    let mut file = scaffold.file;

    let imported_name = format!("Imported{facade_name}");
    let exported_name = format!("Exported{facade_name}");

    // Facade interface: members mirror the original with exported shapes,
    // extension restricted to the facades of the original's supertypes.
    let mut facade = TypeDecl::new(TypeKind::Interface, facade_name.clone());
    facade.annotations.push("JsExport".into());
    for sup in &descriptor.supertypes {
        facade.supertypes.push(SupertypeClause {
            ty: ctx.facade_shape(&sup.ty),
            args: None,
        });
    }
    for property in &descriptor.properties {
        facade.properties.push(abstract_property(
            property,
            ctx,
            member_modifiers(property.is_override, false),
        ));
    }
    for function in &descriptor.functions {
        facade.functions.push(abstract_function(
            function,
            ctx,
            member_modifiers(function.is_override, false),
        ));
    }
    file.types.push(facade);

    // Adapter implementing the native interface over an exported value.
    let mut imported = adapter(&imported_name, "exported", &scaffold.facade);
    imported.supertypes.push(SupertypeClause {
        ty: scaffold.common.clone(),
        args: None,
    });
    for property in &descriptor.properties {
        imported.properties.push(delegating_property(
            property,
            ctx,
            "exported",
            Direction::Import,
            vec![Modifier::Override],
        ));
    }
    for function in &descriptor.functions {
        imported.functions.push(delegating_function(
            function,
            ctx,
            "exported",
            Direction::Import,
            vec![Modifier::Override],
        ));
    }
    file.types.push(imported);

    // Adapter implementing the facade over a native value.
    let mut exported = adapter(&exported_name, "common", &scaffold.common);
    exported.supertypes.push(SupertypeClause {
        ty: scaffold.facade.clone(),
        args: None,
    });
    for property in &descriptor.properties {
        exported.properties.push(delegating_property(
            property,
            ctx,
            "common",
            Direction::Export,
            vec![Modifier::Override],
        ));
    }
    for function in &descriptor.functions {
        exported.functions.push(delegating_function(
            function,
            ctx,
            "common",
            Direction::Export,
            vec![Modifier::Override],
        ));
    }
    file.types.push(exported);

    // Unwrap an existing adapter before wrapping, so round trips hand back
    // the original instance.
    file.functions.push(import_function(
        &facade_name,
        &scaffold.facade,
        &scaffold.common,
        format!("(this as? {exported_name})?.common ?: {imported_name}(this)"),
    ));
    file.functions.push(export_function(
        &facade_name,
        &scaffold.facade,
        &scaffold.common,
        format!("(this as? {imported_name})?.exported ?: {exported_name}(this)"),
    ));
    file
}

fn adapter(name: &str, delegate: &str, delegate_ty: &bridgen_core::TypeShape) -> TypeDecl {
    let mut decl = TypeDecl::new(TypeKind::Class, name);
    decl.modifiers.push(Modifier::Internal);
    decl.primary_ctor = Some(Constructor {
        modifiers: Vec::new(),
        params: vec![CtorParam {
            name: delegate.into(),
            ty: delegate_ty.clone(),
            binding: Some(PropertyBinding {
                mutable: false,
                modifiers: vec![Modifier::Internal],
            }),
        }],
    });
    decl
}
