//! Sealed hierarchy transformer: open base wrapper plus export dispatch on
//! the native runtime type.
//!
//! Subclasses are not resolved here; each is an ordinary class descriptor
//! transformed independently; this module owns only the dispatch shape and
//! the base conversion functions.

use bridgen_ast::{
    Constructor, CtorParam, File, Import, Modifier, PropertyBinding, TypeDecl, TypeKind,
};

use crate::descriptor::SealedClassDescriptor;
use crate::transform::{
    Context, DELEGATE, Direction, delegating_function, delegating_property, export_function,
    import_function, member_modifiers, scaffold,
};

pub fn transform_sealed(descriptor: &SealedClassDescriptor, ctx: &Context) -> File {
    let scaffold = scaffold(&descriptor.package, &descriptor.name, &[], &descriptor.name, ctx);
    let mut file = scaffold.file;

    // Subclass export functions are extensions living in the subclass
    // facade files.
    for subclass in &descriptor.subclasses {
        let sub_package = ctx.js_package(&subclass.package);
        if !sub_package.is_empty() && sub_package != file.package {
            file.imports
                .push(Import::new(sub_package, format!("export{}", subclass.name)));
        }
    }

    let mut class = TypeDecl::new(TypeKind::Class, descriptor.name.clone());
    class.annotations.push("JsExport".into());
    class.modifiers.push(Modifier::Open);
    class.primary_ctor = Some(Constructor {
        modifiers: vec![Modifier::Internal],
        params: vec![CtorParam {
            name: DELEGATE.into(),
            ty: scaffold.common.clone(),
            binding: Some(PropertyBinding {
                mutable: false,
                modifiers: vec![Modifier::Internal, Modifier::Open],
            }),
        }],
    });

    for property in &descriptor.properties {
        class.properties.push(delegating_property(
            property,
            ctx,
            DELEGATE,
            Direction::Export,
            member_modifiers(property.is_override, true),
        ));
    }
    for function in &descriptor.functions {
        class.functions.push(delegating_function(
            function,
            ctx,
            DELEGATE,
            Direction::Export,
            member_modifiers(function.is_override, true),
        ));
    }
    file.types.push(class);

    file.functions.push(import_function(
        &descriptor.name,
        &scaffold.facade,
        &scaffold.common,
        DELEGATE,
    ));

    // Dispatch on the native runtime type; the native hierarchy is sealed,
    // so the subclass arms are exhaustive.
    let export_body = if descriptor.subclasses.is_empty() {
        format!("{}(this)", descriptor.name)
    } else {
        let mut body = String::from("when (this) {\n");
        for subclass in &descriptor.subclasses {
            let native = if subclass.package.is_empty() {
                subclass.name.clone()
            } else {
                format!("{}.{}", subclass.package, subclass.name)
            };
            body.push_str(&format!("    is {native} -> export{}()\n", subclass.name));
        }
        body.push('}');
        body
    };
    file.functions.push(export_function(
        &descriptor.name,
        &scaffold.facade,
        &scaffold.common,
        export_body,
    ));
    file
}
