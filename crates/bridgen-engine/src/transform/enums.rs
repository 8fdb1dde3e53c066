//! Enum transformer: wrapper class, per-entry accessors, `values`/`valueOf`
//! lookup functions and the two conversion functions.

use bridgen_ast::{
    Body, Constructor, CtorParam, File, Function, Modifier, Param, Property, PropertyBinding,
    TypeDecl, TypeKind,
};
use bridgen_core::kotlin;
use bridgen_core::naming::entry_accessor;

use crate::descriptor::EnumDescriptor;
use crate::transform::{Context, export_function, import_function, scaffold};

pub fn transform_enum(descriptor: &EnumDescriptor, ctx: &Context) -> File {
    let scaffold = scaffold(&descriptor.package, &descriptor.name, &[], &descriptor.name, ctx);
    let mut file = scaffold.file;
    let name = &descriptor.name;

    // Wrapper: holds the native entry, exposes its symbolic name.
    let mut class = TypeDecl::new(TypeKind::Class, name.clone());
    class.annotations.push("JsExport".into());
    class.primary_ctor = Some(Constructor {
        modifiers: vec![Modifier::Internal],
        params: vec![CtorParam {
            name: "value".into(),
            ty: scaffold.common.clone(),
            binding: Some(PropertyBinding {
                mutable: false,
                modifiers: vec![Modifier::Internal],
            }),
        }],
    });
    class.properties.push(Property {
        initializer: Some("value.name".into()),
        ..Property::immutable("name", kotlin::string())
    });
    file.types.push(class);

    let accessors: Vec<String> = descriptor
        .entries
        .iter()
        .map(|entry| entry_accessor(name, entry))
        .collect();

    // All wrappers, in declaration order.
    let mut values = Function::new(format!("{name}_values"));
    values.annotations.push("JsExport".into());
    values.returns = Some(kotlin::array(scaffold.facade.clone()));
    values.body = Some(Body::Expression(format!(
        "arrayOf({})",
        accessors.join(", ")
    )));
    file.functions.push(values);

    // Name lookup; an unknown name is an absent result, not an error.
    let mut value_of = Function::new(format!("{name}_valueOf"));
    value_of.annotations.push("JsExport".into());
    value_of.params.push(Param::new("name", kotlin::string()));
    value_of.returns = Some(scaffold.facade.clone().nullable());
    let mut statements: Vec<String> = accessors
        .iter()
        .map(|accessor| format!("if (name == {accessor}.name) return {accessor}"))
        .collect();
    statements.push("return null".into());
    value_of.body = Some(Body::Block(statements));
    file.functions.push(value_of);

    file.functions.push(import_function(
        name,
        &scaffold.facade,
        &scaffold.common,
        "value",
    ));
    file.functions.push(export_function(
        name,
        &scaffold.facade,
        &scaffold.common,
        format!("{name}(this)"),
    ));

    for (entry, accessor) in descriptor.entries.iter().zip(&accessors) {
        let mut property = Property::immutable(accessor.clone(), scaffold.facade.clone());
        property.annotations.push("JsExport".into());
        property.initializer = Some(format!(
            "{}.{entry}.export{name}()",
            scaffold.common_alias
        ));
        file.properties.push(property);
    }

    file
}
