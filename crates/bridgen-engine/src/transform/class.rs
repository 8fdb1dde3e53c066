//! Class transformer: wrapper class with a replay constructor, plus the two
//! free conversion functions.

use bridgen_ast::{
    Constructor, CtorParam, File, Modifier, Param, PropertyBinding, SecondaryConstructor,
    SupertypeClause, TypeDecl, TypeKind,
};

use crate::descriptor::ClassDescriptor;
use crate::transform::{
    Context, DELEGATE, Direction, abstract_function, abstract_property, delegating_function,
    delegating_property, export_function, import_function, member_modifiers, scaffold,
};

/// A supertype parameter list recorded as empty marks constructor arguments
/// that exist only at runtime. The wrapper then degrades instead of
/// replaying construction: no public constructor, inherited members
/// redeclared abstract, and the supertype clause dropped. Such a wrapper is
/// only reachable through its export function.
pub fn transform_class(descriptor: &ClassDescriptor, ctx: &Context) -> File {
    let facade_name = descriptor.facade_name().to_string();
    let scaffold = scaffold(
        &descriptor.package,
        &descriptor.name,
        &descriptor.applied_arguments,
        &facade_name,
        ctx,
    );
    let mut file = scaffold.file;

    let degraded = descriptor
        .supertypes
        .iter()
        .any(|sup| matches!(&sup.parameters, Some(ps) if ps.is_empty()));
    let extends_class = descriptor
        .supertypes
        .iter()
        .any(|sup| matches!(&sup.parameters, Some(ps) if !ps.is_empty()));

    let mut class = TypeDecl::new(TypeKind::Class, facade_name.clone());
    class.annotations.push("JsExport".into());
    if degraded {
        class.modifiers.push(Modifier::Abstract);
    }

    let mut binding_modifiers = vec![Modifier::Internal];
    if extends_class {
        // The base facade declares the delegate `open`; narrow it here.
        binding_modifiers.push(Modifier::Override);
    }
    class.primary_ctor = Some(Constructor {
        modifiers: vec![Modifier::Internal],
        params: vec![CtorParam {
            name: DELEGATE.into(),
            ty: scaffold.common.clone(),
            binding: Some(PropertyBinding {
                mutable: false,
                modifiers: binding_modifiers,
            }),
        }],
    });

    for sup in &descriptor.supertypes {
        match &sup.parameters {
            // Interface supertype: extend the facade directly.
            None => class.supertypes.push(SupertypeClause {
                ty: ctx.facade_shape(&sup.ty),
                args: None,
            }),
            Some(ps) if ps.is_empty() => {
                // Degraded: cannot construct the supertype portion.
            }
            // Class supertype: every class facade's primary constructor
            // takes the native value, and ours is a subtype of it.
            Some(_) => class.supertypes.push(SupertypeClause {
                ty: ctx.facade_shape(&sup.ty),
                args: Some(vec![DELEGATE.into()]),
            }),
        }
    }

    if !degraded {
        let params = descriptor
            .constructor_params
            .iter()
            .map(|p| Param::new(p.name.clone(), ctx.registry.exported_shape(&p.ty)))
            .collect();
        let arguments = descriptor
            .constructor_params
            .iter()
            .map(|p| ctx.registry.import_expr(&p.name, &p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        class.secondary_ctors.push(SecondaryConstructor {
            params,
            delegate_args: vec![format!("{}({arguments})", scaffold.common_alias)],
        });
    }

    for property in &descriptor.properties {
        if degraded && property.is_override {
            class
                .properties
                .push(abstract_property(property, ctx, vec![Modifier::Abstract]));
        } else {
            class.properties.push(delegating_property(
                property,
                ctx,
                DELEGATE,
                Direction::Export,
                member_modifiers(property.is_override, false),
            ));
        }
    }
    for function in &descriptor.functions {
        if degraded && function.is_override {
            class
                .functions
                .push(abstract_function(function, ctx, vec![Modifier::Abstract]));
        } else {
            class.functions.push(delegating_function(
                function,
                ctx,
                DELEGATE,
                Direction::Export,
                member_modifiers(function.is_override, false),
            ));
        }
    }
    file.types.push(class);

    file.functions.push(import_function(
        &facade_name,
        &scaffold.facade,
        &scaffold.common,
        DELEGATE,
    ));
    file.functions.push(export_function(
        &facade_name,
        &scaffold.facade,
        &scaffold.common,
        format!("{facade_name}(this)"),
    ));
    file
}
