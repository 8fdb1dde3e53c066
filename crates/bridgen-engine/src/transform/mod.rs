//! Declaration-kind transformers.
//!
//! One module per kind; every transformer consumes one descriptor plus the
//! registry/config context and produces one file-level AST. Shared here: the
//! file scaffold (facade package, `Common` alias import) and the
//! direction-parameterized member builders both wrapper classes and
//! interface adapters are made of.

pub mod class;
pub mod enums;
pub mod interface;
pub mod sealed;

#[cfg(test)]
mod enums_tests;
#[cfg(test)]
mod interface_tests;

use bridgen_ast::{Body, File, Function, Import, Modifier, Param, Property, Setter};
use bridgen_core::{TypeShape, kotlin};

use crate::descriptor::{FunctionDescriptor, PropertyDescriptor};
use crate::exporter::ExportConfig;
use crate::mapping::TypeRegistry;

/// Name of the wrapped native value in generated wrappers.
pub(crate) const DELEGATE: &str = "common";

/// Read-only context threaded into every transformer invocation.
pub struct Context<'a> {
    pub registry: &'a TypeRegistry,
    pub config: ExportConfig,
}

impl Context<'_> {
    /// Facade package for a native package: a mirrored `.js` sub-package, or
    /// the root namespace when package erasure is on.
    pub fn js_package(&self, package: &str) -> String {
        if self.config.erase_package || package.is_empty() {
            String::new()
        } else {
            format!("{package}.js")
        }
    }

    /// The shape a supertype reference resolves to on the facade side: its
    /// mapped shape when a rule exists, otherwise the facade of the same
    /// declaration (facades are never generic, so arguments drop).
    pub fn facade_shape(&self, shape: &TypeShape) -> TypeShape {
        if self.registry.has_rule(shape) {
            self.registry.exported_shape(shape)
        } else {
            TypeShape::simple(self.js_package(&shape.package), shape.name.as_str())
                .with_nullability(shape.nullable)
        }
    }
}

/// Common start of every facade file: facade package, `JsExport` import and
/// the native declaration imported under its `Common` alias.
pub(crate) struct Scaffold {
    pub file: File,
    pub common: TypeShape,
    pub facade: TypeShape,
    pub common_alias: String,
}

/// `native_name` is the declaration's own name; `facade_name` differs for
/// instantiation exports (`Box` exported as `IntBox`), and `applied` then
/// carries the concrete type arguments of the native reference.
pub(crate) fn scaffold(
    package: &str,
    native_name: &str,
    applied: &[TypeShape],
    facade_name: &str,
    ctx: &Context,
) -> Scaffold {
    let js_package = ctx.js_package(package);
    let common_alias = format!("Common{facade_name}");

    let mut file = File::new(js_package.clone(), facade_name);
    file.imports.push(Import::new(kotlin::JS, "JsExport"));
    file.imports
        .push(Import::aliased(package, native_name, common_alias.clone()));

    Scaffold {
        file,
        common: TypeShape::parameterized(package, native_name, applied.to_vec()),
        facade: TypeShape::simple(js_package, facade_name),
        common_alias,
    }
}

/// Which way a delegating member converts.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Member surface is exported-shaped, delegate holds the native value.
    Export,
    /// Member surface is native-shaped, delegate holds the exported value.
    Import,
}

impl Direction {
    fn surface_shape(self, registry: &TypeRegistry, ty: &TypeShape) -> TypeShape {
        match self {
            Direction::Export => registry.exported_shape(ty),
            Direction::Import => ty.clone(),
        }
    }

    /// Converts a value arriving through the member surface into the
    /// delegate's representation.
    fn inbound(self, registry: &TypeRegistry, target: &str, ty: &TypeShape) -> String {
        match self {
            Direction::Export => registry.import_expr(target, ty),
            Direction::Import => registry.export_expr(target, ty),
        }
    }

    /// Converts a value produced by the delegate into the member surface's
    /// representation.
    fn outbound(self, registry: &TypeRegistry, target: &str, ty: &TypeShape) -> String {
        match self {
            Direction::Export => registry.export_expr(target, ty),
            Direction::Import => registry.import_expr(target, ty),
        }
    }
}

pub(crate) fn delegating_property(
    property: &PropertyDescriptor,
    ctx: &Context,
    delegate: &str,
    direction: Direction,
    modifiers: Vec<Modifier>,
) -> Property {
    let access = format!("{delegate}.{}", property.name);
    let setter = property.mutable.then(|| Setter {
        param: "value".into(),
        body: format!(
            "{access} = {}",
            direction.inbound(ctx.registry, "value", &property.ty)
        ),
    });
    Property {
        name: property.name.clone(),
        ty: direction.surface_shape(ctx.registry, &property.ty),
        mutable: property.mutable,
        annotations: Vec::new(),
        modifiers,
        initializer: None,
        getter: Some(direction.outbound(ctx.registry, &access, &property.ty)),
        setter,
    }
}

pub(crate) fn delegating_function(
    function: &FunctionDescriptor,
    ctx: &Context,
    delegate: &str,
    direction: Direction,
    modifiers: Vec<Modifier>,
) -> Function {
    let arguments = function
        .parameters
        .iter()
        .map(|p| direction.inbound(ctx.registry, &p.name, &p.ty))
        .collect::<Vec<_>>()
        .join(", ");
    let call = format!("{delegate}.{}({arguments})", function.name);

    let mut out = Function::new(function.name.clone());
    out.modifiers = modifiers;
    out.params = function
        .parameters
        .iter()
        .map(|p| Param::new(p.name.clone(), direction.surface_shape(ctx.registry, &p.ty)))
        .collect();
    out.returns = return_shape(ctx.registry, &function.returns, direction);
    out.body = Some(Body::Expression(direction.outbound(
        ctx.registry,
        &call,
        &function.returns,
    )));
    out
}

/// Declaration-only property, for facade interfaces and degraded wrappers.
pub(crate) fn abstract_property(
    property: &PropertyDescriptor,
    ctx: &Context,
    modifiers: Vec<Modifier>,
) -> Property {
    Property {
        name: property.name.clone(),
        ty: ctx.registry.exported_shape(&property.ty),
        mutable: property.mutable,
        annotations: Vec::new(),
        modifiers,
        initializer: None,
        getter: None,
        setter: None,
    }
}

/// Declaration-only function.
pub(crate) fn abstract_function(
    function: &FunctionDescriptor,
    ctx: &Context,
    modifiers: Vec<Modifier>,
) -> Function {
    let mut out = Function::new(function.name.clone());
    out.modifiers = modifiers;
    out.params = function
        .parameters
        .iter()
        .map(|p| Param::new(p.name.clone(), ctx.registry.exported_shape(&p.ty)))
        .collect();
    out.returns = return_shape(ctx.registry, &function.returns, Direction::Export);
    out
}

fn return_shape(
    registry: &TypeRegistry,
    returns: &TypeShape,
    direction: Direction,
) -> Option<TypeShape> {
    if *returns == kotlin::unit() {
        None
    } else {
        Some(direction.surface_shape(registry, returns))
    }
}

/// `fun Facade.importX(): CommonX = <body>`
pub(crate) fn import_function(
    name: &str,
    facade: &TypeShape,
    common: &TypeShape,
    body: impl Into<String>,
) -> Function {
    let mut out = Function::new(format!("import{name}"));
    out.receiver = Some(facade.clone());
    out.returns = Some(common.clone());
    out.body = Some(Body::Expression(body.into()));
    out
}

/// `fun CommonX.exportX(): Facade = <body>`
pub(crate) fn export_function(
    name: &str,
    facade: &TypeShape,
    common: &TypeShape,
    body: impl Into<String>,
) -> Function {
    let mut out = Function::new(format!("export{name}"));
    out.receiver = Some(common.clone());
    out.returns = Some(facade.clone());
    out.body = Some(Body::Expression(body.into()));
    out
}

/// Modifier set for a concrete delegating member.
pub(crate) fn member_modifiers(is_override: bool, open: bool) -> Vec<Modifier> {
    if is_override {
        vec![Modifier::Override]
    } else if open {
        vec![Modifier::Open]
    } else {
        Vec::new()
    }
}
