//! Transformation entry points.

use bridgen_ast::File;
use bridgen_core::TypeShape;

use crate::descriptor::{
    Descriptor, FunctionDescriptor, ParameterDescriptor, PropertyDescriptor,
};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::generics;
use crate::mapping::TypeRegistry;
use crate::transform::{self, Context};

/// Session configuration, read once at process start and threaded into every
/// transformer invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportConfig {
    /// Flatten facades into a single namespace instead of mirroring the
    /// native package under a `.js` sub-package.
    pub erase_package: bool,
}

/// Owns the fully-built registry and the configuration. Construction
/// finishes before the first transformation; neither is mutated afterwards,
/// so declarations can be transformed independently and in any order.
pub struct Exporter {
    registry: TypeRegistry,
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            registry: TypeRegistry::with_builtins(),
            config,
        }
    }

    /// For callers that registered their own mapping rules.
    pub fn with_registry(registry: TypeRegistry, config: ExportConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Direct per-declaration export. A failed declaration yields no file
    /// plus at least one error diagnostic; it never panics and never affects
    /// any other declaration.
    pub fn export(&self, descriptor: &Descriptor) -> (Option<File>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let file = self.transform(descriptor, &mut diagnostics);
        (file, diagnostics)
    }

    /// Generics-instantiation export: binds `arguments` positionally,
    /// renames the facade when the request carries an explicit name, then
    /// transforms the concrete descriptor. An arity mismatch is a caller
    /// error, fatal for this request only.
    pub fn export_instantiated(
        &self,
        descriptor: &Descriptor,
        arguments: &[TypeShape],
        export_name: Option<&str>,
    ) -> crate::Result<(Option<File>, Diagnostics)> {
        let mut concrete = generics::instantiate(descriptor, arguments)?;
        if let Some(name) = export_name {
            rename(&mut concrete, name);
        }
        Ok(self.export(&concrete))
    }

    fn transform(&self, descriptor: &Descriptor, diagnostics: &mut Diagnostics) -> Option<File> {
        if !descriptor.type_parameters().is_empty() {
            diagnostics
                .report(
                    DiagnosticKind::UnboundGenericParameters,
                    format!(
                        "{} is generic; export it through an instantiation request with explicit type arguments",
                        descriptor.name()
                    ),
                )
                .at(descriptor.location().clone())
                .emit();
            return None;
        }

        if let Some((member, shape)) = self.unmappable_member(descriptor) {
            diagnostics
                .report(
                    DiagnosticKind::UnmappableType,
                    format!(
                        "{}.{member}: no mapping rule covers {shape}",
                        descriptor.name()
                    ),
                )
                .at(descriptor.location().clone())
                .emit();
            return None;
        }

        let ctx = Context {
            registry: &self.registry,
            config: self.config,
        };
        Some(match descriptor {
            Descriptor::Class(class) => transform::class::transform_class(class, &ctx),
            Descriptor::SealedClass(sealed) => transform::sealed::transform_sealed(sealed, &ctx),
            Descriptor::Interface(interface) => {
                transform::interface::transform_interface(interface, &ctx)
            }
            Descriptor::Enum(enum_) => transform::enums::transform_enum(enum_, &ctx),
        })
    }

    /// First member whose shape no rule covers and that cannot pass through
    /// structurally.
    fn unmappable_member(&self, descriptor: &Descriptor) -> Option<(String, TypeShape)> {
        let (params, properties, functions): (
            &[ParameterDescriptor],
            &[PropertyDescriptor],
            &[FunctionDescriptor],
        ) = match descriptor {
            Descriptor::Class(c) => (&c.constructor_params, &c.properties, &c.functions),
            Descriptor::SealedClass(s) => (&s.constructor_params, &s.properties, &s.functions),
            Descriptor::Interface(i) => (&[], &i.properties, &i.functions),
            Descriptor::Enum(_) => return None,
        };

        for param in params {
            if let Err(bad) = self.registry.ensure_exportable(&param.ty) {
                return Some((param.name.clone(), bad));
            }
        }
        for property in properties {
            if let Err(bad) = self.registry.ensure_exportable(&property.ty) {
                return Some((property.name.clone(), bad));
            }
        }
        for function in functions {
            if let Err(bad) = self.registry.ensure_exportable(&function.returns) {
                return Some((function.name.clone(), bad));
            }
            for param in &function.parameters {
                if let Err(bad) = self.registry.ensure_exportable(&param.ty) {
                    return Some((function.name.clone(), bad));
                }
            }
        }
        None
    }
}

/// Facade-name override for instantiation requests. The native name is left
/// alone, so generated wrappers keep referring to the original declaration.
/// Sealed hierarchies and enums are never generic, so a name override is
/// meaningless there and ignored.
fn rename(descriptor: &mut Descriptor, name: &str) {
    match descriptor {
        Descriptor::Class(d) => d.export_name = Some(name.to_string()),
        Descriptor::Interface(d) => d.export_name = Some(name.to_string()),
        Descriptor::SealedClass(_) | Descriptor::Enum(_) => {}
    }
}
