//! Normalized declaration descriptors.
//!
//! Descriptors decouple the engine from whatever symbol table discovery
//! walks. They are immutable once built; every contained shape has already
//! been normalized by the discovery layer. Each descriptor is built once per
//! discovered declaration (or per instantiation request) and consumed exactly
//! once by a transformer.

use bridgen_core::TypeShape;
use serde::{Deserialize, Serialize};

use crate::diagnostics::SourceLocation;

/// Closed union over the declaration kinds the engine transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Descriptor {
    Class(ClassDescriptor),
    SealedClass(SealedClassDescriptor),
    Interface(InterfaceDescriptor),
    Enum(EnumDescriptor),
}

impl Descriptor {
    pub fn package(&self) -> &str {
        match self {
            Descriptor::Class(d) => &d.package,
            Descriptor::SealedClass(d) => &d.package,
            Descriptor::Interface(d) => &d.package,
            Descriptor::Enum(d) => &d.package,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Descriptor::Class(d) => &d.name,
            Descriptor::SealedClass(d) => &d.name,
            Descriptor::Interface(d) => &d.name,
            Descriptor::Enum(d) => &d.name,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Descriptor::Class(d) => &d.location,
            Descriptor::SealedClass(d) => &d.location,
            Descriptor::Interface(d) => &d.location,
            Descriptor::Enum(d) => &d.location,
        }
    }

    /// Generic parameter names, in declaration order. Sealed hierarchies and
    /// enums are never generic.
    pub fn type_parameters(&self) -> &[String] {
        match self {
            Descriptor::Class(d) => &d.type_parameters,
            Descriptor::Interface(d) => &d.type_parameters,
            Descriptor::SealedClass(_) | Descriptor::Enum(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub package: String,
    /// Native simple name; never changed by instantiation.
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Facade name override; instantiation requests carry one so `Box<Int>`
    /// can export as `IntBox`.
    #[serde(default)]
    pub export_name: Option<String>,
    /// Concrete type arguments this descriptor was instantiated with;
    /// applied to the native type reference in generated wrappers.
    #[serde(default)]
    pub applied_arguments: Vec<TypeShape>,
    #[serde(default)]
    pub supertypes: Vec<SuperDescriptor>,
    #[serde(default)]
    pub constructor_params: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub functions: Vec<FunctionDescriptor>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl ClassDescriptor {
    pub fn facade_name(&self) -> &str {
        self.export_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SealedClassDescriptor {
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub constructor_params: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub functions: Vec<FunctionDescriptor>,
    /// Subclass references only; each subclass is resolved and transformed
    /// independently through its own descriptor.
    #[serde(default)]
    pub subclasses: Vec<SubclassRef>,
    #[serde(default)]
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    pub package: String,
    /// Native simple name; never changed by instantiation.
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Facade name override for instantiation requests.
    #[serde(default)]
    pub export_name: Option<String>,
    /// Concrete type arguments this descriptor was instantiated with.
    #[serde(default)]
    pub applied_arguments: Vec<TypeShape>,
    #[serde(default)]
    pub supertypes: Vec<SuperDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub functions: Vec<FunctionDescriptor>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl InterfaceDescriptor {
    pub fn facade_name(&self) -> &str {
        self.export_name.as_deref().unwrap_or(&self.name)
    }
}

/// Entry order is declaration order and is preserved in generated accessor
/// tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub entries: Vec<String>,
    #[serde(default)]
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubclassRef {
    pub package: String,
    pub name: String,
}

/// One supertype of a class or interface.
///
/// `parameters` is `None` for supertypes without a primary constructor
/// (interfaces). An empty list marks a primary constructor whose argument
/// values exist only at runtime; discovery cannot reconstruct them, and the
/// transformer degrades rather than replaying construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperDescriptor {
    #[serde(rename = "type")]
    pub ty: TypeShape,
    #[serde(default)]
    pub parameters: Option<Vec<ParameterDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeShape,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub is_override: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub returns: TypeShape,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub is_override: bool,
}
