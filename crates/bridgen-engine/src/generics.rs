//! Generic instantiation.
//!
//! The exported side cannot express open generic parameters, so generic
//! declarations are exported per explicit instantiation request. Each
//! request binds the declaration's parameters positionally and produces its
//! own fully-substituted descriptor; requests share no state.

use bridgen_core::TypeShape;
use indexmap::IndexMap;

use crate::Error;
use crate::descriptor::{
    ClassDescriptor, Descriptor, FunctionDescriptor, InterfaceDescriptor, ParameterDescriptor,
    PropertyDescriptor, SuperDescriptor,
};

/// Parameter name → concrete shape, in declaration order.
pub type GenericBinding = IndexMap<String, TypeShape>;

/// Positional binding. Argument count must equal the declaration's parameter
/// count; a mismatch is a caller error.
pub fn bind(
    declaration: &str,
    parameters: &[String],
    arguments: &[TypeShape],
) -> crate::Result<GenericBinding> {
    if parameters.len() != arguments.len() {
        return Err(Error::GenericArityMismatch {
            declaration: declaration.to_string(),
            expected: parameters.len(),
            supplied: arguments.len(),
        });
    }
    Ok(parameters
        .iter()
        .cloned()
        .zip(arguments.iter().cloned())
        .collect())
}

/// Rewrites every shape in the descriptor, substituting bound parameters.
/// The result carries no type parameters of its own.
pub fn instantiate(descriptor: &Descriptor, arguments: &[TypeShape]) -> crate::Result<Descriptor> {
    match descriptor {
        Descriptor::Class(class) => {
            let binding = bind(&class.name, &class.type_parameters, arguments)?;
            Ok(Descriptor::Class(instantiate_class(class, &binding)))
        }
        Descriptor::Interface(interface) => {
            let binding = bind(&interface.name, &interface.type_parameters, arguments)?;
            Ok(Descriptor::Interface(instantiate_interface(
                interface, &binding,
            )))
        }
        // Sealed hierarchies and enums are never generic; anything but an
        // empty argument list is an arity error.
        Descriptor::SealedClass(_) | Descriptor::Enum(_) => {
            bind(descriptor.name(), &[], arguments)?;
            Ok(descriptor.clone())
        }
    }
}

fn instantiate_class(class: &ClassDescriptor, binding: &GenericBinding) -> ClassDescriptor {
    ClassDescriptor {
        package: class.package.clone(),
        name: class.name.clone(),
        type_parameters: Vec::new(),
        export_name: class.export_name.clone(),
        applied_arguments: binding.values().cloned().collect(),
        supertypes: class
            .supertypes
            .iter()
            .map(|s| substitute_super(s, binding))
            .collect(),
        constructor_params: class
            .constructor_params
            .iter()
            .map(|p| substitute_parameter(p, binding))
            .collect(),
        properties: class
            .properties
            .iter()
            .map(|p| substitute_property(p, binding))
            .collect(),
        functions: class
            .functions
            .iter()
            .map(|f| substitute_function(f, binding))
            .collect(),
        location: class.location.clone(),
    }
}

fn instantiate_interface(
    interface: &InterfaceDescriptor,
    binding: &GenericBinding,
) -> InterfaceDescriptor {
    InterfaceDescriptor {
        package: interface.package.clone(),
        name: interface.name.clone(),
        type_parameters: Vec::new(),
        export_name: interface.export_name.clone(),
        applied_arguments: binding.values().cloned().collect(),
        supertypes: interface
            .supertypes
            .iter()
            .map(|s| substitute_super(s, binding))
            .collect(),
        properties: interface
            .properties
            .iter()
            .map(|p| substitute_property(p, binding))
            .collect(),
        functions: interface
            .functions
            .iter()
            .map(|f| substitute_function(f, binding))
            .collect(),
        location: interface.location.clone(),
    }
}

fn substitute_super(sup: &SuperDescriptor, binding: &GenericBinding) -> SuperDescriptor {
    SuperDescriptor {
        ty: substitute(&sup.ty, binding),
        parameters: sup
            .parameters
            .as_ref()
            .map(|ps| ps.iter().map(|p| substitute_parameter(p, binding)).collect()),
    }
}

fn substitute_parameter(
    parameter: &ParameterDescriptor,
    binding: &GenericBinding,
) -> ParameterDescriptor {
    ParameterDescriptor {
        name: parameter.name.clone(),
        ty: substitute(&parameter.ty, binding),
    }
}

fn substitute_property(
    property: &PropertyDescriptor,
    binding: &GenericBinding,
) -> PropertyDescriptor {
    PropertyDescriptor {
        name: property.name.clone(),
        ty: substitute(&property.ty, binding),
        mutable: property.mutable,
        is_override: property.is_override,
    }
}

fn substitute_function(
    function: &FunctionDescriptor,
    binding: &GenericBinding,
) -> FunctionDescriptor {
    FunctionDescriptor {
        name: function.name.clone(),
        returns: substitute(&function.returns, binding),
        parameters: function
            .parameters
            .iter()
            .map(|p| substitute_parameter(p, binding))
            .collect(),
        is_override: function.is_override,
    }
}

/// A use site of a bound parameter keeps its own nullability: `T?` with
/// `T := Int` becomes `Int?`.
fn substitute(shape: &TypeShape, binding: &GenericBinding) -> TypeShape {
    if shape.is_generic_parameter() {
        if let Some(bound) = binding.get(&shape.name) {
            let nullable = bound.nullable || shape.nullable;
            return bound.clone().with_nullability(nullable);
        }
    }
    TypeShape {
        package: shape.package.clone(),
        name: shape.name.clone(),
        args: shape.args.iter().map(|a| substitute(a, binding)).collect(),
        nullable: shape.nullable,
    }
}
