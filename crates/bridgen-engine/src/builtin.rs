//! Built-in mapping rules.
//!
//! Interop ground rules: primitives, strings and primitive arrays are
//! structurally compatible and pass through untouched. `Long` has no JS
//! counterpart and crosses as `Double` (lossy above 2^53). Arrays and lists
//! of convertible elements map element-wise; lists additionally repack
//! between `Array` and `List`. Throwables cross as the generic error type.
//! Function shapes are matched structurally and wrapped in a synthesized
//! lambda that converts arguments and result.

use bridgen_core::naming::short_name_for_index;
use bridgen_core::{TypeShape, kotlin};

use crate::mapping::{MappingRule, TypeRegistry};

pub(crate) fn install(registry: &mut TypeRegistry) {
    for shape in [
        kotlin::boolean(),
        kotlin::byte(),
        kotlin::character(),
        kotlin::short(),
        kotlin::int(),
        kotlin::float(),
        kotlin::double(),
        kotlin::string(),
        kotlin::boolean_array(),
        kotlin::byte_array(),
        kotlin::short_array(),
        kotlin::int_array(),
        kotlin::float_array(),
        kotlin::double_array(),
        kotlin::char_array(),
        kotlin::any(),
        kotlin::unit(),
    ] {
        registry.register_exact(&shape, MappingRule::identity());
    }

    for exception in kotlin::exceptions() {
        let simple = exception.name.clone();
        registry.register_exact(
            &exception,
            MappingRule::new(
                |_, _| kotlin::error(),
                move |_, target, _| format!("{target}.cause as {simple}"),
                |_, target, _| format!("Error({target})"),
            ),
        );
    }

    registry.register_exact(
        &kotlin::long(),
        MappingRule::new(
            |_, _| kotlin::double(),
            |_, target, shape| format!("{target}{}toLong()", shape.qdot()),
            |_, target, shape| format!("{target}{}toDouble()", shape.qdot()),
        ),
    );

    registry.register_exact(
        &kotlin::long_array(),
        MappingRule::new(
            |registry, _| kotlin::array(registry.exported_shape(&kotlin::long())),
            |registry, target, shape| {
                let q = shape.qdot();
                let element = registry.import_expr("it", &kotlin::long());
                format!("{target}{q}map {{ {element} }}{q}toLongArray()")
            },
            |registry, target, shape| {
                let q = shape.qdot();
                let element = registry.export_expr("it", &kotlin::long());
                format!("{target}{q}map {{ {element} }}{q}toTypedArray()")
            },
        ),
    );

    registry.register_exact(
        &kotlin::array(TypeShape::parameter("T")),
        MappingRule::new(
            |registry, shape| match shape.first_arg() {
                Some(element) => kotlin::array(registry.exported_shape(element)),
                None => shape.clone(),
            },
            |registry, target, shape| {
                let Some(element) = shape.first_arg() else {
                    return target.to_string();
                };
                let converted = registry.import_expr("it", element);
                // Identity elements pass the whole array through untouched.
                if converted == "it" {
                    return target.to_string();
                }
                let q = shape.qdot();
                format!("{target}{q}map {{ {converted} }}{q}toTypedArray()")
            },
            |registry, target, shape| {
                let Some(element) = shape.first_arg() else {
                    return target.to_string();
                };
                let converted = registry.export_expr("it", element);
                if converted == "it" {
                    return target.to_string();
                }
                let q = shape.qdot();
                format!("{target}{q}map {{ {converted} }}{q}toTypedArray()")
            },
        ),
    );

    registry.register_exact(
        &kotlin::list(TypeShape::parameter("T")),
        MappingRule::new(
            |registry, shape| match shape.first_arg() {
                Some(element) => kotlin::array(registry.exported_shape(element)),
                None => shape.clone(),
            },
            |registry, target, shape| {
                let Some(element) = shape.first_arg() else {
                    return target.to_string();
                };
                let q = shape.qdot();
                let converted = registry.import_expr("it", element);
                // The representations still differ, so the short-circuit
                // drops only the per-element closure.
                if converted == "it" {
                    format!("{target}{q}toList()")
                } else {
                    format!("{target}{q}map {{ {converted} }}")
                }
            },
            |registry, target, shape| {
                let Some(element) = shape.first_arg() else {
                    return target.to_string();
                };
                let q = shape.qdot();
                let converted = registry.export_expr("it", element);
                if converted == "it" {
                    format!("{target}{q}toTypedArray()")
                } else {
                    format!("{target}{q}map {{ {converted} }}{q}toTypedArray()")
                }
            },
        ),
    );

    registry.register_predicate(
        |shape| shape.is_function(),
        MappingRule::new(
            |registry, shape| {
                let params = shape
                    .function_params()
                    .iter()
                    .map(|p| registry.exported_shape(p))
                    .collect();
                let returns = shape
                    .function_return()
                    .map(|r| registry.exported_shape(r))
                    .unwrap_or_else(kotlin::unit);
                kotlin::function(params, returns)
            },
            |registry, target, shape| {
                // Native callers hand in native arguments: export each one,
                // call through the exported function, import the result.
                let Some(returns) = shape.function_return() else {
                    return target.to_string();
                };
                let signature = lambda_signature(shape, |ty| ty.to_string());
                let arguments = join_mapped(shape, |name, ty| registry.export_expr(name, ty));
                let result = registry.import_expr(&format!("{target}({arguments})"), returns);
                lambda(&signature, &result)
            },
            |registry, target, shape| {
                let Some(returns) = shape.function_return() else {
                    return target.to_string();
                };
                let signature = lambda_signature(shape, |ty| registry.exported_shape(ty).to_string());
                let arguments = join_mapped(shape, |name, ty| registry.import_expr(name, ty));
                let result = registry.export_expr(&format!("{target}({arguments})"), returns);
                lambda(&signature, &result)
            },
        ),
    );
}

/// Deterministic positional parameter names, rendered as `a: T0, b: T1`.
fn lambda_signature(shape: &TypeShape, type_text: impl Fn(&TypeShape) -> String) -> String {
    shape
        .function_params()
        .iter()
        .enumerate()
        .map(|(index, ty)| format!("{}: {}", short_name_for_index(index), type_text(ty)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn lambda(signature: &str, body: &str) -> String {
    if signature.is_empty() {
        format!("{{ ->\n    {body}\n}}")
    } else {
        format!("{{ {signature} ->\n    {body}\n}}")
    }
}

fn join_mapped(shape: &TypeShape, map: impl Fn(&str, &TypeShape) -> String) -> String {
    shape
        .function_params()
        .iter()
        .enumerate()
        .map(|(index, ty)| map(&short_name_for_index(index), ty))
        .collect::<Vec<_>>()
        .join(", ")
}
