//! Well-known Kotlin type shapes.

use crate::types::TypeShape;

pub const KOTLIN: &str = "kotlin";
pub const COLLECTIONS: &str = "kotlin.collections";
pub const JS: &str = "kotlin.js";

pub fn boolean() -> TypeShape {
    TypeShape::simple(KOTLIN, "Boolean")
}

pub fn byte() -> TypeShape {
    TypeShape::simple(KOTLIN, "Byte")
}

pub fn character() -> TypeShape {
    TypeShape::simple(KOTLIN, "Char")
}

pub fn short() -> TypeShape {
    TypeShape::simple(KOTLIN, "Short")
}

pub fn int() -> TypeShape {
    TypeShape::simple(KOTLIN, "Int")
}

pub fn long() -> TypeShape {
    TypeShape::simple(KOTLIN, "Long")
}

pub fn float() -> TypeShape {
    TypeShape::simple(KOTLIN, "Float")
}

pub fn double() -> TypeShape {
    TypeShape::simple(KOTLIN, "Double")
}

pub fn string() -> TypeShape {
    TypeShape::simple(KOTLIN, "String")
}

pub fn any() -> TypeShape {
    TypeShape::simple(KOTLIN, "Any")
}

pub fn unit() -> TypeShape {
    TypeShape::simple(KOTLIN, "Unit")
}

pub fn boolean_array() -> TypeShape {
    TypeShape::simple(KOTLIN, "BooleanArray")
}

pub fn byte_array() -> TypeShape {
    TypeShape::simple(KOTLIN, "ByteArray")
}

pub fn char_array() -> TypeShape {
    TypeShape::simple(KOTLIN, "CharArray")
}

pub fn short_array() -> TypeShape {
    TypeShape::simple(KOTLIN, "ShortArray")
}

pub fn int_array() -> TypeShape {
    TypeShape::simple(KOTLIN, "IntArray")
}

pub fn long_array() -> TypeShape {
    TypeShape::simple(KOTLIN, "LongArray")
}

pub fn float_array() -> TypeShape {
    TypeShape::simple(KOTLIN, "FloatArray")
}

pub fn double_array() -> TypeShape {
    TypeShape::simple(KOTLIN, "DoubleArray")
}

pub fn array(element: TypeShape) -> TypeShape {
    TypeShape::parameterized(KOTLIN, "Array", vec![element])
}

pub fn list(element: TypeShape) -> TypeShape {
    TypeShape::parameterized(COLLECTIONS, "List", vec![element])
}

/// `kotlin.FunctionN` shape; the return shape is the last argument.
pub fn function(mut params: Vec<TypeShape>, returns: TypeShape) -> TypeShape {
    let name = format!("Function{}", params.len());
    params.push(returns);
    TypeShape::parameterized(KOTLIN, name, params)
}

/// The generic error type exceptions export to; compiles to a JS `Error`.
pub fn error() -> TypeShape {
    TypeShape::simple(KOTLIN, "Error")
}

/// Stdlib throwable types recognized by the exception mapping rule.
pub fn exceptions() -> Vec<TypeShape> {
    [
        "Throwable",
        "Exception",
        "Error",
        "RuntimeException",
        "IllegalArgumentException",
        "IllegalStateException",
        "IndexOutOfBoundsException",
        "ConcurrentModificationException",
        "UnsupportedOperationException",
        "NumberFormatException",
        "ArithmeticException",
        "NullPointerException",
        "ClassCastException",
        "NoSuchElementException",
        "AssertionError",
    ]
    .iter()
    .map(|name| TypeShape::simple(KOTLIN, *name))
    .collect()
}
