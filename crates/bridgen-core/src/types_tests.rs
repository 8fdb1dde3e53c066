use crate::kotlin;
use crate::types::TypeShape;

#[test]
fn equality_is_structural() {
    let a = kotlin::list(kotlin::long());
    let b = kotlin::list(kotlin::long());
    assert_eq!(a, b);

    assert_ne!(kotlin::list(kotlin::long()), kotlin::list(kotlin::int()));
    assert_ne!(kotlin::long(), kotlin::long().nullable());
    assert_ne!(
        TypeShape::simple("foo", "Thing"),
        TypeShape::simple("bar", "Thing")
    );
}

#[test]
fn argument_order_is_significant() {
    let ab = TypeShape::parameterized("foo", "Pair", vec![kotlin::int(), kotlin::string()]);
    let ba = TypeShape::parameterized("foo", "Pair", vec![kotlin::string(), kotlin::int()]);
    assert_ne!(ab, ba);
}

#[test]
fn qdot_follows_nullability() {
    assert_eq!(kotlin::long().qdot(), ".");
    assert_eq!(kotlin::long().nullable().qdot(), "?.");
}

#[test]
fn function_shape_parts() {
    let f = kotlin::function(vec![kotlin::int(), kotlin::string()], kotlin::unit());
    assert!(f.is_function());
    assert_eq!(f.name, "Function2");
    assert_eq!(f.function_params(), &[kotlin::int(), kotlin::string()]);
    assert_eq!(f.function_return(), Some(&kotlin::unit()));

    let zero = kotlin::function(vec![], kotlin::boolean());
    assert!(zero.is_function());
    assert!(zero.function_params().is_empty());
}

#[test]
fn non_functions_are_not_functions() {
    assert!(!kotlin::long().is_function());
    assert!(!TypeShape::simple("kotlin", "Function").is_function());
    // A user type that happens to be named FunctionN in another package.
    assert!(!TypeShape::parameterized("foo", "Function1", vec![kotlin::int()]).is_function());
}

#[test]
fn display_is_fully_qualified() {
    assert_eq!(kotlin::long().to_string(), "kotlin.Long");
    assert_eq!(
        kotlin::list(kotlin::long().nullable()).to_string(),
        "kotlin.collections.List<kotlin.Long?>"
    );
    assert_eq!(TypeShape::parameter("T").to_string(), "T");
}

#[test]
fn display_renders_lambda_syntax() {
    let f = kotlin::function(vec![kotlin::int()], kotlin::string());
    assert_eq!(f.to_string(), "(kotlin.Int) -> kotlin.String");

    let nf = kotlin::function(vec![], kotlin::unit()).nullable();
    assert_eq!(nf.to_string(), "(() -> kotlin.Unit)?");
}
