//! Recursive type shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural description of a source type: package qualifier, simple name,
/// ordered type arguments and nullability.
///
/// Two shapes are equal iff all four components match; type arguments compare
/// pairwise, order-sensitive. Generic parameters are shapes with an empty
/// package and no arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeShape {
    #[serde(default)]
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub args: Vec<TypeShape>,
    #[serde(default)]
    pub nullable: bool,
}

impl TypeShape {
    pub fn simple(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    pub fn parameterized(
        package: impl Into<String>,
        name: impl Into<String>,
        args: Vec<TypeShape>,
    ) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            args,
            nullable: false,
        }
    }

    /// Shape for a generic parameter such as `T`.
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::simple("", name)
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_nullability(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Null-safe member accessor for conversion snippets.
    pub fn qdot(&self) -> &'static str {
        if self.nullable { "?." } else { "." }
    }

    pub fn first_arg(&self) -> Option<&TypeShape> {
        self.args.first()
    }

    /// True for `kotlin.FunctionN` shapes (arity N, last argument is the
    /// return type).
    pub fn is_function(&self) -> bool {
        self.package == "kotlin"
            && !self.args.is_empty()
            && self
                .name
                .strip_prefix("Function")
                .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }

    /// Parameter shapes of a function shape, empty otherwise.
    pub fn function_params(&self) -> &[TypeShape] {
        if self.is_function() {
            &self.args[..self.args.len() - 1]
        } else {
            &[]
        }
    }

    /// Return shape of a function shape.
    pub fn function_return(&self) -> Option<&TypeShape> {
        if self.is_function() {
            self.args.last()
        } else {
            None
        }
    }

    pub fn is_generic_parameter(&self) -> bool {
        self.package.is_empty() && self.args.is_empty()
    }

    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

/// Renders fully-qualified Kotlin source text. Function shapes render in
/// lambda syntax, parenthesized when nullable.
impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_function() {
            if let Some(ret) = self.args.last() {
                if self.nullable {
                    f.write_str("(")?;
                }
                f.write_str("(")?;
                for (i, param) in self.function_params().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> {ret}")?;
                if self.nullable {
                    f.write_str(")?")?;
                }
                return Ok(());
            }
        }

        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
