//! The type mapping registry.
//!
//! A registry is built once, before any transformation, and never mutated
//! afterwards; rule closures receive the registry back on invocation, so a
//! rule may map its own nested shapes through the same table (the function
//! rule does exactly that) without any partial-construction hazard.
//!
//! Lookup contract: exact rules first, keyed by package and simple name
//! (type arguments and nullability ignored); if none matches, predicate
//! rules in registration order; first satisfied rule wins. Callers rely on
//! this ordering for overlapping matches: the `LongArray` rule must win
//! over the generic array rule.

use bridgen_core::TypeShape;
use indexmap::IndexMap;

type ShapeFn = Box<dyn Fn(&TypeRegistry, &TypeShape) -> TypeShape + Send + Sync>;
type ExprFn = Box<dyn Fn(&TypeRegistry, &str, &TypeShape) -> String + Send + Sync>;
type PredicateFn = Box<dyn Fn(&TypeShape) -> bool + Send + Sync>;

/// How one family of types crosses the boundary: its exported shape and the
/// two conversion-snippet generators.
pub struct MappingRule {
    exported: ShapeFn,
    import: ExprFn,
    export: ExprFn,
}

impl MappingRule {
    /// `import`/`export` receive the source-text expression currently
    /// holding the value plus its native shape, and return the converted
    /// expression.
    pub fn new(
        exported: impl Fn(&TypeRegistry, &TypeShape) -> TypeShape + Send + Sync + 'static,
        import: impl Fn(&TypeRegistry, &str, &TypeShape) -> String + Send + Sync + 'static,
        export: impl Fn(&TypeRegistry, &str, &TypeShape) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            exported: Box::new(exported),
            import: Box::new(import),
            export: Box::new(export),
        }
    }

    /// Directly exportable: same shape, no conversion code.
    pub fn identity() -> Self {
        Self::new(
            |_, shape| shape.clone(),
            |_, target, _| target.to_string(),
            |_, target, _| target.to_string(),
        )
    }
}

/// Exact-rule key: structural match on package and simple name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ExactKey {
    package: String,
    name: String,
}

impl ExactKey {
    fn of(shape: &TypeShape) -> Self {
        Self {
            package: shape.package.clone(),
            name: shape.name.clone(),
        }
    }
}

pub struct TypeRegistry {
    exact: IndexMap<ExactKey, MappingRule>,
    predicates: Vec<(PredicateFn, MappingRule)>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl TypeRegistry {
    /// Registry with no rules at all; every shape maps as identity.
    pub fn empty() -> Self {
        Self {
            exact: IndexMap::new(),
            predicates: Vec::new(),
        }
    }

    /// Registry with the built-in rule set installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        crate::builtin::install(&mut registry);
        registry
    }

    /// Registers an exact rule for `shape`'s package and simple name. A
    /// later registration for the same key replaces the earlier one.
    pub fn register_exact(&mut self, shape: &TypeShape, rule: MappingRule) {
        self.exact.insert(ExactKey::of(shape), rule);
    }

    /// Registers a structural rule, checked after all exact rules in
    /// registration order.
    pub fn register_predicate(
        &mut self,
        predicate: impl Fn(&TypeShape) -> bool + Send + Sync + 'static,
        rule: MappingRule,
    ) {
        self.predicates.push((Box::new(predicate), rule));
    }

    fn rule_for(&self, shape: &TypeShape) -> Option<&MappingRule> {
        if let Some(rule) = self.exact.get(&ExactKey::of(shape)) {
            return Some(rule);
        }
        self.predicates
            .iter()
            .find(|(predicate, _)| predicate(shape))
            .map(|(_, rule)| rule)
    }

    pub fn has_rule(&self, shape: &TypeShape) -> bool {
        self.rule_for(shape).is_some()
    }

    /// The shape visible on the exported side. Shapes with no rule map to
    /// themselves; nullability of the source shape is preserved.
    pub fn exported_shape(&self, shape: &TypeShape) -> TypeShape {
        match self.rule_for(shape) {
            Some(rule) => {
                let mapped = (rule.exported)(self, shape);
                if shape.nullable {
                    mapped.with_nullability(true)
                } else {
                    mapped
                }
            }
            None => shape.clone(),
        }
    }

    /// Expression converting `target` from its exported representation back
    /// to the native one.
    pub fn import_expr(&self, target: &str, shape: &TypeShape) -> String {
        match self.rule_for(shape) {
            Some(rule) => (rule.import)(self, target, shape),
            None => target.to_string(),
        }
    }

    /// Expression converting the native `target` into its exported
    /// representation.
    pub fn export_expr(&self, target: &str, shape: &TypeShape) -> String {
        match self.rule_for(shape) {
            Some(rule) => (rule.export)(self, target, shape),
            None => target.to_string(),
        }
    }

    /// True when no conversion code is needed in either direction.
    pub fn is_identity(&self, shape: &TypeShape) -> bool {
        self.import_expr("it", shape) == "it" && self.export_expr("it", shape) == "it"
    }

    /// A shape is exportable when a rule covers it (and, recursively, its
    /// arguments) or when it is argument-free and can pass through as-is.
    /// The offending shape comes back otherwise.
    pub fn ensure_exportable(&self, shape: &TypeShape) -> Result<(), TypeShape> {
        if self.rule_for(shape).is_some() {
            for arg in &shape.args {
                self.ensure_exportable(arg)?;
            }
            Ok(())
        } else if shape.args.is_empty() {
            Ok(())
        } else {
            Err(shape.clone())
        }
    }
}
