//! Plain-text rendering of declaration files.

use std::collections::{BTreeSet, HashMap};

use bridgen_core::TypeShape;
use bridgen_core::naming::escape_identifier;

use crate::ast::{
    Body, File, Function, Import, Property, SupertypeClause, TypeDecl, TypeKind,
};

const INDENT: &str = "    ";

/// Render a file to source text, one trailing newline.
pub fn render(file: &File) -> String {
    let resolver = NameResolver::build(file);
    let mut out = String::new();

    if !file.package.is_empty() {
        out.push_str("package ");
        out.push_str(&file.package);
        out.push_str("\n\n");
    }

    let imports = resolver.render_imports();
    if !imports.is_empty() {
        out.push_str(&imports);
        out.push('\n');
    }

    let mut first = true;
    for decl in &file.types {
        separate(&mut out, &mut first);
        render_type(&mut out, decl, &resolver);
    }
    for function in &file.functions {
        separate(&mut out, &mut first);
        render_function(&mut out, function, &resolver, 0);
    }
    for property in &file.properties {
        separate(&mut out, &mut first);
        render_property(&mut out, property, &resolver, 0);
    }

    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

fn separate(out: &mut String, first: &mut bool) {
    if !*first {
        out.push('\n');
    }
    *first = false;
}

/// Decides, per referenced type, whether it renders as a simple name (local
/// declaration or import) or fully qualified (simple-name collision).
struct NameResolver {
    resolved: HashMap<(String, String), String>,
    imports: Vec<Import>,
}

impl NameResolver {
    fn build(file: &File) -> Self {
        let mut referenced = BTreeSet::new();
        collect_file(file, &mut referenced);

        let mut resolved: HashMap<(String, String), String> = HashMap::new();
        let mut taken: HashMap<String, (String, String)> = HashMap::new();
        let mut imports = Vec::new();

        for decl in &file.types {
            let key = (file.package.clone(), decl.name.clone());
            taken.insert(decl.name.clone(), key.clone());
            resolved.insert(key, decl.name.clone());
        }

        for import in &file.imports {
            let visible = import.alias.clone().unwrap_or_else(|| import.name.clone());
            let key = (import.package.clone(), import.name.clone());
            taken.insert(visible.clone(), key.clone());
            resolved.insert(key, visible);
            imports.push(import.clone());
        }

        for key in referenced {
            if resolved.contains_key(&key) {
                continue;
            }
            let (package, name) = &key;
            if package.is_empty() {
                resolved.insert(key.clone(), name.clone());
                continue;
            }
            if taken.contains_key(name) {
                resolved.insert(key.clone(), format!("{package}.{name}"));
                continue;
            }
            if *package != file.package {
                imports.push(Import::new(package.clone(), name.clone()));
            }
            taken.insert(name.clone(), key.clone());
            resolved.insert(key.clone(), name.clone());
        }

        Self { resolved, imports }
    }

    fn render_imports(&self) -> String {
        let mut plain: Vec<&Import> = self.imports.iter().filter(|i| i.alias.is_none()).collect();
        let mut aliased: Vec<&Import> = self.imports.iter().filter(|i| i.alias.is_some()).collect();
        plain.sort_by(|a, b| (&a.package, &a.name).cmp(&(&b.package, &b.name)));
        aliased.sort_by(|a, b| (&a.package, &a.name).cmp(&(&b.package, &b.name)));

        let mut out = String::new();
        for import in plain.into_iter().chain(aliased) {
            out.push_str("import ");
            out.push_str(&import.package);
            out.push('.');
            out.push_str(&import.name);
            if let Some(alias) = &import.alias {
                out.push_str(" as ");
                out.push_str(alias);
            }
            out.push('\n');
        }
        out
    }

    fn type_text(&self, shape: &TypeShape) -> String {
        if shape.is_function() {
            let params: Vec<String> = shape
                .function_params()
                .iter()
                .map(|p| self.type_text(p))
                .collect();
            let returns = shape
                .function_return()
                .map(|r| self.type_text(r))
                .unwrap_or_default();
            let lambda = format!("({}) -> {}", params.join(", "), returns);
            return if shape.nullable {
                format!("({lambda})?")
            } else {
                lambda
            };
        }

        let key = (shape.package.clone(), shape.name.clone());
        let mut text = self
            .resolved
            .get(&key)
            .cloned()
            .unwrap_or_else(|| shape.qualified_name());
        if !shape.args.is_empty() {
            text.push('<');
            for (i, arg) in shape.args.iter().enumerate() {
                if i > 0 {
                    text.push_str(", ");
                }
                text.push_str(&self.type_text(arg));
            }
            text.push('>');
        }
        if shape.nullable {
            text.push('?');
        }
        text
    }
}

fn collect_file(file: &File, into: &mut BTreeSet<(String, String)>) {
    for decl in &file.types {
        if let Some(ctor) = &decl.primary_ctor {
            for param in &ctor.params {
                collect_shape(&param.ty, into);
            }
        }
        for ctor in &decl.secondary_ctors {
            for param in &ctor.params {
                collect_shape(&param.ty, into);
            }
        }
        for sup in &decl.supertypes {
            collect_shape(&sup.ty, into);
        }
        for property in &decl.properties {
            collect_shape(&property.ty, into);
        }
        for function in &decl.functions {
            collect_function(function, into);
        }
    }
    for function in &file.functions {
        collect_function(function, into);
    }
    for property in &file.properties {
        collect_shape(&property.ty, into);
    }
}

fn collect_function(function: &Function, into: &mut BTreeSet<(String, String)>) {
    if let Some(receiver) = &function.receiver {
        collect_shape(receiver, into);
    }
    for param in &function.params {
        collect_shape(&param.ty, into);
    }
    if let Some(returns) = &function.returns {
        collect_shape(returns, into);
    }
}

fn collect_shape(shape: &TypeShape, into: &mut BTreeSet<(String, String)>) {
    // Function shapes render as lambda syntax, so only their arguments are
    // importable names.
    if !shape.is_function() && !shape.package.is_empty() {
        into.insert((shape.package.clone(), shape.name.clone()));
    }
    for arg in &shape.args {
        collect_shape(arg, into);
    }
}

fn render_type(out: &mut String, decl: &TypeDecl, resolver: &NameResolver) {
    for annotation in &decl.annotations {
        out.push('@');
        out.push_str(annotation);
        out.push('\n');
    }

    for modifier in &decl.modifiers {
        out.push_str(modifier.as_str());
        out.push(' ');
    }
    out.push_str(match decl.kind {
        TypeKind::Class => "class ",
        TypeKind::Interface => "interface ",
    });
    out.push_str(&decl.name);

    if let Some(ctor) = &decl.primary_ctor {
        if !ctor.modifiers.is_empty() {
            out.push(' ');
            for modifier in &ctor.modifiers {
                out.push_str(modifier.as_str());
                out.push(' ');
            }
            out.push_str("constructor");
        }
        out.push('(');
        for (i, param) in ctor.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if let Some(binding) = &param.binding {
                for modifier in &binding.modifiers {
                    out.push_str(modifier.as_str());
                    out.push(' ');
                }
                out.push_str(if binding.mutable { "var " } else { "val " });
            }
            out.push_str(&escape_identifier(&param.name));
            out.push_str(": ");
            out.push_str(&resolver.type_text(&param.ty));
        }
        out.push(')');
    }

    if !decl.supertypes.is_empty() {
        out.push_str(" : ");
        for (i, sup) in decl.supertypes.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            render_supertype(out, sup, resolver);
        }
    }

    let empty_body = decl.secondary_ctors.is_empty()
        && decl.properties.is_empty()
        && decl.functions.is_empty();
    if empty_body {
        out.push('\n');
        return;
    }

    out.push_str(" {\n");
    let mut first = true;
    for ctor in &decl.secondary_ctors {
        separate(out, &mut first);
        out.push_str(INDENT);
        out.push_str("constructor(");
        for (i, param) in ctor.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&escape_identifier(&param.name));
            out.push_str(": ");
            out.push_str(&resolver.type_text(&param.ty));
        }
        out.push_str(") : this(");
        let args = ctor.delegate_args.join(", ");
        append_expr(out, 1, &args);
        out.push_str(")\n");
    }
    for property in &decl.properties {
        separate(out, &mut first);
        render_property(out, property, resolver, 1);
    }
    for function in &decl.functions {
        separate(out, &mut first);
        render_function(out, function, resolver, 1);
    }
    out.push_str("}\n");
}

fn render_supertype(out: &mut String, sup: &SupertypeClause, resolver: &NameResolver) {
    out.push_str(&resolver.type_text(&sup.ty));
    if let Some(args) = &sup.args {
        out.push('(');
        out.push_str(&args.join(", "));
        out.push(')');
    }
}

fn render_property(out: &mut String, property: &Property, resolver: &NameResolver, depth: usize) {
    let indent = INDENT.repeat(depth);
    for annotation in &property.annotations {
        out.push_str(&indent);
        out.push('@');
        out.push_str(annotation);
        out.push('\n');
    }

    out.push_str(&indent);
    for modifier in &property.modifiers {
        out.push_str(modifier.as_str());
        out.push(' ');
    }
    out.push_str(if property.mutable { "var " } else { "val " });
    out.push_str(&escape_identifier(&property.name));
    out.push_str(": ");
    out.push_str(&resolver.type_text(&property.ty));

    if let Some(initializer) = &property.initializer {
        out.push_str(" = ");
        append_expr(out, depth, initializer);
    }
    out.push('\n');

    if let Some(getter) = &property.getter {
        out.push_str(&indent);
        out.push_str(INDENT);
        out.push_str("get() = ");
        append_expr(out, depth + 1, getter);
        out.push('\n');
    }
    if let Some(setter) = &property.setter {
        out.push_str(&indent);
        out.push_str(INDENT);
        out.push_str("set(");
        out.push_str(&setter.param);
        out.push_str(") { ");
        append_expr(out, depth + 1, &setter.body);
        out.push_str(" }\n");
    }
}

fn render_function(out: &mut String, function: &Function, resolver: &NameResolver, depth: usize) {
    let indent = INDENT.repeat(depth);
    for annotation in &function.annotations {
        out.push_str(&indent);
        out.push('@');
        out.push_str(annotation);
        out.push('\n');
    }

    out.push_str(&indent);
    for modifier in &function.modifiers {
        out.push_str(modifier.as_str());
        out.push(' ');
    }
    out.push_str("fun ");
    if let Some(receiver) = &function.receiver {
        out.push_str(&resolver.type_text(receiver));
        out.push('.');
    }
    out.push_str(&escape_identifier(&function.name));
    out.push('(');
    for (i, param) in function.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&escape_identifier(&param.name));
        out.push_str(": ");
        out.push_str(&resolver.type_text(&param.ty));
    }
    out.push(')');
    if let Some(returns) = &function.returns {
        out.push_str(": ");
        out.push_str(&resolver.type_text(returns));
    }

    match &function.body {
        None => out.push('\n'),
        Some(Body::Expression(expr)) => {
            out.push_str(" = ");
            append_expr(out, depth, expr);
            out.push('\n');
        }
        Some(Body::Block(statements)) => {
            out.push_str(" {\n");
            for statement in statements {
                out.push_str(&indent);
                out.push_str(INDENT);
                append_expr(out, depth + 1, statement);
                out.push('\n');
            }
            out.push_str(&indent);
            out.push_str("}\n");
        }
    }
}

/// Appends a possibly multi-line expression; continuation lines are indented
/// to the depth of the line the expression starts on.
fn append_expr(out: &mut String, depth: usize, expr: &str) {
    let indent = INDENT.repeat(depth);
    for (i, line) in expr.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&indent);
        }
        out.push_str(line);
    }
}
