//! Declaration AST nodes.

use bridgen_core::TypeShape;

/// One generated source file: package, imports and top-level declarations.
///
/// Rendering order is types, then functions, then properties.
#[derive(Debug, Clone, Default)]
pub struct File {
    pub package: String,
    /// Simple file name, without extension.
    pub name: String,
    /// Explicit imports; auto-imports for referenced types are added at
    /// render time.
    pub imports: Vec<Import>,
    pub types: Vec<TypeDecl>,
    pub functions: Vec<Function>,
    pub properties: Vec<Property>,
}

impl File {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn render(&self) -> String {
        crate::render::render(self)
    }
}

#[derive(Debug, Clone)]
pub struct Import {
    pub package: String,
    pub name: String,
    pub alias: Option<String>,
}

impl Import {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(
        package: impl Into<String>,
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Internal,
    Private,
    Open,
    Abstract,
    Override,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Internal => "internal",
            Modifier::Private => "private",
            Modifier::Open => "open",
            Modifier::Abstract => "abstract",
            Modifier::Override => "override",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub name: String,
    /// Annotation simple names; imports are the caller's responsibility.
    pub annotations: Vec<String>,
    pub modifiers: Vec<Modifier>,
    pub primary_ctor: Option<Constructor>,
    pub supertypes: Vec<SupertypeClause>,
    pub secondary_ctors: Vec<SecondaryConstructor>,
    pub properties: Vec<Property>,
    pub functions: Vec<Function>,
}

impl TypeDecl {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            primary_ctor: None,
            supertypes: Vec::new(),
            secondary_ctors: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
        }
    }
}

/// Primary constructor.
#[derive(Debug, Clone)]
pub struct Constructor {
    pub modifiers: Vec<Modifier>,
    pub params: Vec<CtorParam>,
}

#[derive(Debug, Clone)]
pub struct CtorParam {
    pub name: String,
    pub ty: TypeShape,
    /// `Some` turns the parameter into a `val`/`var` property.
    pub binding: Option<PropertyBinding>,
}

#[derive(Debug, Clone)]
pub struct PropertyBinding {
    pub mutable: bool,
    pub modifiers: Vec<Modifier>,
}

/// `constructor(params) : this(delegate_args)`
#[derive(Debug, Clone)]
pub struct SecondaryConstructor {
    pub params: Vec<Param>,
    pub delegate_args: Vec<String>,
}

/// One entry of the supertype list. `args: None` renders without
/// parentheses (interface extension); `Some` renders a constructor call.
#[derive(Debug, Clone)]
pub struct SupertypeClause {
    pub ty: TypeShape,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub ty: TypeShape,
    pub mutable: bool,
    pub annotations: Vec<String>,
    pub modifiers: Vec<Modifier>,
    pub initializer: Option<String>,
    /// Getter expression; rendered as `get() = <expr>`.
    pub getter: Option<String>,
    pub setter: Option<Setter>,
}

impl Property {
    pub fn immutable(name: impl Into<String>, ty: TypeShape) -> Self {
        Self {
            name: name.into(),
            ty,
            mutable: false,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            initializer: None,
            getter: None,
            setter: None,
        }
    }
}

/// Setter body; rendered as `set(<param>) { <body> }`.
#[derive(Debug, Clone)]
pub struct Setter {
    pub param: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub annotations: Vec<String>,
    pub modifiers: Vec<Modifier>,
    /// Extension receiver.
    pub receiver: Option<TypeShape>,
    pub params: Vec<Param>,
    pub returns: Option<TypeShape>,
    /// `None` renders an abstract member.
    pub body: Option<Body>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            receiver: None,
            params: Vec::new(),
            returns: None,
            body: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    /// `= <expr>`
    Expression(String),
    /// Braced statement list.
    Block(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: TypeShape,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeShape) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
