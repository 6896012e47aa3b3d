//! Typed method-level syntax tree consumed by the accessor classifiers.
//!
//! This is a *semantic* view of a method declaration: nodes carry the
//! resolution links the classifiers need (field references, declaring types,
//! resolved types) and no source ranges. Statements and expressions are
//! closed enums, so shape checks are exhaustive matches where "no shape
//! matched" is an ordinary fallthrough arm.
//!
//! Resolution links that may legitimately be absent (unresolved code,
//! in-progress indexing) are `Option`s; consumers are expected to treat
//! absence as "no match", never as an error.

use beanlens_types::{FieldRef, JavaType, MethodType};
use serde::{Deserialize, Serialize};

/// Java modifier keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Synchronized,
    Native,
    Strictfp,
    Default,
    Transient,
    Volatile,
}

/// A declared type expression together with its resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Source text of the type expression, e.g. `int` or `List<String>`.
    pub text: String,
    pub ty: Option<JavaType>,
}

impl TypeRef {
    pub fn resolved(ty: JavaType) -> Self {
        Self {
            text: ty.to_string(),
            ty: Some(ty),
        }
    }

    pub fn unresolved(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ty: None,
        }
    }
}

/// A method declaration with its resolution metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodDecl {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    /// Parameter list. A method declared with empty parentheses holds a
    /// single [`Param::Empty`] marker rather than an empty list.
    pub params: Vec<Param>,
    /// Declared return type; `None` for constructors.
    pub return_type: Option<TypeRef>,
    /// `None` for abstract and interface methods.
    pub body: Option<Block>,
    pub method_type: Option<MethodType>,
}

impl MethodDecl {
    /// Resolved return type, when one is declared and resolved.
    #[must_use]
    pub fn ty(&self) -> Option<&JavaType> {
        self.return_type.as_ref().and_then(|ret| ret.ty.as_ref())
    }

    /// Type declaring this method, when resolution found one.
    #[must_use]
    pub fn declaring_type(&self) -> Option<&JavaType> {
        self.method_type.as_ref().map(|m| &m.declaring_type)
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

/// One slot of a method's parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Marker occupying the list of a method declared with `()`.
    Empty,
    Decl(VarDecl),
}

/// A single named variable with its resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub name: String,
    pub ty: Option<JavaType>,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    /// Block holding exactly one statement.
    pub fn single(statement: Stmt) -> Self {
        Self {
            statements: vec![statement],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    LocalVar(LocalVarStmt),
    Expr(ExprStmt),
    Return(ReturnStmt),
    Assign(AssignStmt),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVarStmt {
    pub name: String,
    pub ty: Option<JavaType>,
    pub initializer: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStmt {
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub expr: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub target: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(Ident),
    FieldAccess(FieldAccess),
    Literal(Literal),
    Call(Call),
}

impl Expr {
    /// Resolved type of the expression, when resolution found one.
    #[must_use]
    pub fn ty(&self) -> Option<&JavaType> {
        match self {
            Expr::Ident(expr) => expr.ty.as_ref(),
            Expr::FieldAccess(expr) => expr.ty.as_ref(),
            Expr::Literal(expr) => expr.ty.as_ref(),
            Expr::Call(expr) => expr.ty.as_ref(),
        }
    }
}

/// A simple name, possibly bound to a field by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub ty: Option<JavaType>,
    /// Present when resolution bound this identifier to a field. The `this`
    /// receiver of a qualified field access is bound the same way, with the
    /// enclosing class as owner.
    pub field_ref: Option<FieldRef>,
}

impl Ident {
    /// An identifier resolution could not bind.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            field_ref: None,
        }
    }

    /// An identifier bound to a field; the expression type is the field type.
    pub fn field(name: impl Into<String>, field_ref: FieldRef) -> Self {
        Self {
            name: name.into(),
            ty: field_ref.ty.clone(),
            field_ref: Some(field_ref),
        }
    }

    /// The `this` receiver inside the given class.
    pub fn this(class: JavaType) -> Self {
        Self {
            name: "this".into(),
            ty: Some(class.clone()),
            field_ref: Some(FieldRef::new("this", class.clone(), class)),
        }
    }
}

/// `target.name`, covering both `this.x` and qualified outer-class access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccess {
    pub target: Box<Expr>,
    pub name: String,
    pub ty: Option<JavaType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Bool,
    Int,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: String,
    pub ty: Option<JavaType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub ty: Option<JavaType>,
}
