//! Resolved Java type descriptors shared across beanlens crates.
//!
//! The tree in `beanlens-tree` links identifiers and methods back to the
//! declarations resolution found for them. Those links carry two different
//! equality notions, and the classifiers depend on the difference:
//!
//! - *identity* ([`JavaType::is_same`]): primitives are singletons and compare
//!   by variant; class types compare by pointer identity of the shared
//!   descriptor. Descriptors produced by one resolution pass relate to each
//!   other this way.
//! - *structural* (`==`): class types compare by fully-qualified name.
//!
//! Collapsing the two changes classifier outcomes on types that are
//! structurally equal but not the same descriptor instance.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Java's eight primitive types plus `void`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
}

impl Primitive {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
            Primitive::Void => "void",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A resolved class, interface, enum, or record type.
///
/// One descriptor is allocated per declaration and shared through an [`Arc`];
/// identity comparisons go through the pointer, structural comparisons through
/// the fully-qualified name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ClassType {
    fully_qualified_name: String,
}

impl ClassType {
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
        }
    }

    #[must_use]
    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    /// Name after the last `.` or `$` separator.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.fully_qualified_name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(&self.fully_qualified_name)
    }
}

impl fmt::Debug for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassType({})", self.fully_qualified_name)
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name)
    }
}

/// A resolved Java type: a primitive singleton or a shared class descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Primitive(Primitive),
    Class(Arc<ClassType>),
}

impl JavaType {
    /// A class type with a fresh descriptor.
    pub fn class(fully_qualified_name: impl Into<String>) -> JavaType {
        JavaType::Class(Arc::new(ClassType::new(fully_qualified_name)))
    }

    #[must_use]
    pub fn boolean() -> JavaType {
        JavaType::Primitive(Primitive::Boolean)
    }

    #[must_use]
    pub fn int() -> JavaType {
        JavaType::Primitive(Primitive::Int)
    }

    #[must_use]
    pub fn void() -> JavaType {
        JavaType::Primitive(Primitive::Void)
    }

    #[must_use]
    pub fn is_primitive_boolean(&self) -> bool {
        matches!(self, JavaType::Primitive(Primitive::Boolean))
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, JavaType::Primitive(Primitive::Void))
    }

    /// Identity comparison of resolved descriptors.
    ///
    /// Primitives are singletons; class types must be the same `Arc`. Two
    /// descriptors with the same fully-qualified name from different
    /// resolution passes are `==` but not the same.
    #[must_use]
    pub fn is_same(&self, other: &JavaType) -> bool {
        match (self, other) {
            (JavaType::Primitive(a), JavaType::Primitive(b)) => a == b,
            (JavaType::Class(a), JavaType::Class(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(p) => fmt::Display::fmt(p, f),
            JavaType::Class(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// Resolved linkage from an identifier or field access back to the field
/// declaration it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub name: String,
    /// Type that declares the field, when resolution found one.
    pub owner: Option<JavaType>,
    /// Declared type of the field, when resolution found one.
    pub ty: Option<JavaType>,
}

impl FieldRef {
    pub fn new(name: impl Into<String>, owner: JavaType, ty: JavaType) -> Self {
        Self {
            name: name.into(),
            owner: Some(owner),
            ty: Some(ty),
        }
    }

    /// Whether the field's owner is the given declaring type.
    ///
    /// Identity comparison; an unresolved owner never matches.
    #[must_use]
    pub fn is_owned_by(&self, declaring_type: &JavaType) -> bool {
        self.owner
            .as_ref()
            .is_some_and(|owner| owner.is_same(declaring_type))
    }
}

/// Resolved metadata of a method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodType {
    /// Type that declares the method.
    pub declaring_type: JavaType,
}

impl MethodType {
    pub fn new(declaring_type: JavaType) -> Self {
        Self { declaring_type }
    }
}
