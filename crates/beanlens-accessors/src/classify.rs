//! Structural getter/setter classification and access-level mapping.
//!
//! The checks follow the Java-bean shape exactly: signature first, then the
//! single-statement body, then the resolution metadata of the referenced
//! field, and finally the derived name. Each check that fails classifies the
//! method as a non-match; unresolved links never escalate to errors.

use beanlens_tree::{Expr, MethodDecl, Modifier, Param, Stmt};
use beanlens_types::JavaType;

use crate::names::{derive_getter_name, derive_setter_name};
use crate::AccessLevel;

/// Whether `method` is the canonical getter of a field of its own class.
///
/// A getter takes no parameters, declares a return type, and its body is a
/// single `return` of a field owned by the method's declaring type, either as
/// a bare identifier or behind one qualifier level (`this.field`). The
/// resolved return type must be the field's type (same descriptor), and the
/// method name must be the derived getter name, including the boolean `is`
/// special case.
#[must_use]
pub fn is_getter(method: &MethodDecl) -> bool {
    let Some(declaring_type) = method.declaring_type() else {
        return false;
    };
    // Signature: no parameters and a declared return type.
    if !matches!(method.params.first(), Some(Param::Empty)) || method.return_type.is_none() {
        return false;
    }
    // Body: exactly one statement, a return.
    let Some(body) = &method.body else {
        return false;
    };
    let [Stmt::Return(ret)] = body.statements.as_slice() else {
        return false;
    };
    match &ret.expr {
        Some(Expr::Ident(ident)) => {
            ident
                .field_ref
                .as_ref()
                .is_some_and(|field| field.is_owned_by(declaring_type))
                && returns_matching_field(method, ident.ty.as_ref(), &ident.name)
        }
        // The `this.field` shape. A deeper qualifier (`Outer.this.field`)
        // leaves the target a field access and falls through.
        Some(Expr::FieldAccess(access)) => match access.target.as_ref() {
            Expr::Ident(target) => {
                target
                    .field_ref
                    .as_ref()
                    .is_some_and(|field| field.is_owned_by(declaring_type))
                    && returns_matching_field(method, access.ty.as_ref(), &access.name)
            }
            _ => false,
        },
        _ => false,
    }
}

/// Return type must be the field's resolved type (same descriptor, not just
/// structurally equal) and the method name the derived accessor name.
fn returns_matching_field(
    method: &MethodDecl,
    field_ty: Option<&JavaType>,
    field_name: &str,
) -> bool {
    match (method.ty(), field_ty) {
        (Some(return_ty), Some(field_ty)) if return_ty.is_same(field_ty) => {
            method.name == derive_getter_name(Some(field_ty), field_name)
        }
        _ => false,
    }
}

/// Whether `method` is the canonical setter of a field of its own class.
///
/// A setter returns `void`, takes exactly one parameter whose type equals the
/// field's type (structural equality, unlike the getter's descriptor-identity
/// check), and its body is a single assignment to a field owned by the
/// method's declaring type.
#[must_use]
pub fn is_setter(method: &MethodDecl) -> bool {
    // Return type: void.
    if !method.ty().is_some_and(JavaType::is_void) {
        return false;
    }
    // Signature: exactly one real parameter.
    let [Param::Decl(param)] = method.params.as_slice() else {
        return false;
    };
    // Body: exactly one statement, an assignment.
    let Some(body) = &method.body else {
        return false;
    };
    let [Stmt::Assign(assign)] = body.statements.as_slice() else {
        return false;
    };
    // An assignment target that is not a field access cannot name a field the
    // class owns; the host tree handed us something surprising.
    let Expr::FieldAccess(assigned) = &assign.target else {
        tracing::debug!(
            method = %method.name,
            "assignment target is not a field access; not a setter"
        );
        return false;
    };
    if method.name != derive_setter_name(&assigned.name) {
        return false;
    }
    // Parameter type and field type must match structurally.
    let types_match = param
        .ty
        .as_ref()
        .zip(assigned.ty.as_ref())
        .is_some_and(|(param_ty, field_ty)| param_ty == field_ty);
    if !types_match {
        return false;
    }
    // The assigned field must belong to the method's own class. The target is
    // the qualifier of the written field: a bare identifier (`this.x`) or one
    // more field-access level (`Outer.this.x`); anything deeper falls through.
    let Some(declaring_type) = method.declaring_type() else {
        return false;
    };
    match assigned.target.as_ref() {
        Expr::Ident(target) => target
            .field_ref
            .as_ref()
            .is_some_and(|field| field.is_owned_by(declaring_type)),
        Expr::FieldAccess(qualifier) => match qualifier.target.as_ref() {
            Expr::Ident(target) => target
                .field_ref
                .as_ref()
                .is_some_and(|field| field.is_owned_by(declaring_type)),
            _ => false,
        },
        _ => false,
    }
}

/// Visibility tier implied by a method's modifiers.
///
/// A well-formed declaration carries at most one of the three explicit access
/// modifiers; the priority order here is a safety net, not a semantic rule.
/// No explicit modifier means package-private.
#[must_use]
pub fn access_level(method: &MethodDecl) -> AccessLevel {
    if method.has_modifier(Modifier::Public) {
        AccessLevel::Public
    } else if method.has_modifier(Modifier::Protected) {
        AccessLevel::Protected
    } else if method.has_modifier(Modifier::Private) {
        AccessLevel::Private
    } else {
        AccessLevel::Package
    }
}
