//! Java bean accessor classification.
//!
//! Given a resolved method declaration from `beanlens-tree`, the functions
//! here decide whether it is the canonical getter or setter of a field of its
//! own class, derive the accessor names a field implies, and map modifiers
//! onto Java's four visibility tiers. The decisions are structural: the body
//! must actually read or write a field the declaring class owns, with the
//! matching type and derived name; a well-named method over the wrong field
//! does not count.
//!
//! Every function is total. Malformed or partially-resolved input classifies
//! as "no match"; nothing here panics or allocates beyond the derived names.
//!
//! The intended caller is a transformation engine visiting candidate methods
//! during a tree traversal it controls.

use std::fmt;

use serde::{Deserialize, Serialize};

mod classify;
mod names;

pub use classify::{access_level, is_getter, is_setter};
pub use names::{capitalize, decapitalize, derive_getter_name, derive_setter_name, property_name};

/// Java's four visibility tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    Public,
    Protected,
    Package,
    Private,
}

impl AccessLevel {
    /// Constant-style spelling, usable as an annotation argument.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Public => "PUBLIC",
            AccessLevel::Protected => "PROTECTED",
            AccessLevel::Package => "PACKAGE",
            AccessLevel::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
