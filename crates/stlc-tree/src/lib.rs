//! The trees shared by the parser and the checker. Both [Term] and [Type]
//! are immutable value trees compared structurally, so a parse result can be
//! checked against a hand-built tree in tests and a typing judgment can
//! return freshly allocated types without identity concerns.
//!
//! The `Display` impls double as the canonical printer: they emit the
//! minimal-parenthesization surface syntax the parser accepts, flattening
//! left-nested application chains and right-nested arrow, sum and product
//! chains instead of re-wrapping them.

pub mod term;
pub mod ty;

use std::fmt::{self, Display};

pub use term::{Clause, Field, Term};
pub use ty::Type;

/// Label-keyed members of records, record types and variant types. Insertion
/// order is what the printer shows, but `==` ignores it, mirroring the
/// permutation-insensitive semantics of the label maps.
pub type LabelMap<T> = indexmap::IndexMap<String, T>;

/// A whole input: the surface syntax of terms and types is disjoint enough
/// that one source string is either one or the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Term(Term),
    Type(Type),
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(term) => write!(f, "{}", term),
            Self::Type(ty) => write!(f, "{}", ty),
        }
    }
}
