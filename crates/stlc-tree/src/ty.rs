//! The types of the calculus. Base forms, arrows, the structural composites
//! and the `Top` of the subtype lattice.

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::LabelMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Boolean,
    Natural,
    Unit,
    Top,
    Base(String),
    Function(Box<Type>, Box<Type>),
    Product(Box<Type>, Box<Type>),
    Sum(Box<Type>, Box<Type>),
    Tuple(Vec<Type>),
    Record(LabelMap<Type>),
    Variant(LabelMap<Type>),
    List(Box<Type>),
    Ref(Box<Type>),
}

impl Type {
    pub fn base(name: impl Into<String>) -> Self {
        Self::Base(name.into())
    }

    pub fn func(from: Self, to: Self) -> Self {
        Self::Function(Box::new(from), Box::new(to))
    }

    pub fn product(left: Self, right: Self) -> Self {
        Self::Product(Box::new(left), Box::new(right))
    }

    pub fn sum(left: Self, right: Self) -> Self {
        Self::Sum(Box::new(left), Box::new(right))
    }

    pub fn list(elem: Self) -> Self {
        Self::List(Box::new(elem))
    }

    pub fn reference(elem: Self) -> Self {
        Self::Ref(Box::new(elem))
    }

    /// Builds a record type from labeled members. A repeated label keeps its
    /// first position and the last assigned type.
    pub fn record<S, I>(members: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Self)>,
    {
        Self::Record(members.into_iter().map(|(l, t)| (l.into(), t)).collect())
    }

    /// Builds a variant type from labeled clauses, with the same duplicate
    /// policy as [Type::record].
    pub fn variant<S, I>(clauses: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Self)>,
    {
        Self::Variant(clauses.into_iter().map(|(l, t)| (l.into(), t)).collect())
    }

    /// Binding tightness of the outermost constructor: arrows bind loosest,
    /// then sums, then products; everything else is atomic. The printer
    /// wraps a child in parentheses exactly when its precedence is below
    /// what its slot requires.
    fn precedence(&self) -> u8 {
        match self {
            Self::Function(..) => 1,
            Self::Sum(..) => 2,
            Self::Product(..) => 3,
            _ => 4,
        }
    }
}

/// A type printed with parentheses if it binds looser than its slot allows.
struct Prec<'a>(&'a Type, u8);

impl Display for Prec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.precedence() < self.1 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "Bool"),
            Self::Natural => write!(f, "Nat"),
            Self::Unit => write!(f, "Unit"),
            Self::Top => write!(f, "Top"),
            Self::Base(name) => write!(f, "{}", name),

            // The infix chains are right-associative, so the right child
            // prints bare at the same level and chains come out flat.
            Self::Function(from, to) => write!(f, "{} → {}", Prec(from, 2), Prec(to, 1)),
            Self::Sum(left, right) => write!(f, "{} + {}", Prec(left, 3), Prec(right, 2)),
            Self::Product(left, right) => write!(f, "{} × {}", Prec(left, 4), Prec(right, 3)),

            Self::Tuple(members) => write!(f, "{{{}}}", members.iter().join(", ")),

            Self::Record(members) => write!(
                f,
                "{{{}}}",
                members.iter().map(|(l, t)| format!("{}: {}", l, t)).join(", ")
            ),

            Self::Variant(clauses) => write!(
                f,
                "<{}>",
                clauses.iter().map(|(l, t)| format!("{}: {}", l, t)).join(", ")
            ),

            Self::List(elem) => write!(f, "List {}", Prec(elem, 4)),
            Self::Ref(elem) => write!(f, "Ref {}", Prec(elem, 4)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_chains_print_flat() {
        let ty = Type::func(Type::Boolean, Type::func(Type::Boolean, Type::Boolean));
        assert_eq!(ty.to_string(), "Bool → Bool → Bool");
    }

    #[test]
    fn left_nested_arrows_keep_their_parens() {
        let ty = Type::func(Type::func(Type::Boolean, Type::Boolean), Type::Boolean);
        assert_eq!(ty.to_string(), "(Bool → Bool) → Bool");
    }

    #[test]
    fn infix_precedence_is_arrow_sum_product() {
        let ty = Type::func(
            Type::sum(Type::product(Type::Boolean, Type::Natural), Type::Unit),
            Type::Top,
        );
        assert_eq!(ty.to_string(), "Bool × Nat + Unit → Top");

        let ty = Type::product(Type::sum(Type::Boolean, Type::Natural), Type::Unit);
        assert_eq!(ty.to_string(), "(Bool + Nat) × Unit");
    }

    #[test]
    fn record_equality_ignores_order() {
        let a = Type::record([("x", Type::Boolean), ("y", Type::Natural)]);
        let b = Type::record([("y", Type::Natural), ("x", Type::Boolean)]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "{x: Bool, y: Nat}");
        assert_eq!(b.to_string(), "{y: Nat, x: Bool}");
    }

    #[test]
    fn duplicate_labels_keep_the_last_type() {
        let ty = Type::record([("x", Type::Boolean), ("x", Type::Natural)]);
        assert_eq!(ty, Type::record([("x", Type::Natural)]));
    }

    #[test]
    fn list_argument_wraps_compound_types() {
        assert_eq!(Type::list(Type::Boolean).to_string(), "List Bool");
        assert_eq!(
            Type::list(Type::func(Type::Boolean, Type::Boolean)).to_string(),
            "List (Bool → Bool)"
        );
        assert_eq!(
            Type::list(Type::list(Type::Natural)).to_string(),
            "List List Nat"
        );
    }
}
