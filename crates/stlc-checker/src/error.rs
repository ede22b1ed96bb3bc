//! The ways a judgment can fail. Checking is fail-fast: the first ill-typed
//! subterm aborts the whole judgment with exactly one of these values.

use std::fmt::{self, Display};

use stlc_tree::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    UnknownVariable(String),
    NonBooleanCondition(Type),
    NonAbstraction(Type),
    ArgumentMismatch { expected: Type, found: Type },
    NonNaturalOperand(Type),
    NotAProduct(Type),
    NotARecord(Type),
    UnknownField(String),
    OutOfBoundsProjection { index: usize, size: usize },
    UnannotatedInjection,
    NotASum(Type),
    BadInjection { expected: Type, found: Type },
    ArmMismatch { left: Type, right: Type },
    NotAVariant(Type),
    MissingClause(String),
    UnknownClause(String),
    NotAList(Type),
    NoMeet(Type, Type),
}

impl Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariable(name) => write!(f, "unknown variable '{}'", name),
            Self::NonBooleanCondition(ty) => write!(f, "non-boolean condition of type '{}'", ty),
            Self::NonAbstraction(ty) => {
                write!(f, "cannot apply a non-abstraction of type '{}'", ty)
            }
            Self::ArgumentMismatch { expected, found } => {
                write!(f, "argument mismatch: expected '{}', found '{}'", expected, found)
            }
            Self::NonNaturalOperand(ty) => write!(f, "expected a Nat operand, found '{}'", ty),
            Self::NotAProduct(ty) => {
                write!(f, "cannot project a position out of type '{}'", ty)
            }
            Self::NotARecord(ty) => write!(f, "cannot project a field out of type '{}'", ty),
            Self::UnknownField(label) => write!(f, "unknown field '{}'", label),
            Self::OutOfBoundsProjection { index, size } => {
                write!(f, "projection index {} is out of bounds for {} components", index, size)
            }
            Self::UnannotatedInjection => {
                write!(f, "injection is missing its sum type ascription")
            }
            Self::NotASum(ty) => write!(f, "expected a sum type, found '{}'", ty),
            Self::BadInjection { expected, found } => {
                write!(f, "bad injection: expected '{}', found '{}'", expected, found)
            }
            Self::ArmMismatch { left, right } => {
                write!(f, "mismatching arms: '{}' and '{}'", left, right)
            }
            Self::NotAVariant(ty) => write!(f, "expected a variant type, found '{}'", ty),
            Self::MissingClause(label) => write!(f, "missing clause for label '{}'", label),
            Self::UnknownClause(label) => {
                write!(f, "clause label '{}' is not part of the variant", label)
            }
            Self::NotAList(ty) => {
                write!(f, "expected a list of the annotated element type, found '{}'", ty)
            }
            Self::NoMeet(a, b) => write!(f, "no meet of '{}' and '{}'", a, b),
        }
    }
}

impl std::error::Error for TypeError {}
