//! The typing context: the bindings from variable names to types on the
//! left side of a judgment.

use std::fmt::{self, Display};

use itertools::Itertools;
use stlc_tree::Type;

/// An immutable mapping from variable names to their assumed types.
/// Extension is non-destructive, so the two arms of an `if` or the clauses
/// of a `case` each see the context as it was outside of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ctx {
    map: im_rc::HashMap<String, Type>,
}

impl Ctx {
    /// Returns a context with one more binding, leaving `self` untouched.
    pub fn extend(&self, name: impl Into<String>, ty: Type) -> Self {
        Self {
            map: self.map.update(name.into(), ty),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.map.get(name).cloned()
    }
}

impl<S: Into<String>> FromIterator<(S, Type)> for Ctx {
    fn from_iter<I: IntoIterator<Item = (S, Type)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(n, t)| (n.into(), t)).collect(),
        }
    }
}

impl Display for Ctx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self
            .map
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(name, ty)| format!("{}: {}", name, ty))
            .join(", ");
        write!(f, "{{{}}}", bindings)
    }
}
