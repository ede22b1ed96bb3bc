//! The terms of the calculus, from the pure lambda core up to records,
//! sums, labeled variants and the list operators.

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{LabelMap, Type};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Var(String),
    Abs(String, Type, Box<Term>),
    App(Box<Term>, Box<Term>),
    True,
    False,
    If(Box<Term>, Box<Term>, Box<Term>),
    Zero,
    Succ(Box<Term>),
    Pred(Box<Term>),
    IsZero(Box<Term>),
    Unit,
    Seq(Box<Term>, Box<Term>),
    Ascribe(Box<Term>, Type),
    Let(String, Box<Term>, Box<Term>),
    Project(Box<Term>, Field),
    Pair(Box<Term>, Box<Term>),
    Tuple(Vec<Term>),
    Record(LabelMap<Term>),
    /// Left injection into a sum. Parsed bare, the type is `None` until an
    /// enclosing ascription fills it in.
    Inl(Box<Term>, Option<Type>),
    Inr(Box<Term>, Option<Type>),
    SumCase(Box<Term>, Clause, Clause),
    VarCase(Box<Term>, LabelMap<Clause>),
    Nil(Type),
    Cons(Type, Box<Term>, Box<Term>),
    IsNil(Type, Box<Term>),
    Head(Type, Box<Term>),
    Tail(Type, Box<Term>),
}

/// What a projection selects: a 1-based position in a pair or tuple, or a
/// field label in a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Index(usize),
    Label(String),
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Label(l) => write!(f, "{}", l),
        }
    }
}

/// One arm of a `case`: the variable it binds and the body it runs. The
/// body is boxed so `Term` and `Clause` do not contain each other inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub param: String,
    pub body: Box<Term>,
}

impl Clause {
    pub fn new(param: impl Into<String>, body: Term) -> Self {
        Self {
            param: param.into(),
            body: Box::new(body),
        }
    }
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn abs(param: impl Into<String>, ty: Type, body: Self) -> Self {
        Self::Abs(param.into(), ty, Box::new(body))
    }

    pub fn app(fun: Self, arg: Self) -> Self {
        Self::App(Box::new(fun), Box::new(arg))
    }

    pub fn ite(cond: Self, then: Self, els: Self) -> Self {
        Self::If(Box::new(cond), Box::new(then), Box::new(els))
    }

    pub fn succ(n: Self) -> Self {
        Self::Succ(Box::new(n))
    }

    pub fn pred(n: Self) -> Self {
        Self::Pred(Box::new(n))
    }

    pub fn is_zero(n: Self) -> Self {
        Self::IsZero(Box::new(n))
    }

    pub fn seq(first: Self, second: Self) -> Self {
        Self::Seq(Box::new(first), Box::new(second))
    }

    pub fn ascribe(term: Self, ty: Type) -> Self {
        Self::Ascribe(Box::new(term), ty)
    }

    pub fn let_in(name: impl Into<String>, bound: Self, body: Self) -> Self {
        Self::Let(name.into(), Box::new(bound), Box::new(body))
    }

    pub fn project(object: Self, field: Field) -> Self {
        Self::Project(Box::new(object), field)
    }

    pub fn pair(left: Self, right: Self) -> Self {
        Self::Pair(Box::new(left), Box::new(right))
    }

    /// Builds a record from labeled members. A repeated label keeps its
    /// first position and the last assigned term.
    pub fn record<S, I>(members: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Self)>,
    {
        Self::Record(members.into_iter().map(|(l, t)| (l.into(), t)).collect())
    }

    pub fn inl(term: Self, ty: Option<Type>) -> Self {
        Self::Inl(Box::new(term), ty)
    }

    pub fn inr(term: Self, ty: Option<Type>) -> Self {
        Self::Inr(Box::new(term), ty)
    }

    pub fn sum_case(scrutinee: Self, left: Clause, right: Clause) -> Self {
        Self::SumCase(Box::new(scrutinee), left, right)
    }

    pub fn var_case<S, I>(scrutinee: Self, clauses: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Clause)>,
    {
        Self::VarCase(
            Box::new(scrutinee),
            clauses.into_iter().map(|(l, c)| (l.into(), c)).collect(),
        )
    }

    pub fn cons(elem: Type, head: Self, tail: Self) -> Self {
        Self::Cons(elem, Box::new(head), Box::new(tail))
    }

    pub fn is_nil(elem: Type, arg: Self) -> Self {
        Self::IsNil(elem, Box::new(arg))
    }

    pub fn head(elem: Type, arg: Self) -> Self {
        Self::Head(elem, Box::new(arg))
    }

    pub fn tail(elem: Type, arg: Self) -> Self {
        Self::Tail(elem, Box::new(arg))
    }

    /// Binding tightness of the outermost form, mirroring the grammar
    /// levels: atoms, projection paths, application (which covers the
    /// keyword operators), ascription, sequencing, and the open-ended forms
    /// that extend to the right.
    fn precedence(&self) -> u8 {
        match self {
            Self::Var(_)
            | Self::True
            | Self::False
            | Self::Zero
            | Self::Unit
            | Self::Pair(..)
            | Self::Tuple(_)
            | Self::Record(_)
            | Self::Nil(_) => 5,

            Self::Project(..) => 4,

            Self::App(..)
            | Self::Succ(_)
            | Self::Pred(_)
            | Self::IsZero(_)
            | Self::Inl(_, None)
            | Self::Inr(_, None)
            | Self::Cons(..)
            | Self::IsNil(..)
            | Self::Head(..)
            | Self::Tail(..) => 3,

            Self::Ascribe(..) | Self::Inl(_, Some(_)) | Self::Inr(_, Some(_)) => 2,

            Self::Seq(..) => 1,

            Self::Abs(..)
            | Self::If(..)
            | Self::Let(..)
            | Self::SumCase(..)
            | Self::VarCase(..) => 0,
        }
    }
}

/// A term printed with parentheses if it binds looser than its slot allows.
struct Prec<'a>(&'a Term, u8);

impl Display for Prec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.precedence() < self.1 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A case-clause body: an unparenthesized open form here would swallow the
/// `|` that introduces the next clause, so the grammar keeps bodies at
/// sequence level and the printer wraps anything looser.
struct ClauseBody<'a>(&'a Term);

impl Display for ClauseBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Prec(self.0, 1))
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => write!(f, "{}", name),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Zero => write!(f, "0"),
            Self::Unit => write!(f, "unit"),

            Self::Abs(param, ty, body) => write!(f, "λ{}:{}. {}", param, ty, body),

            // The left slot admits another application so chains print flat
            // and left-associated; arguments are path-level.
            Self::App(fun, arg) => write!(f, "{} {}", Prec(fun, 3), Prec(arg, 4)),

            Self::If(cond, then, els) => {
                write!(f, "if {} then {} else {}", cond, then, els)
            }

            Self::Succ(n) => write!(f, "succ {}", Prec(n, 4)),
            Self::Pred(n) => write!(f, "pred {}", Prec(n, 4)),
            Self::IsZero(n) => write!(f, "iszero {}", Prec(n, 4)),

            // Both slots are bounded: an open form after `;` needs its own
            // parentheses, matching the grammar.
            Self::Seq(first, second) => write!(f, "{}; {}", Prec(first, 2), Prec(second, 1)),

            Self::Ascribe(term, ty) => write!(f, "{} as {}", Prec(term, 3), ty),

            Self::Let(name, bound, body) => {
                write!(f, "let {} = {} in {}", name, bound, body)
            }

            Self::Project(object, field) => write!(f, "{}.{}", Prec(object, 4), field),

            Self::Pair(left, right) => write!(f, "({}, {})", left, right),

            Self::Tuple(members) => write!(f, "{{{}}}", members.iter().join(", ")),

            Self::Record(members) => write!(
                f,
                "{{{}}}",
                members.iter().map(|(l, t)| format!("{}={}", l, t)).join(", ")
            ),

            Self::Inl(term, None) => write!(f, "inl {}", Prec(term, 4)),
            Self::Inr(term, None) => write!(f, "inr {}", Prec(term, 4)),
            Self::Inl(term, Some(ty)) => write!(f, "inl {} as {}", Prec(term, 4), ty),
            Self::Inr(term, Some(ty)) => write!(f, "inr {} as {}", Prec(term, 4), ty),

            Self::SumCase(scrutinee, left, right) => write!(
                f,
                "case {} of inl {} => {} | inr {} => {}",
                scrutinee,
                left.param,
                ClauseBody(&left.body),
                right.param,
                ClauseBody(&right.body)
            ),

            Self::VarCase(scrutinee, clauses) => {
                write!(f, "case {} of ", scrutinee)?;
                for (i, (label, clause)) in clauses.iter().enumerate() {
                    if i != 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "<{}={}> => {}", label, clause.param, ClauseBody(&clause.body))?;
                }
                Ok(())
            }

            Self::Nil(elem) => write!(f, "nil[{}]", elem),
            Self::Cons(elem, head, tail) => {
                write!(f, "cons[{}] {} {}", elem, Prec(head, 4), Prec(tail, 4))
            }
            Self::IsNil(elem, arg) => write!(f, "isnil[{}] {}", elem, Prec(arg, 4)),
            Self::Head(elem, arg) => write!(f, "head[{}] {}", elem, Prec(arg, 4)),
            Self::Tail(elem, arg) => write!(f, "tail[{}] {}", elem, Prec(arg, 4)),
        }
    }
}
