//! One pure construction function per grammar rule. The grammar guarantees
//! the shape of every capture, so nothing here validates or fails; the only
//! work is folding match lists into canonical trees and resolving the few
//! policies the grammar cannot express, like the projection field kind and
//! the ascription rewrite for bare injections.

use stlc_tree::{Clause, Field, Term, Type};

pub fn term_var(name: String) -> Term {
    Term::Var(name)
}

pub fn term_true() -> Term {
    Term::True
}

pub fn term_false() -> Term {
    Term::False
}

pub fn term_zero() -> Term {
    Term::Zero
}

pub fn term_unit() -> Term {
    Term::Unit
}

pub fn term_abs(param: String, ty: Type, body: Term) -> Term {
    Term::abs(param, ty, body)
}

pub fn term_let(name: String, bound: Term, body: Term) -> Term {
    Term::let_in(name, bound, body)
}

pub fn term_if(cond: Term, then: Term, els: Term) -> Term {
    Term::ite(cond, then, els)
}

/// Applications are left-associative: a head and its operand list fold into
/// left-nested `App` nodes, so `x y z` becomes `App(App(x, y), z)`.
pub fn term_app(head: Term, args: Vec<Term>) -> Term {
    args.into_iter().fold(head, Term::app)
}

pub fn term_seq(first: Term, second: Term) -> Term {
    Term::seq(first, second)
}

/// Ascribing a bare injection resolves its pending sum type in place instead
/// of wrapping it; every other term gets an `Ascribe` node.
pub fn term_ascribe(term: Term, ty: Type) -> Term {
    match term {
        Term::Inl(inner, None) => Term::Inl(inner, Some(ty)),
        Term::Inr(inner, None) => Term::Inr(inner, Some(ty)),
        other => Term::ascribe(other, ty),
    }
}

/// Projection chains are left-associative: `x.1.2` becomes
/// `Project(Project(x, 1), 2)`.
pub fn term_project(object: Term, fields: Vec<Field>) -> Term {
    fields.into_iter().fold(object, Term::project)
}

/// An all-digit field token selects a 1-based tuple or pair position,
/// anything else is a record label.
pub fn proj_field(text: &str) -> Field {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        Field::Index(text.parse().unwrap_or(0))
    } else {
        Field::Label(text.to_string())
    }
}

pub fn term_pair(left: Term, right: Term) -> Term {
    Term::pair(left, right)
}

pub fn term_tuple(first: Term, rest: Vec<Term>) -> Term {
    Term::Tuple(std::iter::once(first).chain(rest).collect())
}

/// A duplicated label keeps its first position and the last assigned term.
pub fn term_record(first: (String, Term), rest: Vec<(String, Term)>) -> Term {
    Term::record(std::iter::once(first).chain(rest))
}

pub fn term_succ(n: Term) -> Term {
    Term::succ(n)
}

pub fn term_pred(n: Term) -> Term {
    Term::pred(n)
}

pub fn term_iszero(n: Term) -> Term {
    Term::is_zero(n)
}

/// Injections parse bare; the sum type stays unresolved until an enclosing
/// ascription provides it.
pub fn term_inl(term: Term) -> Term {
    Term::inl(term, None)
}

pub fn term_inr(term: Term) -> Term {
    Term::inr(term, None)
}

pub fn term_sum_case(
    scrutinee: Term,
    left_param: String,
    left_body: Term,
    right_param: String,
    right_body: Term,
) -> Term {
    Term::sum_case(
        scrutinee,
        Clause::new(left_param, left_body),
        Clause::new(right_param, right_body),
    )
}

pub fn term_var_case(
    scrutinee: Term,
    first: (String, String, Term),
    rest: Vec<(String, String, Term)>,
) -> Term {
    Term::var_case(
        scrutinee,
        std::iter::once(first)
            .chain(rest)
            .map(|(label, param, body)| (label, Clause::new(param, body))),
    )
}

pub fn term_nil(elem: Type) -> Term {
    Term::Nil(elem)
}

pub fn term_cons(elem: Type, head: Term, tail: Term) -> Term {
    Term::cons(elem, head, tail)
}

pub fn term_isnil(elem: Type, arg: Term) -> Term {
    Term::is_nil(elem, arg)
}

pub fn term_head(elem: Type, arg: Term) -> Term {
    Term::head(elem, arg)
}

pub fn term_tail(elem: Type, arg: Term) -> Term {
    Term::tail(elem, arg)
}

pub fn paren_term(term: Term) -> Term {
    term
}

pub fn type_bool() -> Type {
    Type::Boolean
}

pub fn type_nat() -> Type {
    Type::Natural
}

pub fn type_unit() -> Type {
    Type::Unit
}

pub fn type_top() -> Type {
    Type::Top
}

pub fn type_base(name: String) -> Type {
    Type::Base(name)
}

/// The grammar recurses on the right operand, so arrow chains arrive already
/// right-nested: `A → B → C` is `A → (B → C)`.
pub fn type_func(from: Type, to: Type) -> Type {
    Type::func(from, to)
}

pub fn type_sum(left: Type, right: Type) -> Type {
    Type::sum(left, right)
}

pub fn type_product(left: Type, right: Type) -> Type {
    Type::product(left, right)
}

pub fn type_tuple(first: Type, rest: Vec<Type>) -> Type {
    Type::Tuple(std::iter::once(first).chain(rest).collect())
}

pub fn type_record(first: (String, Type), rest: Vec<(String, Type)>) -> Type {
    Type::record(std::iter::once(first).chain(rest))
}

pub fn type_variant(first: (String, Type), rest: Vec<(String, Type)>) -> Type {
    Type::variant(std::iter::once(first).chain(rest))
}

pub fn type_list(elem: Type) -> Type {
    Type::list(elem)
}

pub fn type_ref(elem: Type) -> Type {
    Type::reference(elem)
}

pub fn paren_type(ty: Type) -> Type {
    ty
}
