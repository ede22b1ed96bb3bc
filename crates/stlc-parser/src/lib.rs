//! Parses source text into [stlc_tree] values. The grammar itself is an
//! LALR(1) description handed to LALRPOP, which plays the role of the
//! grammar engine; every rule action calls exactly one function in
//! [builder], which owns the tree shapes, associativity folds and the
//! ascription rewrite. There is no error recovery and no incremental
//! parsing.

pub mod builder;
pub mod error;

use error::from_lalrpop;
use stlc_error::Error;
use stlc_tree::{Node, Term, Type};

#[macro_use]
extern crate lalrpop_util;

lalrpop_mod!(
    #[allow(warnings)]
    /// The parsing module generated by LALRPOP.
    grammar
);

pub use grammar::{TermParser, TyParser};

/// A parser from source text to some tree, implemented by the generated
/// entry points so callers can stay generic over what they parse.
pub trait Parser<T> {
    fn parse_source(&self, source: &str) -> Result<T, Error>;
}

impl Parser<Term> for TermParser {
    fn parse_source(&self, source: &str) -> Result<Term, Error> {
        self.parse(source).map_err(from_lalrpop)
    }
}

impl Parser<Type> for TyParser {
    fn parse_source(&self, source: &str) -> Result<Type, Error> {
        self.parse(source).map_err(from_lalrpop)
    }
}

pub fn parse_term(source: &str) -> Result<Term, Error> {
    TermParser::new().parse_source(source)
}

pub fn parse_type(source: &str) -> Result<Type, Error> {
    TyParser::new().parse_source(source)
}

/// Parses a whole input as a term, or failing that as a type. The two
/// surface syntaxes never overlap, so at most one attempt can succeed; when
/// both fail the term error wins, since terms are the common case.
pub fn parse(source: &str) -> Result<Node, Error> {
    match TermParser::new().parse(source) {
        Ok(term) => Ok(Node::Term(term)),
        Err(term_err) => TyParser::new()
            .parse(source)
            .map(Node::Type)
            .map_err(|_| from_lalrpop(term_err)),
    }
}
