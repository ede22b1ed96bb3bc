//! Conversion of LALRPOP parse failures into located [Error] values.

use lalrpop_util::{lexer::Token, ParseError};
use stlc_error::Error;
use stlc_location::ByteRange;

pub fn from_lalrpop(err: ParseError<usize, Token<'_>, &str>) -> Error {
    use ParseError::*;
    match err {
        InvalidToken { location } => at("invalid token", location),
        UnrecognizedEof { location, .. } => at("unexpected end of input", location),
        UnrecognizedToken { token, .. } => at("unrecognized token", token.0),
        ExtraToken { token } => at("extra input after the end of the term", token.0),
        User { error } => at(error, 0),
    }
}

fn at(message: &str, offset: usize) -> Error {
    Error::new(message, ByteRange::singleton(offset))
}
