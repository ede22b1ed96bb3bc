//! Source-located errors. The parser produces [Error] values that only know
//! a message and a byte range; pairing one with its source code via
//! [Error::with_code] yields a renderer that points at the offending lines.

use core::fmt;
use std::fmt::Display;

use stlc_location::{ByteRange, Point, Range};

/// An error message anchored to a range of the source.
#[derive(Debug)]
pub struct Error {
    message: String,
    location: ByteRange,
}

impl Error {
    pub fn new(message: impl Into<String>, location: ByteRange) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attaches the source code so the error can be displayed with the
    /// offending lines quoted.
    pub fn with_code<'a>(self, code: &'a str, file_name: &'a str) -> ErrorWithCode<'a> {
        ErrorWithCode {
            err: self,
            code,
            file_name,
        }
    }
}

/// An [Error] together with the code it came from, ready for display.
pub struct ErrorWithCode<'a> {
    err: Error,
    code: &'a str,
    file_name: &'a str,
}

impl Display for ErrorWithCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            err: Error { message, location },
            code,
            file_name,
        } = self;

        let Range(start @ Point { line, column }, end) = location.locate(code);
        const PAD: usize = 3;

        writeln!(f, "\n[error]: {message}\n")?;
        writeln!(f, "{:>PAD$} ┌─> {file_name}:{start}", "")?;
        writeln!(f, "{:>PAD$} │", "")?;

        for (text, number) in code.lines().skip(line).zip(line..=end.line) {
            writeln!(f, "{:>PAD$} │ {}", number + 1, text)?;
        }

        if line == end.line {
            let width = (end.column - column).max(1);
            writeln!(f, "{:>PAD$} │ {:>column$}{:^>width$}", "", "", "")?;
        }

        writeln!(f, "{:>PAD$} │", "")
    }
}
