//! Positions inside a source string. [Byte] and [ByteRange] are absolute
//! indexes into the raw text, which is all the parser knows about; [Point]
//! and [Range] carry line and column numbers and exist so diagnostics can be
//! rendered for humans.

use core::fmt;
use std::fmt::Display;

/// Byte offset into a source string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Byte(pub usize);

impl Byte {
    /// Resolves the offset into a line and column pair by walking the lines
    /// of the source. Linear in the size of the code, which is fine for the
    /// single error we ever render per run.
    pub fn locate(self, code: &str) -> Point {
        let mut consumed = 0;
        for (line, text) in code.lines().enumerate() {
            if consumed + text.len() + 1 > self.0 {
                return Point {
                    line,
                    column: self.0 - consumed,
                };
            }
            consumed += text.len() + 1;
        }
        Point::default()
    }
}

/// Start and end byte offsets of a piece of syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ByteRange(pub Byte, pub Byte);

impl ByteRange {
    /// A range that covers a single offset, used for lexer-level errors that
    /// only know where they stopped.
    pub fn singleton(at: usize) -> Self {
        Self(Byte(at), Byte(at))
    }

    pub fn locate(&self, code: &str) -> Range {
        Range(self.0.locate(code), self.1.locate(code))
    }
}

/// Line and column inside a source string, both zero based.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

/// Two [Point]s delimiting a piece of syntax.
#[derive(Debug, PartialEq, Eq)]
pub struct Range(pub Point, pub Point);

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == self.1 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{}~{}", self.0, self.1)
        }
    }
}
