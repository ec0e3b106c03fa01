use core::fmt;

use thiserror::Error;

/// The reason a parse failed.
///
/// Every kind is terminal: the parser never recovers, and no partial tree is
/// returned alongside it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input ran out while a construct was incomplete.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A byte that is not valid at this position of the grammar, including
    /// trailing bytes after a complete top-level value.
    #[error("unexpected character {}", ByteRepr::of(.0))]
    UnexpectedChar(u8),
    /// Bytes were present but did not spell `null`, `true` or `false`.
    #[error("invalid literal")]
    InvalidLiteral,
    /// A digit run was missing, or the lexed number does not fit in an `f64`.
    #[error("invalid number")]
    InvalidNumber,
    /// Growing an array or object entry buffer failed.
    #[error("out of memory")]
    OutOfMemory,
    /// A container opened deeper than [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
}

/// A parse failure together with the position where it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub(crate) kind: ErrorKind,
    /// Byte offset into the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in bytes.
    pub column: usize,
}

impl ParseError {
    /// Builds an error for `offset`, deriving line and column from `input`.
    pub(crate) fn at(input: &[u8], offset: usize, kind: ErrorKind) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input[..offset];
        let line = 1 + consumed.iter().filter(|&&b| b == b'\n').count();
        let column = 1 + consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(offset, |nl| offset - nl - 1);

        tracing::debug!(error = %kind, offset, line, column, "json parse failed");

        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

struct ByteRepr(u8);

impl ByteRepr {
    fn of(byte: &u8) -> Self {
        Self(*byte)
    }
}

impl fmt::Display for ByteRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "'{}'", self.0 as char)
        } else {
            write!(f, "0x{:02X}", self.0)
        }
    }
}
