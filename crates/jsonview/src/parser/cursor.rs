//! Position tracking over an immutable input buffer.
//!
//! The cursor only ever moves forward. `offset` stays within
//! `0..=input.len()`; line and column are derived from the input when an
//! error is built, never tracked while scanning.

use crate::error::{ErrorKind, ParseError};

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    input: &'src [u8],
    offset: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(input: &'src [u8]) -> Self {
        Self { input, offset: 0 }
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Unread input.
    #[inline]
    pub(crate) fn rest(&self) -> &'src [u8] {
        &self.input[self.offset..]
    }

    /// Input between `start` and the current offset.
    #[inline]
    pub(crate) fn since(&self, start: usize) -> &'src [u8] {
        &self.input[start..self.offset]
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Advances past the current byte. No-op at end of input.
    #[inline]
    pub(crate) fn bump(&mut self) {
        if self.offset < self.input.len() {
            self.offset += 1;
        }
    }

    /// Advances by `n` bytes, clamped to the end of input.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.input.len());
    }

    pub(crate) fn consume_expected(&mut self, expected: u8) -> Result<(), ParseError> {
        match self.peek() {
            Some(b) if b == expected => {
                self.offset += 1;
                Ok(())
            }
            Some(b) => Err(self.error(ErrorKind::UnexpectedChar(b))),
            None => Err(self.error(ErrorKind::UnexpectedEnd)),
        }
    }

    /// Advances while `pred` holds and returns the number of bytes skipped.
    pub(crate) fn skip_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let n = self.rest().iter().take_while(|&&b| pred(b)).count();
        self.offset += n;
        n
    }

    /// Skips space, tab, carriage return and line feed.
    pub(crate) fn skip_whitespace(&mut self) {
        self.skip_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(self.offset, kind)
    }

    pub(crate) fn error_at(&self, offset: usize, kind: ErrorKind) -> ParseError {
        ParseError::at(self.input, offset, kind)
    }
}
