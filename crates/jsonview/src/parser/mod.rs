//! Recursive-descent JSON parser with borrowed string views.
//!
//! Overview
//! - [`Parser`] owns a `Cursor` over one immutable input buffer and builds a
//!   [`Value`] tree in a single forward pass. Nothing is buffered across
//!   calls; the whole value is produced before control returns.
//! - Strings and object keys are sub-slices of the input. No escape
//!   sequences are decoded: the first `"` after an opening quote closes the
//!   string and backslashes are kept verbatim. As a consequence a string can
//!   never contain a `"`.
//! - Arrays and objects accumulate into an `EntryBuffer` that starts at
//!   four entries and doubles. Members keep input order; duplicate keys are
//!   kept.
//!
//! Errors
//! - Every error is terminal. The first failure propagates to the caller
//!   unchanged and no partial tree is returned.
//!
//! Depth
//! - `parse_value` recurses once per nested container. Without
//!   [`ParserOptions::max_depth`] the only bound is the thread's stack.

mod cursor;
mod entries;
mod literal_buffer;
mod numbers;

use bstr::{BStr, ByteSlice};
use cursor::Cursor;
use entries::EntryBuffer;
use literal_buffer::ExpectedLiteral;
use numbers::NumberLexeme;

use crate::{
    error::{ErrorKind, ParseError},
    options::ParserOptions,
    value::{Member, Value},
};

/// A successfully parsed document.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<'src> {
    /// The root of the value tree.
    pub value: Value<'src>,
    /// Number of input bytes consumed, trailing whitespace included.
    ///
    /// Trailing non-whitespace is rejected, so this always equals the input
    /// length.
    pub consumed: usize,
}

impl<'src> Parsed<'src> {
    /// Discards the byte count and returns the root value.
    #[must_use]
    pub fn into_value(self) -> Value<'src> {
        self.value
    }
}

/// A JSON parser over a single input buffer.
///
/// Use [`Parser::parse_document`] for exactly one value, or iterate to pull
/// values one at a time. With
/// [`allow_multiple_json_values`](ParserOptions::allow_multiple_json_values)
/// the iterator yields every value in a concatenated or whitespace-separated
/// stream. The iterator stops after the first error.
///
/// # Examples
///
/// ```
/// use jsonview::{Parser, ParserOptions, Value};
///
/// let options = ParserOptions {
///     allow_multiple_json_values: true,
///     ..Default::default()
/// };
/// let values: Vec<_> = Parser::with_options(b"1 [] {}\ntrue", options)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(values.len(), 4);
/// assert_eq!(values[3], Value::Bool(true));
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    options: ParserOptions,
    depth: usize,
    finished: bool,
}

impl<'src> Parser<'src> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(input: &'src [u8]) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(input: &'src [u8], options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
            finished: false,
        }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Parses exactly one value surrounded by optional whitespace.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered. Bytes other than
    /// whitespace after the value fail with [`ErrorKind::UnexpectedChar`].
    pub fn parse_document(mut self) -> Result<Parsed<'src>, ParseError> {
        self.parse_single()
    }

    fn parse_single(&mut self) -> Result<Parsed<'src>, ParseError> {
        self.finished = true;
        let value = self.parse_value()?;
        self.expect_end()?;
        let consumed = self.cursor.offset();
        tracing::trace!(consumed, "parsed json document");
        Ok(Parsed { value, consumed })
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => Ok(()),
            Some(b) => Err(self.cursor.error(ErrorKind::UnexpectedChar(b))),
        }
    }

    fn parse_value(&mut self) -> Result<Value<'src>, ParseError> {
        self.cursor.skip_whitespace();
        let Some(byte) = self.cursor.peek() else {
            return Err(self.cursor.error(ErrorKind::UnexpectedEnd));
        };

        match byte {
            b'"' => self.parse_string().map(Value::String),
            b'-' | b'0'..=b'9' => self.parse_number(),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            _ => match ExpectedLiteral::from_first(byte) {
                Some(literal) => literal.consume(&mut self.cursor),
                None => Err(self.cursor.error(ErrorKind::UnexpectedChar(byte))),
            },
        }
    }

    fn parse_number(&mut self) -> Result<Value<'src>, ParseError> {
        let start = self.cursor.offset();
        let lexeme = NumberLexeme::lex(&mut self.cursor)?;
        lexeme
            .to_f64()
            .map(Value::Number)
            .ok_or_else(|| self.cursor.error_at(start, ErrorKind::InvalidNumber))
    }

    fn parse_string(&mut self) -> Result<&'src BStr, ParseError> {
        self.cursor.consume_expected(b'"')?;
        let rest = self.cursor.rest();
        let Some(len) = rest.find_byte(b'"') else {
            self.cursor.advance(rest.len());
            return Err(self.cursor.error(ErrorKind::UnexpectedEnd));
        };
        self.cursor.advance(len + 1);
        Ok(rest[..len].as_bstr())
    }

    fn parse_array(&mut self) -> Result<Value<'src>, ParseError> {
        self.enter()?;
        self.cursor.consume_expected(b'[')?;
        self.cursor.skip_whitespace();

        let mut elements = EntryBuffer::new();
        if self.cursor.peek() == Some(b']') {
            self.cursor.bump();
        } else {
            loop {
                let value = self.parse_value()?;
                elements
                    .push(value)
                    .map_err(|_| self.cursor.error(ErrorKind::OutOfMemory))?;
                if self.after_entry(b']')? {
                    break;
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(elements.finish()))
    }

    fn parse_object(&mut self) -> Result<Value<'src>, ParseError> {
        self.enter()?;
        self.cursor.consume_expected(b'{')?;
        self.cursor.skip_whitespace();

        let mut members = EntryBuffer::new();
        if self.cursor.peek() == Some(b'}') {
            self.cursor.bump();
        } else {
            loop {
                let key = self.parse_string()?;
                self.cursor.skip_whitespace();
                self.cursor.consume_expected(b':')?;
                let value = self.parse_value()?;
                members
                    .push(Member { key, value })
                    .map_err(|_| self.cursor.error(ErrorKind::OutOfMemory))?;
                if self.after_entry(b'}')? {
                    break;
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members.finish()))
    }

    /// Consumes the `,` or `close` following a container entry. Returns
    /// `true` once the container is closed.
    fn after_entry(&mut self, close: u8) -> Result<bool, ParseError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(b',') => {
                self.cursor.bump();
                self.cursor.skip_whitespace();
                Ok(false)
            }
            Some(b) if b == close => {
                self.cursor.bump();
                Ok(true)
            }
            Some(b) => Err(self.cursor.error(ErrorKind::UnexpectedChar(b))),
            None => Err(self.cursor.error(ErrorKind::UnexpectedEnd)),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if let Some(max) = self.options.max_depth {
            if self.depth > max {
                return Err(self.cursor.error(ErrorKind::DepthLimitExceeded(max)));
            }
        }
        Ok(())
    }
}

impl<'src> Iterator for Parser<'src> {
    type Item = Result<Value<'src>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.options.allow_multiple_json_values {
            return Some(self.parse_single().map(Parsed::into_value));
        }

        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            self.finished = true;
            return None;
        }
        let result = self.parse_value();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn multi() -> ParserOptions {
        ParserOptions {
            allow_multiple_json_values: true,
            ..Default::default()
        }
    }

    #[test]
    fn single_mode_yields_one_result_then_stops() {
        let mut parser = Parser::new(b" 1 ");
        assert_eq!(parser.next(), Some(Ok(Value::Number(1.0))));
        assert_eq!(parser.offset(), 3);
        assert_eq!(parser.next(), None);
    }

    #[test]
    fn single_mode_rejects_second_value() {
        let results: Vec<_> = Parser::new(b"1 2").collect();
        assert_eq!(results.len(), 1);
        let err = results[0].clone().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedChar(b'2'));
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn multi_mode_reads_concatenated_values() {
        let values: Vec<_> = Parser::with_options(b"{}{}[]truefalse\n\"s\"", multi())
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            values,
            [
                Value::Object(Vec::new()),
                Value::Object(Vec::new()),
                Value::Array(Vec::new()),
                Value::Bool(true),
                Value::Bool(false),
                Value::String("s".into()),
            ]
        );
    }

    #[test]
    fn multi_mode_on_blank_input_yields_nothing() {
        assert_eq!(Parser::with_options(b" \n ", multi()).count(), 0);
    }

    #[test]
    fn multi_mode_stops_after_first_error() {
        let results: Vec<_> = Parser::with_options(b"1 ] 2", multi()).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1].clone().unwrap_err().kind(),
            ErrorKind::UnexpectedChar(b']')
        );
    }

    #[test]
    fn depth_is_restored_between_siblings() {
        let options = ParserOptions {
            max_depth: Some(2),
            ..Default::default()
        };
        let doc = Parser::with_options(b"[[1],[2],{\"a\":1}]", options).parse_document();
        assert!(doc.is_ok());
    }

    #[test]
    fn unterminated_string_points_at_end() {
        let err = Parser::new(b"[\"abc").parse_document().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEnd);
        assert_eq!(err.offset, 5);
    }
}
