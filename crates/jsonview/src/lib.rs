//! A single-pass, recursive-descent JSON parser whose strings borrow from the
//! input.
//!
//! [`parse`] turns one immutable byte buffer into an owned tree of [`Value`]
//! nodes. Strings and object keys are [`bstr::BStr`] views into that buffer,
//! so the buffer must outlive the tree. Containers own their children
//! exclusively; dropping the root drops everything.
//!
//! Deliberate simplifications:
//! - No escape sequences are decoded. A string ends at the first `"` after
//!   its opening quote, and backslashes are kept as written.
//! - Every number is an `f64`. Integers beyond 2^53 lose exactness, and the
//!   integer/float distinction is not retained.
//! - Object members keep input order and duplicate keys are retained.
//!   [`Value::get`] resolves duplicates to the last occurrence.
//!
//! ```rust
//! use jsonview::{parse, Value};
//!
//! let input = br#"{"tags":["a","b"],"meta":{"x":null}}"#;
//! let doc = parse(input).unwrap();
//! assert_eq!(doc.consumed, input.len());
//!
//! let tags = doc.value.get("tags").and_then(Value::as_array).unwrap();
//! assert_eq!(tags[1].as_str(), Some("b".into()));
//! assert!(doc.value.get("meta").and_then(|m| m.get("x")).unwrap().is_null());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod printer;
mod value;


pub use error::{ErrorKind, ParseError};
pub use options::ParserOptions;
pub use parser::{Parsed, Parser};
pub use printer::PrettyPrinter;
pub use value::{Array, Member, Object, Value};

/// Parses exactly one JSON value from `input`.
///
/// Leading and trailing whitespace (space, tab, CR, LF) is allowed; any other
/// trailing byte is an error.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered. No partial tree is
/// returned.
pub fn parse<I>(input: &I) -> Result<Parsed<'_>, ParseError>
where
    I: AsRef<[u8]> + ?Sized,
{
    parse_with_options(input, ParserOptions::default())
}

/// Parses exactly one JSON value from `input` with the given options.
///
/// [`ParserOptions::allow_multiple_json_values`] has no effect here; iterate
/// a [`Parser`] to read several values.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered. No partial tree is
/// returned.
pub fn parse_with_options<I>(input: &I, options: ParserOptions) -> Result<Parsed<'_>, ParseError>
where
    I: AsRef<[u8]> + ?Sized,
{
    Parser::with_options(input.as_ref(), options).parse_document()
}
