//! Indented rendering of a parsed tree.
//!
//! The printer only reads the tree. Strings are written back exactly as they
//! appeared in the input, since the parser never unescaped them. Bytes that
//! are not UTF-8 are replaced with U+FFFD.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::value::{Member, Value};

/// Renders a [`Value`] as multi-line JSON.
///
/// Non-empty arrays and objects put one entry per line, indented by
/// `indent` spaces per nesting level. Empty containers stay on one line as
/// `[]` / `{}`.
///
/// # Examples
///
/// ```
/// use jsonview::{parse, PrettyPrinter};
///
/// let doc = parse(br#"{"a":[1,2]}"#).unwrap();
/// let out = PrettyPrinter::with_indent(4).render(&doc.value);
/// assert_eq!(out, "{\n    \"a\": [\n        1,\n        2\n    ]\n}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyPrinter {
    indent: usize,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl PrettyPrinter {
    /// A printer indenting by two spaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A printer indenting by `indent` spaces per level.
    #[must_use]
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Renders `value` into a new string.
    #[must_use]
    pub fn render(&self, value: &Value<'_>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write(value, &mut out);
        out
    }

    /// Writes `value` to `out`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write<W: Write>(&self, value: &Value<'_>, out: &mut W) -> fmt::Result {
        self.write_value(value, out, 0)
    }

    fn write_value<W: Write>(&self, value: &Value<'_>, out: &mut W, level: usize) -> fmt::Result {
        match value {
            Value::Array(elements) if !elements.is_empty() => {
                out.write_char('[')?;
                for (i, element) in elements.iter().enumerate() {
                    self.break_line(out, level + 1)?;
                    self.write_value(element, out, level + 1)?;
                    if i + 1 < elements.len() {
                        out.write_char(',')?;
                    }
                }
                self.break_line(out, level)?;
                out.write_char(']')
            }
            Value::Object(members) if !members.is_empty() => {
                out.write_char('{')?;
                for (i, Member { key, value }) in members.iter().enumerate() {
                    self.break_line(out, level + 1)?;
                    write!(out, "\"{key}\": ")?;
                    self.write_value(value, out, level + 1)?;
                    if i + 1 < members.len() {
                        out.write_char(',')?;
                    }
                }
                self.break_line(out, level)?;
                out.write_char('}')
            }
            // Scalars and empty containers match the compact form.
            scalar => write!(out, "{scalar}"),
        }
    }

    fn break_line<W: Write>(&self, out: &mut W, level: usize) -> fmt::Result {
        out.write_char('\n')?;
        for _ in 0..level * self.indent {
            out.write_char(' ')?;
        }
        Ok(())
    }
}

impl Value<'_> {
    /// Renders the value with [`PrettyPrinter::default`].
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        PrettyPrinter::default().render(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn scalars_render_inline() {
        let p = PrettyPrinter::new();
        assert_eq!(p.render(&Value::Null), "null");
        assert_eq!(p.render(&Value::Bool(true)), "true");
        assert_eq!(p.render(&Value::Number(-0.5)), "-0.5");
        assert_eq!(p.render(&Value::Number(1e3)), "1000");
        assert_eq!(p.render(&Value::from(r"a\n")), r#""a\n""#);
    }

    #[test]
    fn empty_containers_stay_compact() {
        let v = Value::Array(vec![Value::Array(vec![]), Value::Object(vec![])]);
        assert_eq!(v.to_pretty_string(), "[\n  [],\n  {}\n]");
    }

    #[test]
    fn zero_indent_still_breaks_lines() {
        let v = Value::Array(vec![Value::Null, Value::Null]);
        assert_eq!(PrettyPrinter::with_indent(0).render(&v), "[\nnull,\nnull\n]");
    }
}
