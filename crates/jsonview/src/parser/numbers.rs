use super::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};

/// Lexical hint so conversion can distinguish ints vs floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLexeme<'a> {
    Integer(&'a [u8]), // no '.' and no exponent
    Float(&'a [u8]),   // has '.' or exponent
}

impl<'src> NumberLexeme<'src> {
    /// Lexes `-? digits ( . digits )? ( [eE] [+-]? digits )?` at the cursor.
    ///
    /// Leading zeros are not rejected. The byte after the number is left for
    /// the caller.
    pub(crate) fn lex(cursor: &mut Cursor<'src>) -> Result<Self, ParseError> {
        let start = cursor.offset();
        let mut is_float = false;

        if cursor.peek() == Some(b'-') {
            cursor.bump();
        }
        Self::digits(cursor)?;

        if cursor.peek() == Some(b'.') {
            cursor.bump();
            Self::digits(cursor)?;
            is_float = true;
        }

        if matches!(cursor.peek(), Some(b'e' | b'E')) {
            cursor.bump();
            if matches!(cursor.peek(), Some(b'+' | b'-')) {
                cursor.bump();
            }
            Self::digits(cursor)?;
            is_float = true;
        }

        let span = cursor.since(start);
        Ok(if is_float {
            Self::Float(span)
        } else {
            Self::Integer(span)
        })
    }

    fn digits(cursor: &mut Cursor<'src>) -> Result<(), ParseError> {
        if cursor.skip_while(|b| b.is_ascii_digit()) == 0 {
            return Err(cursor.error(ErrorKind::InvalidNumber));
        }
        Ok(())
    }

    /// The nearest `f64`, or `None` if the literal overflows to infinity.
    pub(crate) fn to_f64(self) -> Option<f64> {
        match self {
            Self::Integer(span) => {
                let (negative, digits) = match span.split_first() {
                    Some((b'-', rest)) => (true, rest),
                    _ => (false, span),
                };
                // Past u64 the float parser still rounds to nearest.
                let Some(magnitude) = digits.iter().try_fold(0u64, |acc, &d| {
                    acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
                }) else {
                    return parse_float(span);
                };
                #[expect(clippy::cast_precision_loss, reason = "rounds to the nearest double")]
                let magnitude = magnitude as f64;
                Some(if negative { -magnitude } else { magnitude })
            }
            Self::Float(span) => parse_float(span),
        }
    }
}

fn parse_float(span: &[u8]) -> Option<f64> {
    core::str::from_utf8(span)
        .ok()?
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}
