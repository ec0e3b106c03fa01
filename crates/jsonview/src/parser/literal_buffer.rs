use super::cursor::Cursor;
use crate::{
    error::{ErrorKind, ParseError},
    value::Value,
};

/// One of the three bare-word literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedLiteral {
    Null,
    True,
    False,
}

impl ExpectedLiteral {
    /// The literal introduced by `first` (`n`, `t`, or `f`).
    pub(crate) fn from_first(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Self::Null),
            b't' => Some(Self::True),
            b'f' => Some(Self::False),
            _ => None,
        }
    }

    fn spelling(self) -> &'static [u8] {
        match self {
            Self::Null => b"null",
            Self::True => b"true",
            Self::False => b"false",
        }
    }

    fn value(self) -> Value<'static> {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::Bool(true),
            Self::False => Value::Bool(false),
        }
    }

    /// Matches the full spelling byte by byte starting at the cursor.
    ///
    /// A mismatching byte wins over running out of input: `nx` is an invalid
    /// literal, `nu` is an unexpected end.
    pub(crate) fn consume(self, cursor: &mut Cursor<'_>) -> Result<Value<'static>, ParseError> {
        for &expected in self.spelling() {
            match cursor.peek() {
                Some(b) if b == expected => cursor.bump(),
                Some(_) => return Err(cursor.error(ErrorKind::InvalidLiteral)),
                None => return Err(cursor.error(ErrorKind::UnexpectedEnd)),
            }
        }
        Ok(self.value())
    }
}
