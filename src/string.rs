use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::{ByteCursor, Node, ParsitreeError, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// Parser that matches the UTF-8 encoding of a string
///
/// Unlike [`BytesParser`](crate::bytes::BytesParser) the result is the string
/// value itself rather than the raw token.
#[derive(Debug, Clone)]
pub struct StringParser {
    expected: Cow<'static, str>,
    name: Arc<str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let name = format!("String({expected:?})").into();
        StringParser { expected, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code> Parser<'code> for StringParser {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        let expected = self.expected.as_bytes();
        cursor.request(expected.len())?;
        if cursor.buffer() != expected {
            return Err(ParsitreeError::syntax(
                Arc::clone(&self.name),
                format!("expected {:?}", self.expected),
                cursor.position(),
            ));
        }
        // Clone is cheap here - just copies the reference for &'static str
        out.set_value(Value::Text(self.expected.clone()));
        cursor.advance();
        Ok(())
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}
