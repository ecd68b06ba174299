use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::{ByteCursor, Node, ParsitreeError, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// Parser that matches an exact byte sequence and yields the raw token
#[derive(Debug, Clone)]
pub struct BytesParser {
    expected: Cow<'static, [u8]>,
    name: Arc<str>,
}

impl BytesParser {
    pub fn new(expected: impl Into<Cow<'static, [u8]>>) -> Self {
        let expected = expected.into();
        let name = format!("Bytes(\"{}\")", expected.escape_ascii()).into();
        BytesParser { expected, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code> Parser<'code> for BytesParser {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        cursor.request(self.expected.len())?;
        let window = cursor.buffer();
        if window != &*self.expected {
            return Err(ParsitreeError::syntax(
                Arc::clone(&self.name),
                format!(
                    "expected \"{}\", found \"{}\"",
                    self.expected.escape_ascii(),
                    window.escape_ascii()
                ),
                cursor.position(),
            ));
        }
        out.set_value(Value::Token(window));
        cursor.advance();
        Ok(())
    }
}

/// Convenience function to create a BytesParser
pub fn bytes(expected: impl Into<Cow<'static, [u8]>>) -> BytesParser {
    BytesParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bytes_match() {
        let data = b"Hello world";
        let mut cursor = ByteCursor::new(data);
        let parser = bytes(&b"Hello"[..]);

        let mut node = Node::Empty;
        parser.parse(&mut cursor, &mut node).unwrap();
        assert_eq!(node, Node::token(b"Hello"));
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_bytes_mismatch_keeps_position() {
        let data = b"Hello world";
        let mut cursor = ByteCursor::new(data);
        let parser = bytes(&b"world"[..]);

        let mut node = Node::Empty;
        let error = parser.parse(&mut cursor, &mut node).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Bytes(\"world\"): expected \"world\", found \"Hello\" at offset 0"
        );
        assert!(node.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_bytes_insufficient_input() {
        let data = b"Hel";
        let mut cursor = ByteCursor::new(data);
        let parser = bytes(&b"Hello"[..]);

        let mut node = Node::Empty;
        let error = parser.parse(&mut cursor, &mut node).unwrap_err();
        assert_eq!(
            error,
            ParsitreeError::InsufficientInput {
                requested: 5,
                remaining: 3,
                position: 0,
            }
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_bytes_owned_and_binary() {
        let data = [0x00, 0xFF, 0x10, 0x20];
        let mut cursor = ByteCursor::new(&data);
        let parser = bytes(vec![0x00, 0xFF]);
        assert_eq!(parser.name(), "Bytes(\"\\x00\\xff\")");

        let mut node = Node::Empty;
        parser.parse(&mut cursor, &mut node).unwrap();
        assert_eq!(node.as_token(), Some(&data[..2]));
    }

    #[test]
    fn test_empty_bytes_matches_without_consuming() {
        let data = b"abc";
        let mut cursor = ByteCursor::new(data);
        let parser = bytes(Vec::new());

        let mut node = Node::Empty;
        parser.parse(&mut cursor, &mut node).unwrap();
        assert_eq!(node, Node::token(b""));
        assert_eq!(cursor.position(), 0);
    }
}
