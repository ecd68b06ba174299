use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::{ByteCursor, Node, ParsitreeError, Value};
use std::sync::Arc;

/// Render a byte the way it reads in a Rust byte literal, e.g. `'H'` or `'\xff'`
pub(crate) fn quote(byte: u8) -> String {
    format!("'{}'", byte.escape_ascii())
}

fn quote_all(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| quote(b)).collect::<Vec<_>>().join(", ")
}

/// Shared single-byte matcher body: request one byte, test it, consume on match
fn match_one<'code>(
    cursor: &mut ByteCursor<'code>,
    out: &mut Node<'code>,
    name: &Arc<str>,
    accept: impl Fn(u8) -> bool,
    expected: impl FnOnce() -> String,
) -> Result<(), ParsitreeError> {
    cursor.request(1)?;
    let window = cursor.buffer();
    match window.first() {
        Some(&found) if accept(found) => {
            out.set_value(Value::Token(window));
            cursor.advance();
            Ok(())
        }
        found => {
            let found = found.map_or_else(|| "nothing".to_string(), |&b| quote(b));
            Err(ParsitreeError::syntax(
                Arc::clone(name),
                format!("expected {}, found {found}", expected()),
                cursor.position(),
            ))
        }
    }
}

/// Parser that consumes any single byte
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteParser;

impl ByteParser {
    pub fn new() -> Self {
        ByteParser
    }
}

/// Convenience function to create a ByteParser
pub fn byte() -> ByteParser {
    ByteParser::new()
}

impl<'code> Parser<'code> for ByteParser {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        cursor.request(1)?;
        out.set_value(Value::Token(cursor.buffer()));
        cursor.advance();
        Ok(())
    }
}

/// Parser that matches a single byte equal to any of the listed values
///
/// With no listed values it matches any byte, like [`byte`].
#[derive(Debug, Clone)]
pub struct OneOfParser {
    expected: Vec<u8>,
    name: Arc<str>,
}

impl OneOfParser {
    pub fn new(expected: impl Into<Vec<u8>>) -> Self {
        let expected = expected.into();
        let name = format!("Byte({})", quote_all(&expected)).into();
        OneOfParser { expected, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code> Parser<'code> for OneOfParser {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        match_one(
            cursor,
            out,
            &self.name,
            |b| self.expected.is_empty() || self.expected.contains(&b),
            || match self.expected.as_slice() {
                [single] => quote(*single),
                many => format!("one of {}", quote_all(many)),
            },
        )
    }
}

/// Convenience function to create a OneOfParser
pub fn one_of(expected: impl Into<Vec<u8>>) -> OneOfParser {
    OneOfParser::new(expected)
}

/// Convenience function to create a OneOfParser for a single value
pub fn is_byte(expected: u8) -> OneOfParser {
    OneOfParser::new(vec![expected])
}

/// Parser that matches a byte within a range (inclusive)
#[derive(Debug, Clone)]
pub struct ByteRangeParser {
    start: u8,
    end: u8,
    name: Arc<str>,
}

impl ByteRangeParser {
    pub fn new(start: u8, end: u8) -> Self {
        let name = format!("ByteRange({}, {})", quote(start), quote(end)).into();
        ByteRangeParser { start, end, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code> Parser<'code> for ByteRangeParser {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        match_one(
            cursor,
            out,
            &self.name,
            |b| (self.start..=self.end).contains(&b),
            || format!("byte in range {}-{}", quote(self.start), quote(self.end)),
        )
    }
}

/// Convenience function to create a ByteRangeParser
pub fn byte_range(start: u8, end: u8) -> ByteRangeParser {
    ByteRangeParser::new(start, end)
}
