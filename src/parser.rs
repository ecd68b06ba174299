use crate::{ByteCursor, Node, ParsitreeError};
use std::fmt;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    /// Attempt to parse from the cursor's current position into `out`
    ///
    /// On success `out` holds the parsed node and the cursor sits after the
    /// consumed input. On failure the cursor is left exactly where it was
    /// found and `out` is untouched.
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError>;
}

/// The uniform operation type combinators hold their children as
pub type BoxedParser<'code> = Box<dyn Parser<'code> + 'code>;

impl<'code> Parser<'code> for BoxedParser<'code> {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        (**self).parse(cursor, out)
    }
}

/// Parser backed by a plain function or closure
pub struct FnParser<F> {
    f: F,
}

impl<F> FnParser<F> {
    pub fn new(f: F) -> Self {
        FnParser { f }
    }
}

impl<F> fmt::Debug for FnParser<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnParser")
            .field("f", &"<function>")
            .finish()
    }
}

impl<'code, F> Parser<'code> for FnParser<F>
where
    F: Fn(&mut ByteCursor<'code>, &mut Node<'code>) -> Result<(), ParsitreeError>,
{
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        (self.f)(cursor, out)
    }
}

/// Convenience function to turn a closure into a parser
///
/// The closure must follow the parser contract: it may only return an error
/// if it left the cursor where it found it.
pub fn from_fn<'code, F>(f: F) -> FnParser<F>
where
    F: Fn(&mut ByteCursor<'code>, &mut Node<'code>) -> Result<(), ParsitreeError>,
{
    FnParser::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_fn_parser() {
        let data = b"abc";
        let mut cursor = ByteCursor::new(data);
        let parser = from_fn(|cursor, out| {
            cursor.request(2)?;
            out.set_children(vec![Node::token(cursor.buffer())]);
            cursor.advance();
            Ok(())
        });

        let mut node = Node::Empty;
        parser.parse(&mut cursor, &mut node).unwrap();
        assert_eq!(node, Node::branch(vec![Node::token(b"ab")]));
        assert_eq!(cursor.position(), 2);

        let mut node = Node::Empty;
        assert!(parser.parse(&mut cursor, &mut node).is_err());
        assert!(node.is_empty());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_boxed_parser_delegates() {
        let data = b"z";
        let mut cursor = ByteCursor::new(data);
        let parser: BoxedParser<'_> = Box::new(from_fn(|cursor, out| {
            cursor.request(1)?;
            out.set_value(crate::Value::Token(cursor.buffer()));
            cursor.advance();
            Ok(())
        }));

        let mut node = Node::Empty;
        parser.parse(&mut cursor, &mut node).unwrap();
        assert_eq!(node.as_token(), Some(&b"z"[..]));
    }
}
