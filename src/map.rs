use crate::parser::Parser;
use crate::{ByteCursor, Node, ParsitreeError};
use std::fmt;

/// Parser combinator that transforms the node a parser produces
///
/// The mapper only runs on success; failures pass through unchanged. The
/// parser sees the caller's slot as-is, so wrapping a [`Maybe`](crate::Maybe)
/// still leaves the slot untouched when nothing matched, and the mapper is
/// then handed that untouched slot.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F> fmt::Debug for Map<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(Node<'code>) -> Node<'code>,
{
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        let mut node = std::mem::take(out);
        match self.parser.parse(cursor, &mut node) {
            Ok(()) => {
                *out = (self.mapper)(node);
                Ok(())
            }
            Err(error) => {
                *out = node;
                Err(error)
            }
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(Node<'code>) -> Node<'code>,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Node<'code>) -> Node<'code>,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
