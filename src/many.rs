use crate::adapter::{ParserLike, normalize_one};
use crate::cursor::Cursor;
use crate::parser::{BoxedParser, Parser};
use crate::{ByteCursor, Node, ParsitreeError};
use std::fmt;
use std::sync::Arc;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first match is mandatory; zero matches is an error wrapped in a trace
/// layer naming the repetition. After that the parser is applied until it
/// fails, and only the failed attempt is undone. A repeated match that consumes
/// nothing also ends the loop, and is not recorded.
///
/// Zero-or-more is `maybe(many(p))`.
pub struct Many<'code> {
    parser: BoxedParser<'code>,
    name: Arc<str>,
}

impl<'code> Many<'code> {
    pub fn new(parser: impl ParserLike<'code>) -> Self {
        let (name, parser) = normalize_one("Many", parser);
        Many { parser, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Many<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Many").field("name", &self.name).finish()
    }
}

impl<'code> Parser<'code> for Many<'code> {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        // First parse must succeed
        let mut first = Node::Empty;
        cursor.push();
        if let Err(error) = self.parser.parse(cursor, &mut first) {
            cursor.pop();
            return Err(ParsitreeError::trace(
                Arc::clone(&self.name),
                "expected at least one match",
                cursor.position(),
                error,
            ));
        }
        cursor.commit();

        let mut nodes = vec![first];
        loop {
            let start = cursor.position();
            let mut scratch = Node::Empty;
            cursor.push();
            match self.parser.parse(cursor, &mut scratch) {
                Ok(()) if cursor.position() == start => {
                    cursor.pop();
                    tracing::trace!(name = %self.name, position = start, "zero-width repetition, stopping");
                    break;
                }
                Ok(()) => {
                    cursor.commit();
                    nodes.push(scratch);
                }
                Err(_) => {
                    // Stop on first error after at least one match
                    cursor.pop();
                    break;
                }
            }
        }

        out.set_children(nodes);
        Ok(())
    }
}

/// Convenience function to create a Many parser
pub fn many<'code>(parser: impl ParserLike<'code>) -> Many<'code> {
    Many::new(parser)
}
