use crate::adapter::{ParserLike, normalize_one};
use crate::cursor::Cursor;
use crate::parser::{BoxedParser, Parser};
use crate::{ByteCursor, Node, ParsitreeError};
use std::fmt;
use std::sync::Arc;

/// Parser combinator that optionally matches the given parser
///
/// Always succeeds. If the inner parser fails its partial consumption is
/// undone, its error is dropped and the output slot is left as the caller
/// supplied it.
pub struct Maybe<'code> {
    parser: BoxedParser<'code>,
    name: Arc<str>,
}

impl<'code> Maybe<'code> {
    pub fn new(parser: impl ParserLike<'code>) -> Self {
        let (name, parser) = normalize_one("Maybe", parser);
        Maybe { parser, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Maybe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maybe").field("name", &self.name).finish()
    }
}

impl<'code> Parser<'code> for Maybe<'code> {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        cursor.push();
        match self.parser.parse(cursor, out) {
            Ok(()) => cursor.commit(),
            Err(error) => {
                cursor.pop();
                tracing::trace!(name = %self.name, %error, "optional parser skipped");
            }
        }
        Ok(())
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code>(parser: impl ParserLike<'code>) -> Maybe<'code> {
    Maybe::new(parser)
}
