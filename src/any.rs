use crate::adapter::{ParserList, normalize};
use crate::cursor::Cursor;
use crate::parser::{BoxedParser, Parser};
use crate::{ByteCursor, Node, ParsitreeError};
use std::fmt;
use std::sync::Arc;

/// Parser combinator for ordered choice
///
/// Alternatives are tried left to right against the same output slot and the
/// first one that succeeds wins; later alternatives are never attempted. When
/// every alternative fails the individual errors are dropped and a single
/// error naming the choice is reported at the position where it began.
pub struct Any<'code> {
    parsers: Vec<BoxedParser<'code>>,
    name: Arc<str>,
}

impl<'code> Any<'code> {
    pub fn new(list: impl ParserList<'code>) -> Self {
        let (name, parsers) = normalize("Any", list);
        Any { parsers, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Any<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Any")
            .field("name", &self.name)
            .field("len", &self.parsers.len())
            .finish()
    }
}

impl<'code> Parser<'code> for Any<'code> {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        cursor.push();
        for parser in &self.parsers {
            if parser.parse(cursor, out).is_ok() {
                cursor.commit();
                return Ok(());
            }
        }
        cursor.pop();
        tracing::trace!(name = %self.name, position = cursor.position(), "no alternative matched");
        Err(ParsitreeError::syntax(
            Arc::clone(&self.name),
            "no alternative matched",
            cursor.position(),
        ))
    }
}

/// Convenience function to create an Any parser
pub fn any<'code>(list: impl ParserList<'code>) -> Any<'code> {
    Any::new(list)
}
