use crate::adapter::{ParserList, normalize};
use crate::cursor::Cursor;
use crate::parser::{BoxedParser, Parser};
use crate::{ByteCursor, Node, ParsitreeError};
use std::fmt;
use std::sync::Arc;

/// Parser combinator that runs every parser in order, atomically
///
/// The output is a branch with one child per element, including elements that
/// wrote nothing. If any element fails, the whole sequence is rolled back, even
/// the elements that already matched, and the failure is wrapped in a trace
/// layer naming the sequence.
pub struct Seq<'code> {
    parsers: Vec<BoxedParser<'code>>,
    name: Arc<str>,
}

impl<'code> Seq<'code> {
    pub fn new(list: impl ParserList<'code>) -> Self {
        let (name, parsers) = normalize("Seq", list);
        Seq { parsers, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Seq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("name", &self.name)
            .field("len", &self.parsers.len())
            .finish()
    }
}

impl<'code> Parser<'code> for Seq<'code> {
    fn parse(
        &self,
        cursor: &mut ByteCursor<'code>,
        out: &mut Node<'code>,
    ) -> Result<(), ParsitreeError> {
        cursor.push();
        let mut nodes = Vec::with_capacity(self.parsers.len());
        for (index, parser) in self.parsers.iter().enumerate() {
            let mut node = Node::Empty;
            if let Err(error) = parser.parse(cursor, &mut node) {
                cursor.pop();
                tracing::trace!(name = %self.name, index, position = cursor.position(), "sequence rolled back");
                return Err(ParsitreeError::trace(
                    Arc::clone(&self.name),
                    format!("element {index} failed"),
                    cursor.position(),
                    error,
                ));
            }
            nodes.push(node);
        }
        cursor.commit();
        out.set_children(nodes);
        Ok(())
    }
}

/// Convenience function to create a Seq parser
///
/// # Example
/// ```
/// use parsitree::{ByteCursor, Node, Parser, byte::is_byte, seq};
///
/// let data = b"Hello";
/// let mut cursor = ByteCursor::new(data);
/// let parser = seq((is_byte(b'H'), "ell"));
///
/// let mut node = Node::Empty;
/// parser.parse(&mut cursor, &mut node).unwrap();
/// assert_eq!(node, Node::branch(vec![Node::token(b"H"), Node::text("ell")]));
/// ```
pub fn seq<'code>(list: impl ParserList<'code>) -> Seq<'code> {
    Seq::new(list)
}
