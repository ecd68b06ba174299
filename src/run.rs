use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::{ByteCursor, Node, ParsitreeError};

/// Options for a top-level parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    require_complete: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            require_complete: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether input left over after a successful match is an error
    #[must_use]
    pub fn require_complete(mut self, require_complete: bool) -> Self {
        self.require_complete = require_complete;
        self
    }

    pub fn requires_complete(&self) -> bool {
        self.require_complete
    }
}

/// Run `parser` over the whole of `data`
///
/// Equivalent to [`parse_with`] using [`ParseOptions::default`], which requires
/// the parser to consume every byte.
///
/// # Example
/// ```
/// use parsitree::{many, parse, byte::byte_range};
///
/// let tree = parse(&many(byte_range(b'a', b'z')), b"abc").unwrap();
/// assert_eq!(tree.collect_bytes(), b"abc");
///
/// let error = parse(&many(byte_range(b'a', b'z')), b"abc1").unwrap_err();
/// assert_eq!(error.to_string(), "trailing input: 1 bytes left unparsed at offset 3");
/// ```
pub fn parse<'code, P>(parser: &P, data: &'code [u8]) -> Result<Node<'code>, ParsitreeError>
where
    P: Parser<'code> + ?Sized,
{
    parse_with(parser, data, ParseOptions::default())
}

/// Run `parser` over `data` with explicit options
pub fn parse_with<'code, P>(
    parser: &P,
    data: &'code [u8],
    options: ParseOptions,
) -> Result<Node<'code>, ParsitreeError>
where
    P: Parser<'code> + ?Sized,
{
    let span = tracing::debug_span!("parse", len = data.len());
    let _enter = span.enter();

    let mut cursor = ByteCursor::new(data);
    let mut node = Node::Empty;
    let outcome = parser.parse(&mut cursor, &mut node);

    if cursor.depth() != 0 {
        tracing::error!(
            depth = cursor.depth(),
            "parser left transactions open; push and pop/commit are unbalanced"
        );
    }

    if let Err(error) = outcome {
        tracing::debug!(position = error.position(), "parse failed");
        return Err(error);
    }

    if options.require_complete && !cursor.is_eos() {
        let error = ParsitreeError::TrailingInput {
            position: cursor.position(),
            remaining: cursor.remaining(),
        };
        tracing::debug!(%error, "parse incomplete");
        return Err(error);
    }

    tracing::debug!(consumed = cursor.position(), "parse succeeded");
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any::any;
    use crate::byte::{byte, byte_range, is_byte};
    use crate::many::many;
    use crate::maybe::maybe;
    use crate::parser::BoxedParser;
    use crate::seq::seq;
    use pretty_assertions::assert_eq;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    /// `[+-]?[0-9]+(\.[0-9]+)?`
    fn number<'code>() -> BoxedParser<'code> {
        let digits = || many(byte_range(b'0', b'9'));
        Box::new(seq((
            maybe(any((b'+', b'-'))),
            digits(),
            maybe(seq((b'.', digits()))),
        )))
    }

    #[test]
    fn test_parse_complete_input() {
        init_tracing();
        let tree = parse(&number(), b"-12.5").unwrap();

        let children = tree.children().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], Node::token(b"-"));
        assert_eq!(children[1].collect_bytes(), b"12".to_vec());
        assert_eq!(children[2].collect_bytes(), b".5".to_vec());
        assert_eq!(tree.collect_bytes(), b"-12.5".to_vec());
    }

    #[test]
    fn test_parse_optional_parts_absent() {
        init_tracing();
        let tree = parse(&number(), b"42").unwrap();

        let children = tree.children().unwrap();
        assert_eq!(children[0], Node::Empty);
        assert_eq!(children[2], Node::Empty);
    }

    #[test]
    fn test_parse_trailing_input() {
        init_tracing();
        let error = parse(&number(), b"42abc").unwrap_err();
        assert_eq!(
            error,
            ParsitreeError::TrailingInput {
                position: 2,
                remaining: 3,
            }
        );

        let options = ParseOptions::new().require_complete(false);
        assert!(!options.requires_complete());
        let tree = parse_with(&number(), b"42abc", options).unwrap();
        assert_eq!(tree.collect_bytes(), b"42".to_vec());
    }

    #[test]
    fn test_parse_failure_exposes_full_trace() {
        init_tracing();
        let error = parse(&number(), b"-x").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Seq(Parser, Parser, Parser): element 1 failed at offset 0\n\
             Many(Parser): expected at least one match at offset 1\n\
             ByteRange('0', '9'): expected byte in range '0'-'9', found 'x' at offset 1"
        );
        assert_eq!(error.layers().count(), 3);
    }

    #[test]
    fn test_dot_without_fraction_is_trailing() {
        init_tracing();
        // The optional fraction rolls back entirely, leaving the dot unparsed
        let error = parse(&number(), b"1.").unwrap_err();
        assert_eq!(
            error,
            ParsitreeError::TrailingInput {
                position: 1,
                remaining: 1,
            }
        );
    }

    #[test]
    fn test_rerun_from_checkpoint_is_deterministic() {
        let data = b"Hello, Hello!";
        let parser = seq((
            many(any((byte_range(b'A', b'Z'), byte_range(b'a', b'z')))),
            maybe(b','),
        ));

        let mut cursor = ByteCursor::new(data);
        let checkpoint = cursor.clone();

        let mut first = Node::Empty;
        parser.parse(&mut cursor, &mut first).unwrap();
        let first_position = cursor.position();

        let mut cursor = checkpoint;
        let mut second = Node::Empty;
        parser.parse(&mut cursor, &mut second).unwrap();

        assert_eq!(first, second);
        assert_eq!(cursor.position(), first_position);
        assert_eq!(first_position, 6);
    }

    #[test]
    fn test_parse_empty_input() {
        init_tracing();
        assert!(parse(&byte(), b"").is_err());

        let tree = parse(&maybe(is_byte(b'a')), b"").unwrap();
        assert!(tree.is_empty());
    }
}
