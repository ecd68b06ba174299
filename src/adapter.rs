//! Normalization of heterogeneous combinator arguments
//!
//! Combinators accept already-built parsers as well as plain literals. Each
//! argument is turned into a [`ParserArg`] once, when the combinator is
//! constructed, and from there into the uniform [`BoxedParser`]. The variant an
//! argument lands in also decides the label used in combinator names, e.g.
//! `seq((byte(), "abc"))` is named `Seq(Parser, String)`.

use crate::byte::is_byte;
use crate::bytes::bytes;
use crate::parser::{BoxedParser, Parser};
use crate::string::string;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A literal that is adapted into the matcher for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Adapted into a `String` matcher
    Str(Cow<'static, str>),
    /// Adapted into a single-value `Byte` matcher
    Byte(u8),
    /// Adapted into a `Bytes` matcher
    Bytes(Cow<'static, [u8]>),
}

impl Literal {
    pub fn label(&self) -> &'static str {
        match self {
            Literal::Str(_) => "String",
            Literal::Byte(_) => "Byte",
            Literal::Bytes(_) => "Bytes",
        }
    }

    pub fn into_parser<'code>(self) -> BoxedParser<'code> {
        match self {
            Literal::Str(text) => Box::new(string(text)),
            Literal::Byte(value) => Box::new(is_byte(value)),
            Literal::Bytes(expected) => Box::new(bytes(expected)),
        }
    }
}

/// A normalized combinator argument
pub enum ParserArg<'code> {
    /// An already-built parser
    Operation(BoxedParser<'code>),
    /// A literal still to be adapted
    Literal(Literal),
}

impl ParserArg<'_> {
    /// Stable display label of the argument's kind
    pub fn label(&self) -> &'static str {
        match self {
            ParserArg::Operation(_) => "Parser",
            ParserArg::Literal(literal) => literal.label(),
        }
    }
}

impl<'code> ParserArg<'code> {
    pub fn into_parser(self) -> BoxedParser<'code> {
        match self {
            ParserArg::Operation(parser) => parser,
            ParserArg::Literal(literal) => literal.into_parser(),
        }
    }
}

impl fmt::Debug for ParserArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserArg::Operation(_) => f.write_str("Operation(<parser>)"),
            ParserArg::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
        }
    }
}

/// Anything a combinator accepts as an argument
pub trait ParserLike<'code> {
    fn into_arg(self) -> ParserArg<'code>;
}

impl<'code, P> ParserLike<'code> for P
where
    P: Parser<'code> + 'code,
{
    fn into_arg(self) -> ParserArg<'code> {
        ParserArg::Operation(Box::new(self))
    }
}

impl<'code> ParserLike<'code> for ParserArg<'code> {
    fn into_arg(self) -> ParserArg<'code> {
        self
    }
}

impl<'code> ParserLike<'code> for Literal {
    fn into_arg(self) -> ParserArg<'code> {
        ParserArg::Literal(self)
    }
}

impl<'code> ParserLike<'code> for &'static str {
    fn into_arg(self) -> ParserArg<'code> {
        ParserArg::Literal(Literal::Str(Cow::Borrowed(self)))
    }
}

impl<'code> ParserLike<'code> for String {
    fn into_arg(self) -> ParserArg<'code> {
        ParserArg::Literal(Literal::Str(Cow::Owned(self)))
    }
}

impl<'code> ParserLike<'code> for u8 {
    fn into_arg(self) -> ParserArg<'code> {
        ParserArg::Literal(Literal::Byte(self))
    }
}

impl<'code> ParserLike<'code> for &'static [u8] {
    fn into_arg(self) -> ParserArg<'code> {
        ParserArg::Literal(Literal::Bytes(Cow::Borrowed(self)))
    }
}

impl<'code, const N: usize> ParserLike<'code> for &'static [u8; N] {
    fn into_arg(self) -> ParserArg<'code> {
        ParserArg::Literal(Literal::Bytes(Cow::Borrowed(self.as_slice())))
    }
}

impl<'code> ParserLike<'code> for Vec<u8> {
    fn into_arg(self) -> ParserArg<'code> {
        ParserArg::Literal(Literal::Bytes(Cow::Owned(self)))
    }
}

/// An ordered list of combinator arguments
///
/// Implemented for tuples of up to twelve [`ParserLike`] values, which is how
/// heterogeneous arguments are passed, and for a prebuilt `Vec<ParserArg>`.
pub trait ParserList<'code> {
    fn into_args(self) -> Vec<ParserArg<'code>>;
}

impl<'code> ParserList<'code> for Vec<ParserArg<'code>> {
    fn into_args(self) -> Vec<ParserArg<'code>> {
        self
    }
}

macro_rules! impl_parser_list {
    ($($name:ident),+) => {
        impl<'code, $($name),+> ParserList<'code> for ($($name,)+)
        where
            $($name: ParserLike<'code>),+
        {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<ParserArg<'code>> {
                let ($($name,)+) = self;
                vec![$($name.into_arg()),+]
            }
        }
    };
}

impl_parser_list!(A);
impl_parser_list!(A, B);
impl_parser_list!(A, B, C);
impl_parser_list!(A, B, C, D);
impl_parser_list!(A, B, C, D, E);
impl_parser_list!(A, B, C, D, E, F);
impl_parser_list!(A, B, C, D, E, F, G);
impl_parser_list!(A, B, C, D, E, F, G, H);
impl_parser_list!(A, B, C, D, E, F, G, H, I);
impl_parser_list!(A, B, C, D, E, F, G, H, I, J);
impl_parser_list!(A, B, C, D, E, F, G, H, I, J, K);
impl_parser_list!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Render `kind(label, label, ...)` from the arguments' labels
pub fn signature(kind: &str, args: &[ParserArg<'_>]) -> Arc<str> {
    let labels: Vec<&str> = args.iter().map(ParserArg::label).collect();
    format!("{kind}({})", labels.join(", ")).into()
}

/// Normalize a single argument, returning the combinator name and the parser
pub(crate) fn normalize_one<'code>(
    kind: &str,
    arg: impl ParserLike<'code>,
) -> (Arc<str>, BoxedParser<'code>) {
    let arg = arg.into_arg();
    let name = signature(kind, std::slice::from_ref(&arg));
    (name, arg.into_parser())
}

/// Normalize an argument list, returning the combinator name and the parsers
pub(crate) fn normalize<'code>(
    kind: &str,
    list: impl ParserList<'code>,
) -> (Arc<str>, Vec<BoxedParser<'code>>) {
    let args = list.into_args();
    let name = signature(kind, &args);
    let parsers = args.into_iter().map(ParserArg::into_parser).collect();
    (name, parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::byte;
    use crate::cursor::Cursor;
    use crate::{ByteCursor, Node};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labels() {
        assert_eq!(byte().into_arg().label(), "Parser");
        assert_eq!("abc".into_arg().label(), "String");
        assert_eq!(String::from("abc").into_arg().label(), "String");
        assert_eq!(b'a'.into_arg().label(), "Byte");
        assert_eq!(b"abc".into_arg().label(), "Bytes");
        assert_eq!(vec![1u8, 2].into_arg().label(), "Bytes");
    }

    #[test]
    fn test_signature_from_tuple() {
        let (name, parsers) = normalize("Any", (byte(), byte()));
        assert_eq!(&*name, "Any(Parser, Parser)");
        assert_eq!(parsers.len(), 2);

        let (name, parsers) = normalize("Seq", (byte(), "He", b'l', &b"lo"[..]));
        assert_eq!(&*name, "Seq(Parser, String, Byte, Bytes)");
        assert_eq!(parsers.len(), 4);
    }

    #[test]
    fn test_signature_from_vec() {
        let args: Vec<ParserArg<'_>> = vec!["a".into_arg(), b'b'.into_arg()];
        let (name, _) = normalize("Seq", args);
        assert_eq!(&*name, "Seq(String, Byte)");

        let (name, _) = normalize("Seq", Vec::new());
        assert_eq!(&*name, "Seq()");
    }

    #[test]
    fn test_normalize_one() {
        let (name, _) = normalize_one("Many", b'x');
        assert_eq!(&*name, "Many(Byte)");
    }

    #[test]
    fn test_string_literal_becomes_string_matcher() {
        let data = b"Hello world";
        let mut cursor = ByteCursor::new(data);
        let parser = "Hello".into_arg().into_parser();

        let mut node = Node::Empty;
        parser.parse(&mut cursor, &mut node).unwrap();
        assert_eq!(node, Node::text("Hello"));
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_byte_literals_become_token_matchers() {
        let data = b"Hello";
        let mut cursor = ByteCursor::new(data);

        let mut node = Node::Empty;
        b'H'.into_arg().into_parser().parse(&mut cursor, &mut node).unwrap();
        assert_eq!(node, Node::token(b"H"));

        let mut node = Node::Empty;
        b"ell"
            .into_arg()
            .into_parser()
            .parse(&mut cursor, &mut node)
            .unwrap();
        assert_eq!(node, Node::token(b"ell"));
        assert_eq!(cursor.position(), 4);
    }
}
