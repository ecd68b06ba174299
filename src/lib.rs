//! # Parsitree - Backtracking Parser Combinators
//!
//! Parsitree matches structured patterns in a finite byte buffer by composing
//! small matching operations into larger ones. A successful parse produces a
//! [`Node`] tree; a failed one produces a [`ParsitreeError`] trace naming every
//! enclosing combinator and the offset it failed at.
//!
//! - **Transactional cursor**: [`ByteCursor`] holds the position and a stack of
//!   saved positions; combinators `push` before trying something and `pop` or
//!   `commit` afterwards, so failed attempts never leak consumption
//! - **Primitive matchers**: [`byte::byte`], [`byte::one_of`],
//!   [`byte::byte_range`], [`bytes::bytes`], [`string::string`]
//! - **Combinators**: [`seq()`], [`any()`], [`maybe()`], [`many()`], [`map()`]
//! - **Literal arguments**: combinators accept plain literals next to parsers,
//!   so `seq((b'H', "ello"))` works
//!
//! ```
//! use parsitree::{any, many, parse, seq, byte::byte_range};
//!
//! let word = many(any((byte_range(b'a', b'z'), byte_range(b'A', b'Z'))));
//! let greeting = seq((word, ", ", "world"));
//!
//! let tree = parse(&greeting, b"Hello, world").unwrap();
//! assert_eq!(tree.children().map(|c| c.len()), Some(3));
//!
//! let error = parse(&greeting, b"Hello world").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Seq(Parser, String, String): element 1 failed at offset 0\n\
//!      String(\", \"): expected \", \" at offset 5"
//! );
//! ```

pub mod adapter;
pub mod any;
pub mod byte;
pub mod bytes;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod many;
pub mod map;
pub mod maybe;
pub mod node;
pub mod parser;
pub mod run;
pub mod seq;
pub mod string;

pub use adapter::{Literal, ParserArg, ParserLike, ParserList};
pub use any::{Any, any};
pub use cursor::Cursor;
pub use cursors::ByteCursor;
pub use error::ParsitreeError;
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use maybe::{Maybe, maybe};
pub use node::{Node, Value};
pub use parser::{BoxedParser, Parser, from_fn};
pub use run::{ParseOptions, parse, parse_with};
pub use seq::{Seq, seq};
