use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

/// Error produced when a parser fails to match
///
/// Errors form a singly-linked chain from the outermost combinator down to the
/// primitive that actually mismatched. Displaying an error prints one line per
/// layer, outermost first, each annotated with its own byte offset:
///
/// ```text
/// Seq(Byte, Byte): element 1 failed at offset 0
/// Byte('x'): expected 'x', found 'e' at offset 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsitreeError {
    /// Fewer bytes remain than a matcher requested
    #[error(
        "unexpected end of input: needed {requested} bytes, {remaining} remaining at offset {position}"
    )]
    InsufficientInput {
        requested: usize,
        remaining: usize,
        position: usize,
    },
    /// A named parser rejected the input at `position`
    #[error("{name}: {message} at offset {position}")]
    Syntax {
        name: Arc<str>,
        message: Cow<'static, str>,
        position: usize,
    },
    /// A combinator layer wrapping the failure of one of its children
    #[error("{name}: {message} at offset {position}\n{cause}")]
    Trace {
        name: Arc<str>,
        message: Cow<'static, str>,
        position: usize,
        #[source]
        cause: Box<ParsitreeError>,
    },
    /// The grammar matched but input was left over
    #[error("trailing input: {remaining} bytes left unparsed at offset {position}")]
    TrailingInput { position: usize, remaining: usize },
}

impl ParsitreeError {
    pub fn syntax(
        name: impl Into<Arc<str>>,
        message: impl Into<Cow<'static, str>>,
        position: usize,
    ) -> Self {
        ParsitreeError::Syntax {
            name: name.into(),
            message: message.into(),
            position,
        }
    }

    pub fn trace(
        name: impl Into<Arc<str>>,
        message: impl Into<Cow<'static, str>>,
        position: usize,
        cause: ParsitreeError,
    ) -> Self {
        ParsitreeError::Trace {
            name: name.into(),
            message: message.into(),
            position,
            cause: Box::new(cause),
        }
    }

    /// Returns the byte offset this layer reports
    pub fn position(&self) -> usize {
        match self {
            ParsitreeError::InsufficientInput { position, .. }
            | ParsitreeError::Syntax { position, .. }
            | ParsitreeError::Trace { position, .. }
            | ParsitreeError::TrailingInput { position, .. } => *position,
        }
    }

    /// Name of the parser that produced this layer, if it is a named layer
    pub fn name(&self) -> Option<&str> {
        match self {
            ParsitreeError::Syntax { name, .. } | ParsitreeError::Trace { name, .. } => Some(&**name),
            ParsitreeError::InsufficientInput { .. } | ParsitreeError::TrailingInput { .. } => {
                None
            }
        }
    }

    /// The wrapped failure of a traced layer
    pub fn cause(&self) -> Option<&ParsitreeError> {
        match self {
            ParsitreeError::Trace { cause, .. } => Some(&**cause),
            _ => None,
        }
    }

    /// Iterates the chain outermost to innermost, starting with `self`
    pub fn layers(&self) -> Layers<'_> {
        Layers { next: Some(self) }
    }

    /// The innermost failure, i.e. the primitive mismatch that started the chain
    pub fn innermost(&self) -> &ParsitreeError {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }
}

/// Iterator over the layers of an error chain
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    next: Option<&'a ParsitreeError>,
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a ParsitreeError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
