use std::borrow::Cow;

/// Typed payload of a leaf node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'code> {
    /// Raw matched bytes, borrowed from the parsed buffer
    Token(&'code [u8]),
    /// A decoded string value
    Text(Cow<'static, str>),
}

/// Output of a parse: a typed leaf value or an ordered sequence of children
///
/// Callers hand parsers a fresh [`Node::Empty`] slot which the parser fills in
/// on success. Setting a value replaces any children and vice versa; the last
/// write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Node<'code> {
    /// A slot nothing has been written to
    #[default]
    Empty,
    Leaf(Value<'code>),
    Branch(Vec<Node<'code>>),
}

impl<'code> Node<'code> {
    pub fn token(bytes: &'code [u8]) -> Self {
        Node::Leaf(Value::Token(bytes))
    }

    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Node::Leaf(Value::Text(text.into()))
    }

    pub fn branch(children: Vec<Node<'code>>) -> Self {
        Node::Branch(children)
    }

    pub fn set_value(&mut self, value: Value<'code>) {
        *self = Node::Leaf(value);
    }

    pub fn set_children(&mut self, children: Vec<Node<'code>>) {
        *self = Node::Branch(children);
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn value(&self) -> Option<&Value<'code>> {
        match self {
            Node::Leaf(value) => Some(value),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[Node<'code>]> {
        match self {
            Node::Branch(children) => Some(children.as_slice()),
            _ => None,
        }
    }

    pub fn into_children(self) -> Option<Vec<Node<'code>>> {
        match self {
            Node::Branch(children) => Some(children),
            _ => None,
        }
    }

    /// The raw bytes of a token leaf
    pub fn as_token(&self) -> Option<&'code [u8]> {
        match self {
            Node::Leaf(Value::Token(bytes)) => Some(*bytes),
            _ => None,
        }
    }

    /// The string of a text leaf
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Leaf(Value::Text(text)) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Concatenate every token and text leaf in depth-first order
    ///
    /// For trees produced by the built-in matchers this recovers exactly the
    /// input the tree matched.
    pub fn collect_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<u8>) {
        match self {
            Node::Empty => {}
            Node::Leaf(Value::Token(bytes)) => out.extend_from_slice(bytes),
            Node::Leaf(Value::Text(text)) => out.extend_from_slice(text.as_bytes()),
            Node::Branch(children) => {
                for child in children {
                    child.collect_into(out);
                }
            }
        }
    }
}
