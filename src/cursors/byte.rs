use crate::ParsitreeError;
use crate::cursor::Cursor;

/// Transactional cursor over a byte buffer
///
/// This is the only mutable state of a parse. It is created once per parse and
/// handed to every parser as `&mut ByteCursor`.
#[derive(Debug, Clone)]
pub struct ByteCursor<'code> {
    data: &'code [u8],
    /// Byte position in the data slice (0-based index), never past `data.len()`
    position: usize,
    /// Positions saved by open transactions, innermost last
    saved: Vec<usize>,
    /// Length validated by the last successful `request`
    window: usize,
}

impl<'code> ByteCursor<'code> {
    pub fn new(data: &'code [u8]) -> Self {
        ByteCursor {
            data,
            position: 0,
            saved: Vec::new(),
            window: 0,
        }
    }

    /// Number of transactions currently open
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl<'code> Cursor<'code> for ByteCursor<'code> {
    type Element = u8;
    type Error = ParsitreeError;

    fn push(&mut self) {
        self.saved.push(self.position);
    }

    fn pop(&mut self) {
        match self.saved.pop() {
            Some(position) => {
                self.position = position;
                self.window = 0;
            }
            None => tracing::error!(position = self.position, "pop without a matching push"),
        }
    }

    fn commit(&mut self) {
        if self.saved.pop().is_none() {
            tracing::error!(position = self.position, "commit without a matching push");
        }
    }

    fn request(&mut self, n: usize) -> Result<(), Self::Error> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(ParsitreeError::InsufficientInput {
                requested: n,
                remaining,
                position: self.position,
            });
        }
        self.window = n;
        Ok(())
    }

    fn buffer(&self) -> &'code [u8] {
        let data = self.data;
        data.get(self.position..self.position + self.window)
            .unwrap_or_default()
    }

    fn advance(&mut self) {
        self.position += self.window;
        self.window = 0;
    }

    fn position(&self) -> usize {
        self.position
    }

    fn source(&self) -> &'code [u8] {
        self.data
    }
}
