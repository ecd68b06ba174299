use std::error::Error;

/// Transactional cursor trait for parser combinators
///
/// A cursor owns a position into a finite sequence of elements together with a
/// stack of saved positions. Combinators open a transaction with [`push`],
/// and close it with exactly one of [`pop`] (rollback) or [`commit`] (keep
/// whatever was consumed since the matching push). Transactions nest to any
/// depth but must be closed in LIFO order.
///
/// Matchers read input in two steps: [`request`] validates that a window of
/// `n` elements is available, [`buffer`] exposes that window and [`advance`]
/// consumes it. `advance` is the only operation that moves the position
/// forward.
///
/// [`push`]: Cursor::push
/// [`pop`]: Cursor::pop
/// [`commit`]: Cursor::commit
/// [`request`]: Cursor::request
/// [`buffer`]: Cursor::buffer
/// [`advance`]: Cursor::advance
pub trait Cursor<'code> {
    /// The type of elements this cursor reads
    type Element: 'code;

    /// Error type returned when a request cannot be satisfied
    type Error: Error;

    /// Save the current position, beginning a transaction
    fn push(&mut self);

    /// Restore the most recently saved position and discard it
    fn pop(&mut self);

    /// Discard the most recently saved position, keeping the current one
    fn commit(&mut self);

    /// Validate that at least `n` elements remain from the current position
    ///
    /// On success the validated length becomes the window used by `buffer` and
    /// `advance`. Fails without side effects otherwise.
    fn request(&mut self, n: usize) -> Result<(), Self::Error>;

    /// The window most recently validated by `request`, starting at the current position
    fn buffer(&self) -> &'code [Self::Element];

    /// Move the position forward past the validated window
    fn advance(&mut self);

    /// Current absolute offset into the source
    fn position(&self) -> usize;

    /// The full source this cursor reads from
    fn source(&self) -> &'code [Self::Element];

    /// Number of elements left between the position and the end of the source
    fn remaining(&self) -> usize {
        self.source().len().saturating_sub(self.position())
    }

    /// Check if the cursor is at the end of the source
    fn is_eos(&self) -> bool {
        self.remaining() == 0
    }
}
