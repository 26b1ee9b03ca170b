use std::io;

use bytes::Bytes;

/// A cursor over a [`Bytes`] buffer.
///
/// Using [`Bytes`] as the backing store lets every extracted slice share the
/// source allocation instead of copying it.
pub type BytesCursor = io::Cursor<Bytes>;

/// Zero-copy read helpers for a [`BytesCursor`].
///
/// The tag walker needs three things a plain cursor does not offer: the
/// number of bytes left, a peek that does not advance, and an absolute seek
/// that cannot land past the end of the buffer.
pub trait BytesCursorExt {
    /// Number of bytes between the cursor position and the end of the buffer.
    fn remaining_len(&self) -> usize;

    /// Extracts `size` bytes and advances the cursor.
    ///
    /// O(1); the returned [`Bytes`] shares the source allocation. Fails with
    /// [`io::ErrorKind::UnexpectedEof`] if fewer than `size` bytes remain.
    fn extract_bytes(&mut self, size: usize) -> io::Result<Bytes>;

    /// Extracts every remaining byte, advancing the cursor to the end.
    fn extract_remaining(&mut self) -> Bytes;

    /// Returns `size` bytes starting at the cursor position without
    /// advancing. Fails with [`io::ErrorKind::UnexpectedEof`] if fewer than
    /// `size` bytes remain.
    fn peek_bytes(&self, size: usize) -> io::Result<Bytes>;

    /// Moves the cursor to an absolute position, clamped to `[0, len]`.
    fn seek_to(&mut self, position: usize);
}

fn remaining(cursor: &BytesCursor) -> usize {
    cursor
        .get_ref()
        .len()
        .saturating_sub(cursor.position() as usize)
}

impl BytesCursorExt for BytesCursor {
    fn remaining_len(&self) -> usize {
        remaining(self)
    }

    fn extract_bytes(&mut self, size: usize) -> io::Result<Bytes> {
        let slice = self.peek_bytes(size)?;
        self.set_position(self.position() + size as u64);
        Ok(slice)
    }

    fn extract_remaining(&mut self) -> Bytes {
        // Only fails when zero bytes remain, in which case empty is correct.
        self.extract_bytes(remaining(self)).unwrap_or_default()
    }

    fn peek_bytes(&self, size: usize) -> io::Result<Bytes> {
        if size == 0 {
            return Ok(Bytes::new());
        }

        if size > remaining(self) {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "not enough bytes",
            ));
        }

        let position = self.position() as usize;
        Ok(self.get_ref().slice(position..position + size))
    }

    fn seek_to(&mut self, position: usize) {
        self.set_position(position.min(self.get_ref().len()) as u64);
    }
}
