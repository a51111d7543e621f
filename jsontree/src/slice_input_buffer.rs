// SPDX-License-Identifier: Apache-2.0

/// A buffer that manages input data and current scanning position.
/// The data is borrowed from the caller and never copied; the position only
/// ever moves forward.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Returns the byte at the current position without consuming it.
    pub fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consumes one byte. Does nothing once the end has been reached.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Consumes up to `count` bytes, stopping at the end of the data.
    pub fn advance_by(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Everything from the current position to the end of the data.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    /// The bytes consumed since `start`.
    pub fn lexeme(&self, start: usize) -> &'a [u8] {
        self.data.get(start..self.pos).unwrap_or_default()
    }

    /// Skips JSON insignificant whitespace: space, tab, CR and LF.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek_byte() {
            self.advance();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }
}
