//! Position, line and error tracking over an immutable source view.
//!
//! The cursor advances through raw source bytes; the source need not be
//! valid UTF-8. Reads past the end return `0x00`, so callers can look ahead
//! without bounds checks; use [`Cursor::is_eof`] to tell EOF apart from an
//! interior null byte.
//!
//! # Line Tracking
//!
//! Every method that moves the cursor forward counts the `\n` bytes it steps
//! over. The line number therefore always equals `1 + (newlines before pos)`,
//! no matter which scanning routine moved the cursor.

/// Mutable scanning state over borrowed source bytes.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariants
///
/// - `pos <= source.len()`.
/// - `line` starts at 1 and grows by one per consumed `\n`.
/// - `had_error` never goes back to `false` once set.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    source: &'src [u8],
    /// Current read position (byte index into `source`).
    pos: usize,
    /// 1-based line of the byte at `pos`.
    line: u32,
    had_error: bool,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at byte 0, line 1, with the error flag clear.
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            had_error: false,
        }
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.get(index).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether any error has been recorded during this scan.
    #[inline]
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Record that an error occurred. The flag stays set for the rest of the
    /// scan.
    #[inline]
    pub fn mark_error(&mut self) {
        self.had_error = true;
    }

    /// Unconsumed source bytes.
    pub fn remaining(&self) -> &'src [u8] {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// Returns `true` if the unconsumed input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Extract a span of source bytes.
    ///
    /// Returns an empty slice if `start..end` is out of range.
    pub fn slice(&self, start: usize, end: usize) -> &'src [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source.get(start..end).unwrap_or_default()
    }

    /// Extract the source bytes from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        self.slice(start, self.pos)
    }

    /// Advance the cursor by one byte, counting it if it is a newline.
    ///
    /// No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes (clamped to the end of the source),
    /// counting every newline stepped over.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        let skipped = self.slice(self.pos, end);
        let newlines = memchr::memchr_iter(b'\n', skipped).count();
        self.line = self
            .line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
        self.pos = end;
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`. Returns the number of bytes
    /// consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
        self.pos - start
    }

    /// Advance to the next `\n` byte (not past it) or to EOF.
    ///
    /// Used by the comment scanner to skip comment bodies. Never crosses a
    /// line boundary.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance past ordinary string content to the next `"` or `\n`.
    ///
    /// Returns the byte found, or `0` at EOF. The cursor is left *on* the
    /// returned byte so the caller decides how to consume it.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        match memchr::memchr2(b'"', b'\n', self.remaining()) {
            Some(offset) => {
                self.pos += offset;
                self.current()
            }
            None => {
                self.pos = self.source.len();
                0
            }
        }
    }
}
