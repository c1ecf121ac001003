//! Byte cursor over the source text.
//!
//! Reads past the end return `0x00`, so the scanner can peek a few bytes
//! ahead without bounds checks of its own. Fysh glyphs outside ASCII (`♡`,
//! `≈`, `°`, `💔`) are matched as byte sequences with [`Cursor::eat`].

use memchr::memmem;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub(crate) fn source_len(&self) -> u32 {
        u32::try_from(self.source.len()).unwrap_or(u32::MAX)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.peek_at(0)
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    /// Byte `n` positions ahead, `0x00` past the end.
    #[inline]
    pub(crate) fn peek_at(&self, n: u32) -> u8 {
        self.source
            .as_bytes()
            .get(self.pos.saturating_add(n) as usize)
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_n(1);
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len());
    }

    pub(crate) fn rest(&self) -> &'a [u8] {
        self.source
            .as_bytes()
            .get(self.pos as usize..)
            .unwrap_or(&[])
    }

    #[inline]
    pub(crate) fn starts_with(&self, glyph: &[u8]) -> bool {
        self.rest().starts_with(glyph)
    }

    /// Consume `glyph` if the input continues with it.
    pub(crate) fn eat(&mut self, glyph: &[u8]) -> bool {
        if self.starts_with(glyph) {
            self.advance_n(glyph.len() as u32);
            true
        } else {
            false
        }
    }

    /// Consume bytes while `pred` holds, returning the consumed text.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        let len = self.rest().iter().take_while(|&&b| pred(b)).count();
        self.advance_n(len as u32);
        self.slice(start, self.pos)
    }

    /// Skip spaces, tabs and line breaks.
    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    /// Move to the next `\n` (left unconsumed), or to EOF.
    pub(crate) fn skip_to_newline(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.advance_n(offset as u32),
            None => self.pos = self.source_len(),
        }
    }

    /// Offset of the next occurrence of `needle`, relative to the cursor.
    pub(crate) fn find(&self, needle: &[u8]) -> Option<u32> {
        memmem::find(self.rest(), needle).map(|offset| offset as u32)
    }

    /// Source text between two byte offsets.
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Byte length of the character at the cursor (1 at EOF).
    pub(crate) fn char_len(&self) -> u32 {
        self.source
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, |c| c.len_utf8() as u32)
    }
}
