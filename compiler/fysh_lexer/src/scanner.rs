//! Glyph rules.
//!
//! [`Scanner::next_token`] produces one token per call. Structural fysh
//! (`><>`, `<><`, keyword fysh) and comments are matched first; what is left
//! of a `><` or `<` header is decided by its first content glyph, which
//! selects the literal, identifier or bowl consumer.

use fysh_ir::{Facing, Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};

const HEART: &[u8] = "♡".as_bytes();
const BROKEN_HEART: &[u8] = "💔".as_bytes();
const APPROX: &[u8] = "≈".as_bytes();
const DOUBLE_APPROX: &[u8] = "≈≈".as_bytes();
const DEGREE_EYE: &[u8] = "°".as_bytes();

const LINE_COMMENT: &[u8] = b"><//>";
const BLOCK_COMMENT_OPEN: &[u8] = b"></*>";
const BLOCK_COMMENT_CLOSE: &[u8] = b"<*/><";

/// Characters allowed in identifier and subroutine names.
#[inline]
pub(crate) fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Value of a scale glyph: `(`/`)` are 0, `{`/`}` are 1.
#[inline]
pub(crate) fn scale_value(b: u8) -> Option<u64> {
    match b {
        b'(' | b')' => Some(0),
        b'{' | b'}' => Some(1),
        _ => None,
    }
}

/// Whether `b`, following a `<`, makes that `<` the head of another token.
///
/// Decides if the last `<` of `<x><<` belongs to a decrement; `<x><<~` is a
/// decrement then `~`.
fn continues_left_glyph(b: u8) -> bool {
    is_name_char(b)
        || scale_value(b).is_some()
        || matches!(b, b'/' | b'>' | b'<' | b'\\' | b'^' | b'*' | b'@')
        || b == DEGREE_EYE[0]
}

/// Scales read most significant first.
struct Scales {
    value: u64,
    overflow: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
        }
    }

    pub(crate) fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Ok(Token::new(TokenKind::Eof, Span::point(start)));
        }
        let kind = self.scan(start)?;
        Ok(Token::new(kind, Span::new(start, self.cursor.pos())))
    }

    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.starts_with(LINE_COMMENT) {
                self.cursor.skip_to_newline();
            } else if self.cursor.starts_with(BLOCK_COMMENT_OPEN) {
                let start = self.cursor.pos();
                self.cursor.advance_n(BLOCK_COMMENT_OPEN.len() as u32);
                match self.cursor.find(BLOCK_COMMENT_CLOSE) {
                    Some(offset) => self
                        .cursor
                        .advance_n(offset + BLOCK_COMMENT_CLOSE.len() as u32),
                    None => {
                        return Err(LexError::new(
                            LexErrorKind::UnterminatedComment,
                            Span::new(start, self.cursor.pos()),
                        ))
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn scan(&mut self, start: u32) -> Result<TokenKind, LexError> {
        let kind = match self.cursor.current() {
            b'>' => return self.right_facing(start),
            b'<' => return self.left_facing(start),
            b'(' => return Ok(self.open_paren()),
            b'o' => return self.eye(start),
            b'~' => return Ok(self.tilde()),
            b')' => TokenKind::RParen,
            b'[' => TokenKind::TankOpen,
            b']' => TokenKind::TankClose,
            b'-' => TokenKind::Dash,
            b'|' => TokenKind::Pipe,
            b'^' => TokenKind::Caret,
            b'&' => TokenKind::Amp,
            b'=' => {
                if self.cursor.eat(b"==") {
                    return Ok(TokenKind::EqEq);
                }
                TokenKind::Eq
            }
            // `!!` pairs first; an odd `!` is left over as the innermost.
            b'!' => {
                if self.cursor.eat(b"!!") {
                    return Ok(TokenKind::LogicalNot);
                }
                TokenKind::BitNot
            }
            _ => return self.non_ascii(start),
        };
        self.cursor.advance();
        Ok(kind)
    }

    fn non_ascii(&mut self, start: u32) -> Result<TokenKind, LexError> {
        if self.cursor.eat(HEART) {
            Ok(TokenKind::Star)
        } else if self.cursor.eat(BROKEN_HEART) {
            Ok(TokenKind::Slash)
        } else if self.cursor.eat(DOUBLE_APPROX) {
            Ok(TokenKind::EqEq)
        } else {
            Err(self.invalid_glyph(start))
        }
    }

    /// Glyphs opening with `>`: right-facing headers, increments, calls.
    fn right_facing(&mut self, start: u32) -> Result<TokenKind, LexError> {
        if self.cursor.starts_with(b"><") {
            if self.cursor.eat(b"><>") {
                return Ok(TokenKind::BlockOpen);
            }
            if self.cursor.eat(b"><(((^>") {
                return Ok(TokenKind::If);
            }
            if self.cursor.eat(b"><(((*>") {
                return Ok(TokenKind::Else);
            }
            if self.cursor.eat(b"><(((@>") {
                return Ok(TokenKind::While);
            }
            if self.cursor.eat(b"><\\/>") {
                return Ok(TokenKind::Break);
            }
            self.cursor.advance_n(2);
            let first = self.cursor.current();
            if first == b'#' {
                return self.bowl(start);
            }
            if scale_value(first).is_some() {
                return self.right_literal(start);
            }
            if is_name_char(first) {
                let name = self.name();
                if !self.cursor.eat(b">") {
                    return Err(self.invalid_glyph(start));
                }
                return Ok(TokenKind::Ident {
                    name,
                    facing: Facing::Right,
                });
            }
            return Err(self.invalid_glyph(start));
        }

        if self.cursor.eat(b">><") {
            let name = self.required_name(">><")?;
            if !self.cursor.eat(b">") {
                return Err(self.invalid_glyph(start));
            }
            return Ok(TokenKind::Increment(name));
        }

        if self.cursor.eat(b">(") {
            let name = self.required_name(">(")?;
            if !self.cursor.eat(b")") {
                return Err(self.invalid_glyph(start));
            }
            return Ok(TokenKind::Sub {
                name,
                facing: Facing::Right,
            });
        }

        Err(self.invalid_glyph(start))
    }

    /// Glyphs opening with `<`.
    fn left_facing(&mut self, start: u32) -> Result<TokenKind, LexError> {
        const STRUCTURAL: [(&[u8], TokenKind); 8] = [
            (b"<><", TokenKind::BlockClose),
            (b"<^)))><", TokenKind::If),
            (b"<*)))><", TokenKind::Else),
            (b"<@)))><", TokenKind::While),
            (b"<\\/><", TokenKind::Break),
            (b"<~", TokenKind::Return),
            (b"</3", TokenKind::Slash),
            (b"<3", TokenKind::Star),
        ];

        // `<3x><` is an identifier; any other `<3` multiplies.
        if !self.cursor.starts_with(b"<3") || !is_name_char(self.cursor.peek_at(2)) {
            for (glyph, kind) in STRUCTURAL {
                if self.cursor.eat(glyph) {
                    return Ok(kind);
                }
            }
        }

        self.cursor.advance();
        let first = self.cursor.current();
        if scale_value(first).is_some() {
            return self.left_literal(start);
        }
        if first == b'o' && scale_value(self.cursor.peek()).is_some() {
            self.cursor.advance();
            return self.left_literal(start);
        }
        if self.cursor.starts_with(DEGREE_EYE)
            && scale_value(self.cursor.peek_at(DEGREE_EYE.len() as u32)).is_some()
        {
            self.cursor.advance_n(DEGREE_EYE.len() as u32);
            return self.left_literal(start);
        }
        if is_name_char(first) {
            let name = self.name();
            if !self.cursor.eat(b"><") {
                return Err(self.invalid_glyph(start));
            }
            if self.cursor.current() == b'<' && !continues_left_glyph(self.cursor.peek()) {
                self.cursor.advance();
                return Ok(TokenKind::Decrement(name));
            }
            return Ok(TokenKind::Ident {
                name,
                facing: Facing::Left,
            });
        }
        Err(self.invalid_glyph(start))
    }

    /// `(+o`, a left-facing call `(name)<`, or a plain `(`.
    fn open_paren(&mut self) -> TokenKind {
        if self.cursor.eat(b"(+o") {
            return TokenKind::Bubble("(+o");
        }
        let mut probe = self.cursor;
        probe.advance();
        let name = probe.eat_while(is_name_char);
        if !name.is_empty() && probe.eat(b")<") {
            let name = name.to_string();
            self.cursor = probe;
            return TokenKind::Sub {
                name,
                facing: Facing::Left,
            };
        }
        self.cursor.advance();
        TokenKind::LParen
    }

    /// Glyphs opening with an eye: `o~`, `o~=`, `o~≈`, `o+)`.
    fn eye(&mut self, start: u32) -> Result<TokenKind, LexError> {
        if self.cursor.eat(b"o~") {
            if self.cursor.eat(b"=") || self.cursor.eat(APPROX) {
                return Ok(TokenKind::GtEq);
            }
            return Ok(TokenKind::Gt);
        }
        if self.cursor.eat(b"o+)") {
            return Ok(TokenKind::Bubble("o+)"));
        }
        Err(self.invalid_glyph(start))
    }

    /// `~` and the comparisons that start with it.
    fn tilde(&mut self) -> TokenKind {
        // `~o+)` is a terminator followed by a bubble, not `~o`.
        if self.cursor.peek() == b'o' && self.cursor.peek_at(2) != b'+' {
            self.cursor.advance_n(2);
            if self.cursor.eat(b"=") || self.cursor.eat(APPROX) {
                return TokenKind::LtEq;
            }
            return TokenKind::Lt;
        }
        self.cursor.advance();
        if self.cursor.eat(b"=") || self.cursor.eat(APPROX) {
            return TokenKind::NotEq;
        }
        TokenKind::Tilde
    }

    /// `><#…#>`, kept verbatim. The cursor is on the opening `#`.
    fn bowl(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        match self.cursor.find(b"#>") {
            Some(offset) => {
                self.cursor.advance_n(offset + 2);
                Ok(TokenKind::Bowl(
                    self.cursor.slice(start, self.cursor.pos()).to_string(),
                ))
            }
            None => Err(LexError::new(
                LexErrorKind::UnterminatedBowl,
                Span::new(start, self.cursor.pos()),
            )),
        }
    }

    /// Scales, optional eye, `>`. The cursor is on the first scale.
    fn right_literal(&mut self, start: u32) -> Result<TokenKind, LexError> {
        let scales = self.scales();
        if !self.cursor.eat(b"o") {
            self.cursor.eat(DEGREE_EYE);
        }
        if !self.cursor.eat(b">") {
            return Err(self.malformed_literal(start));
        }
        self.literal(start, &scales, Facing::Right)
    }

    /// Scales then `><`. The cursor is on the first scale, past any eye.
    fn left_literal(&mut self, start: u32) -> Result<TokenKind, LexError> {
        let scales = self.scales();
        if !self.cursor.eat(b"><") {
            return Err(self.malformed_literal(start));
        }
        self.literal(start, &scales, Facing::Left)
    }

    fn literal(&self, start: u32, scales: &Scales, facing: Facing) -> Result<TokenKind, LexError> {
        if scales.overflow {
            return Err(LexError::new(
                LexErrorKind::LiteralOverflow,
                Span::new(start, self.cursor.pos()),
            ));
        }
        Ok(TokenKind::Int {
            value: scales.value,
            facing,
        })
    }

    fn scales(&mut self) -> Scales {
        let mut value: u64 = 0;
        let mut overflow = false;
        while let Some(bit) = scale_value(self.cursor.current()) {
            overflow |= value > u64::MAX >> 1;
            value = (value << 1) | bit;
            self.cursor.advance();
        }
        Scales { value, overflow }
    }

    fn name(&mut self) -> String {
        self.cursor.eat_while(is_name_char).to_string()
    }

    fn required_name(&mut self, after: &'static str) -> Result<String, LexError> {
        let name = self.name();
        if name.is_empty() {
            let pos = self.cursor.pos();
            return Err(LexError::new(
                LexErrorKind::ExpectedName { after },
                Span::new(pos, self.end_of_current_char()),
            ));
        }
        Ok(name)
    }

    fn end_of_current_char(&self) -> u32 {
        (self.cursor.pos() + self.cursor.char_len()).min(self.cursor.source_len())
    }

    /// Error covering `start` through the glyph under the cursor.
    #[cold]
    fn invalid_glyph(&self, start: u32) -> LexError {
        let end = self.end_of_current_char().max(start + 1);
        LexError::new(
            LexErrorKind::InvalidGlyph {
                found: self.cursor.slice(start, end).to_string(),
            },
            Span::new(start, end),
        )
    }

    #[cold]
    fn malformed_literal(&self, start: u32) -> LexError {
        let end = self.end_of_current_char();
        let found = if self.cursor.is_eof() {
            "end of input".to_string()
        } else {
            self.cursor.slice(self.cursor.pos(), end).to_string()
        };
        LexError::new(
            LexErrorKind::MalformedLiteral { found },
            Span::new(start, end.max(start + 1)),
        )
    }
}
