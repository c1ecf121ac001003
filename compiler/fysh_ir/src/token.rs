//! Token types produced by the Fysh scanner.
//!
//! Fysh glyphs are directional: the same delimiters open an identifier, a
//! literal, or a call depending on which way the fysh swims. [`Facing`]
//! records that direction so the parser can turn it into a sign.

use std::fmt;
use std::hash::Hash;

use super::Span;

/// Direction a glyph cluster faces.
///
/// `><name>` swims right, `<name><` swims left. Facing is a sign for
/// literals, identifiers, call forms and assignment targets, and is purely
/// stylistic for keywords.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Facing::Left)
    }
}

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Fysh.
///
/// Glyph spellings are listed next to each variant (right-facing first).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Binary scale literal: `><{({>` (5), `<{{{><` (-7).
    /// Stores the unsigned magnitude; a left facing negates it.
    Int { value: u64, facing: Facing },
    /// Identifier: `><fysh>`, `<fysh><`.
    Ident { name: String, facing: Facing },
    /// `>><fysh>`
    Increment(String),
    /// `<fysh><<`
    Decrement(String),
    /// Subroutine name: `>(name)`, `(name)<`.
    Sub { name: String, facing: Facing },
    /// Fysh bowl `><###>`, kept verbatim.
    Bowl(String),
    /// Bubble glyph `(+o` / `o+)`, kept verbatim.
    Bubble(&'static str),

    /// `<3`, `♡`
    Star,
    /// `</3`, `💔`
    Slash,
    /// `o~`
    Gt,
    /// `~o`
    Lt,
    /// `o~=`, `o~≈`
    GtEq,
    /// `~o=`, `~o≈`
    LtEq,
    /// `==`, `≈≈`
    EqEq,
    /// `~=`, `~≈`
    NotEq,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `&`
    Amp,
    /// A pair of `!`.
    LogicalNot,
    /// A leftover single `!`.
    BitNot,
    /// `=`
    Eq,

    /// `><>`
    BlockOpen,
    /// `<><`
    BlockClose,
    /// `[`
    TankOpen,
    /// `]`
    TankClose,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `-` (tank element separator)
    Dash,
    /// `~` (statement terminator)
    Tilde,

    /// `><(((^>`, `<^)))><`
    If,
    /// `><(((*>`, `<*)))><`
    Else,
    /// `><(((@>`, `<@)))><`
    While,
    /// `<~`
    Return,
    /// `><\/>`, `<\/><`
    Break,

    Eof,
}

impl TokenKind {
    /// Human-readable name used in parse errors.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int { .. } => "fysh literal",
            TokenKind::Ident { .. } => "identifier",
            TokenKind::Increment(_) => "increment",
            TokenKind::Decrement(_) => "decrement",
            TokenKind::Sub { .. } => "subroutine name",
            TokenKind::Bowl(_) => "fysh bowl",
            TokenKind::Bubble(_) => "bubble",
            TokenKind::Star => "`<3`",
            TokenKind::Slash => "`</3`",
            TokenKind::Gt => "`o~`",
            TokenKind::Lt => "`~o`",
            TokenKind::GtEq => "`o~=`",
            TokenKind::LtEq => "`~o=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`~=`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Amp => "`&`",
            TokenKind::LogicalNot => "`!!`",
            TokenKind::BitNot => "`!`",
            TokenKind::Eq => "`=`",
            TokenKind::BlockOpen => "`><>`",
            TokenKind::BlockClose => "`<><`",
            TokenKind::TankOpen => "`[`",
            TokenKind::TankClose => "`]`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Dash => "`-`",
            TokenKind::Tilde => "`~`",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Break => "break",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether this token can begin an expression.
    ///
    /// The parser uses this to decide if two adjacent operands form an
    /// implicit addition.
    pub fn starts_expression(&self) -> bool {
        matches!(
            self,
            TokenKind::Int { .. }
                | TokenKind::Ident { .. }
                | TokenKind::Increment(_)
                | TokenKind::Decrement(_)
                | TokenKind::Bowl(_)
                | TokenKind::LogicalNot
                | TokenKind::BitNot
                | TokenKind::LParen
                | TokenKind::TankOpen
        ) || matches!(self, TokenKind::Bubble(glyph) if glyph.starts_with('o'))
    }
}

/// Scanner output: tokens in source order, always terminated by `Eof`.
#[derive(Clone, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

// Position-independent comparison: two lists are equal when they hold the
// same kinds, whatever whitespace separated them.
impl PartialEq for TokenList {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.len() == other.tokens.len()
            && self
                .tokens
                .iter()
                .zip(other.tokens.iter())
                .all(|(a, b)| a.kind == b.kind)
    }
}
impl Eq for TokenList {}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token kinds only, handy for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}
