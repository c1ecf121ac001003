//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{Span, Spanned};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Increment or decrement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Signed-magnitude literal. `negative` comes from a left-facing fysh,
    /// so `-0` is representable.
    Int { value: u64, negative: bool },

    Ident(String),

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `[>(name) arg arg]`
    Call { callee: String, args: Vec<Expr> },

    /// `[a - b - c]`
    Array(Vec<Expr>),

    /// `>><x>` / `<x><<`
    Step {
        target: String,
        direction: StepDirection,
    },

    /// Glyphs the front end keeps verbatim (the fysh bowl).
    Opaque(String),

    /// Bubble glyph in prefix position: `o+) ><steven>`.
    OpaquePrefix {
        glyph: &'static str,
        operand: Box<Expr>,
    },

    /// Bubble glyph between two operands: `><{{(((> (+o ><{>`.
    OpaqueInfix {
        glyph: &'static str,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
