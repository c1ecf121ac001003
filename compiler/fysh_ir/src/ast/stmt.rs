//! Statements, blocks and subroutine declarations.

use std::fmt;

use super::expr::Expr;
use crate::{Span, Spanned};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `expr ~`
    Expr(Expr),

    /// `><x> = value ~`. A left-facing target (`<x><`) sets `negate`:
    /// the stored value is the negation of `value`.
    Assign {
        target: String,
        negate: bool,
        value: Expr,
    },

    If {
        cond: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },

    While { cond: Expr, body: Block },

    /// `<~ [value] ~`
    Return(Option<Expr>),

    Break,

    Block(Block),
}

/// `><> stmt* <><`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }
}

impl Spanned for Block {
    fn span(&self) -> Span {
        self.span
    }
}

/// `>(name) ><param>* block`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SubDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
    pub span: Span,
}

impl Spanned for SubDecl {
    fn span(&self) -> Span {
        self.span
    }
}
