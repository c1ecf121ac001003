//! Syntax tree for Fysh programs.
//!
//! Every non-leaf node exclusively owns its children, so the tree has no
//! sharing and no cycles.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, StepDirection};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Block, Stmt, StmtKind, SubDecl};

use crate::{Span, Spanned};

/// A top-level item, in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TopLevel {
    Sub(SubDecl),
    Stmt(Stmt),
}

impl Spanned for TopLevel {
    fn span(&self) -> Span {
        match self {
            TopLevel::Sub(sub) => sub.span,
            TopLevel::Stmt(stmt) => stmt.span,
        }
    }
}

/// Parser output: top-level declarations and statements in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub items: Vec<TopLevel>,
}

impl Program {
    pub fn new() -> Self {
        Program { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subroutine declarations only.
    pub fn subs(&self) -> impl Iterator<Item = &SubDecl> {
        self.items.iter().filter_map(|item| match item {
            TopLevel::Sub(sub) => Some(sub),
            TopLevel::Stmt(_) => None,
        })
    }
}
