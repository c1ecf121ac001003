//! Fysh IR - shared front-end types.
//!
//! This crate contains the data structures every other Fysh crate agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for scanner output
//! - The syntax tree (`Program`, `Stmt`, `Expr`, ...)
//!
//! # Design Philosophy
//!
//! - **Strict tree**: every node owns its children through `Box`/`Vec`.
//!   There is no arena and there are no back-pointers, so a `Program` is
//!   dropped as a whole when the caller lets go of it.
//! - **Plain names**: identifiers are stored as `String`. Nothing is
//!   resolved at this layer, and a node can be printed without any side
//!   table.
//! - **Immutable after construction**: the parser builds nodes bottom-up and
//!   never re-parents them.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, Program, StepDirection, Stmt, StmtKind, SubDecl, TopLevel,
    UnaryOp,
};
pub use span::Span;
pub use token::{Facing, Token, TokenKind, TokenList};

/// Trait for nodes that have a source span.
pub trait Spanned {
    fn span(&self) -> Span;
}
