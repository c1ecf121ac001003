//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point (`parse_expr`) and the binding tiers
//! - `operators.rs`: token to operator mapping per tier
//! - `primary.rs`: literals, identifiers, steps, grouping, tank forms

mod operators;
mod primary;

use fysh_ir::{BinaryOp, Expr, ExprKind, TokenKind, UnaryOp};

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

impl Parser<'_> {
    /// Parse a full expression, juxtaposition included.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot
    /// overflow the stack.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_sum())
    }

    /// Juxtaposition and infix bubbles, both grouping to the right:
    /// `A B C` is `A + (B + C)`.
    fn parse_sum(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_bit_or()?;
        let next = self.cursor.current_kind();

        if let TokenKind::Bubble(glyph) = *next {
            if !next.starts_expression() {
                self.cursor.advance();
                let right = self.parse_expr()?;
                let span = left.span.merge(right.span);
                return Ok(Expr::new(
                    ExprKind::OpaqueInfix {
                        glyph,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    span,
                ));
            }
        }

        if next.starts_expression() {
            let right = self.parse_expr()?;
            return Ok(binary(BinaryOp::Add, left, right));
        }

        Ok(left)
    }

    /// Parse `|`. Also the tier of call arguments, which are separated by
    /// juxtaposition and so cannot contain it.
    pub(crate) fn parse_bit_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_bit_xor, operators::bit_or_op)
    }

    fn parse_bit_xor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_bit_and, operators::bit_xor_op)
    }

    fn parse_bit_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_product, operators::bit_and_op)
    }

    /// Parse `<3` and `</3`.
    fn parse_product(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_comparison, operators::product_op)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_unary, operators::comparison_op)
    }

    /// One left-associative tier: `operand (op operand)*`.
    fn parse_left_assoc(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
        operator: fn(&TokenKind) -> Option<BinaryOp>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = operator(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = operand(self)?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    /// `!!x`, `!x` and prefix bubbles.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match *self.cursor.current_kind() {
            TokenKind::LogicalNot => Some(UnaryOp::Not),
            TokenKind::BitNot => Some(UnaryOp::BitNot),
            TokenKind::Bubble(_) => None,
            _ => return self.parse_primary(),
        };
        let head = self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = head.span.merge(operand.span);
        let kind = match (op, head.kind) {
            (Some(op), _) => ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            (None, TokenKind::Bubble(glyph)) => ExprKind::OpaquePrefix {
                glyph,
                operand: Box::new(operand),
            },
            (None, _) => return Ok(operand),
        };
        Ok(Expr::new(kind, span))
    }
}
