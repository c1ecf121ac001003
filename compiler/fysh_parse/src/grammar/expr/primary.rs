//! Primary expressions and tank forms.

use fysh_ir::{Expr, ExprKind, StepDirection, TokenKind, UnaryOp};
use tracing::{debug, trace};

use crate::{ParseError, ParseErrorKind, Parser};

fn negate(expr: Expr) -> Expr {
    let span = expr.span;
    Expr::new(
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(expr),
        },
        span,
    )
}

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        debug!(
            pos = self.cursor.position(),
            kind = self.cursor.current_kind().display_name(),
            span_start = self.cursor.current_span().start,
            span_end = self.cursor.current_span().end,
            "parse_primary"
        );

        match self.cursor.current_kind() {
            TokenKind::LParen => return self.parse_group(),
            TokenKind::TankOpen => return self.parse_tank(),
            kind if !kind.starts_expression() => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression,
                    self.cursor.current_span(),
                    "an expression",
                    kind,
                ));
            }
            _ => {}
        }

        let token = self.cursor.advance();
        let span = token.span;
        let expr = match token.kind {
            TokenKind::Int { value, facing } => Expr::new(
                ExprKind::Int {
                    value,
                    negative: facing.is_left(),
                },
                span,
            ),
            TokenKind::Ident { name, facing } => {
                let ident = Expr::new(ExprKind::Ident(name), span);
                if facing.is_left() {
                    negate(ident)
                } else {
                    ident
                }
            }
            TokenKind::Increment(target) => Expr::new(
                ExprKind::Step {
                    target,
                    direction: StepDirection::Increment,
                },
                span,
            ),
            TokenKind::Decrement(target) => Expr::new(
                ExprKind::Step {
                    target,
                    direction: StepDirection::Decrement,
                },
                span,
            ),
            TokenKind::Bowl(text) => Expr::new(ExprKind::Opaque(text), span),
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression,
                    span,
                    "an expression",
                    &other,
                ))
            }
        };
        Ok(expr)
    }

    /// `( expr )`; the parentheses only group.
    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        trace!("parse_primary -> group");
        let open = self.cursor.advance().span;
        let inner = self.parse_expr()?;
        let close = self.expect_closing(&TokenKind::RParen, open)?;
        Ok(Expr::new(inner.kind, open.merge(close)))
    }

    /// `[>(name) arg arg]`, `[(name)< arg]`, `[a - b - c]` or `[]`.
    fn parse_tank(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.advance().span;

        if let TokenKind::Sub { name, facing } = self.cursor.current_kind() {
            trace!(name = %name, "parse_primary -> call");
            let callee = name.clone();
            let negated = facing.is_left();
            self.cursor.advance();
            let mut args = Vec::new();
            while self.cursor.current_kind().starts_expression() {
                args.push(self.parse_bit_or()?);
            }
            let close = self.expect_closing(&TokenKind::TankClose, open)?;
            let call = Expr::new(ExprKind::Call { callee, args }, open.merge(close));
            return Ok(if negated { negate(call) } else { call });
        }

        trace!("parse_primary -> array");
        let mut elements = Vec::new();
        if !self.cursor.check(&TokenKind::TankClose) {
            loop {
                elements.push(self.parse_expr()?);
                if self.cursor.eat(&TokenKind::Dash).is_none() {
                    break;
                }
            }
        }
        let close = self.expect_closing(&TokenKind::TankClose, open)?;
        Ok(Expr::new(ExprKind::Array(elements), open.merge(close)))
    }
}

