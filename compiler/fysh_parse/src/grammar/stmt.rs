//! Statements and blocks.
//!
//! Expression, assignment, return and break statements end with `~`.
//! `if`, `while` and bare blocks end with their block's `<><`.

use fysh_ir::{Block, Expr, Span, Stmt, StmtKind, TokenKind};
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        trace!(
            pos = self.cursor.position(),
            kind = self.cursor.current_kind().display_name(),
            "parse_stmt"
        );
        match self.cursor.current_kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::BlockOpen => {
                let block = self.parse_block()?;
                let span = block.span;
                Ok(Stmt::new(StmtKind::Block(block), span))
            }
            TokenKind::Return => self.parse_return(),
            TokenKind::Break => {
                let start = self.cursor.advance().span;
                let end = self.expect_terminator()?;
                Ok(Stmt::new(StmtKind::Break, start.merge(end)))
            }
            TokenKind::Sub { .. } => Err(ParseError::new(
                ParseErrorKind::MisplacedSubroutine,
                self.cursor.current_span(),
                "a statement",
                self.cursor.current_kind(),
            )),
            TokenKind::Ident { .. } if self.cursor.peek_next_kind() == &TokenKind::Eq => {
                self.parse_assign()
            }
            _ => {
                let expr = self.parse_expr()?;
                let end = self.expect_terminator()?;
                let span = expr.span.merge(end);
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }

    /// `><name> = value ~`; a left-facing target negates the value.
    fn parse_assign(&mut self) -> Result<Stmt, ParseError> {
        let target = self.cursor.advance();
        let TokenKind::Ident { name, facing } = target.kind else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                target.span,
                "an identifier",
                &target.kind,
            ));
        };
        self.cursor.advance();
        let value = self.parse_expr()?;
        let end = self.expect_terminator()?;
        Ok(Stmt::new(
            StmtKind::Assign {
                target: name,
                negate: facing.is_left(),
                value,
            },
            target.span.merge(end),
        ))
    }

    /// `<~ ~` or `<~ value ~`
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.advance().span;
        let value = if self.cursor.check(&TokenKind::Tilde) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let end = self.expect_terminator()?;
        Ok(Stmt::new(StmtKind::Return(value), start.merge(end)))
    }

    /// `><(((^> cond ><> ... <><` with an optional `><(((*> ><> ... <><`.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_condition()?;
        let then_block = self.parse_block()?;
        let else_block = if self.cursor.eat(&TokenKind::Else).is_some() {
            Some(self.parse_block()?)
        } else {
            None
        };
        let end = else_block.as_ref().map_or(then_block.span, |b| b.span);
        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_block,
                else_block,
            },
            start.merge(end),
        ))
    }

    /// `><(((@> cond ><> ... <><`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.parse_condition()?;
        let body = self.parse_block()?;
        let span = start.merge(body.span);
        Ok(Stmt::new(StmtKind::While { cond, body }, span))
    }

    /// A condition is `[expr]`, where the brackets only delimit, or any
    /// other expression. `[>(f) ...]` stays a call.
    fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        let is_delimited = self.cursor.check(&TokenKind::TankOpen)
            && !matches!(self.cursor.peek_next_kind(), TokenKind::Sub { .. });
        if !is_delimited {
            return self.parse_expr();
        }
        let open = self.cursor.advance().span;
        let cond = self.parse_expr()?;
        self.expect_closing(&TokenKind::TankClose, open)?;
        Ok(cond)
    }

    /// `><> stmt* <><`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let Some(open) = self.cursor.eat(&TokenKind::BlockOpen) else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                self.cursor.current_span(),
                TokenKind::BlockOpen.display_name(),
                self.cursor.current_kind(),
            ));
        };
        let mut stmts = Vec::new();
        while !self.cursor.check(&TokenKind::BlockClose) {
            if self.cursor.is_at_end() {
                return Err(self.unclosed(&TokenKind::BlockClose, open));
            }
            stmts.push(self.parse_stmt()?);
        }
        let close = self.cursor.advance().span;
        Ok(Block::new(stmts, open.merge(close)))
    }

    /// Consume the `~` ending a simple statement.
    fn expect_terminator(&mut self) -> Result<Span, ParseError> {
        self.cursor.eat(&TokenKind::Tilde).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::MissingTerminator,
                self.cursor.current_span(),
                TokenKind::Tilde.display_name(),
                self.cursor.current_kind(),
            )
        })
    }

    /// Consume `close`, or report the delimiter opened at `open`.
    pub(crate) fn expect_closing(
        &mut self,
        close: &TokenKind,
        open: Span,
    ) -> Result<Span, ParseError> {
        match self.cursor.eat(close) {
            Some(span) => Ok(span),
            None => Err(self.unclosed(close, open)),
        }
    }

    #[cold]
    fn unclosed(&self, close: &TokenKind, open: Span) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnclosedDelimiter { open },
            self.cursor.current_span(),
            close.display_name(),
            self.cursor.current_kind(),
        )
    }
}
