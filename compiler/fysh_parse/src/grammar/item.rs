//! Program and subroutine declarations.

use fysh_ir::{Facing, Program, Span, SubDecl, TokenKind, TopLevel};
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse top-level items until `Eof`.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut items = Vec::new();
        while !self.cursor.is_at_end() {
            items.push(self.parse_top_level()?);
        }
        debug!(items = items.len(), "parsed program");
        Ok(Program { items })
    }

    fn parse_top_level(&mut self) -> Result<TopLevel, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Sub {
                name,
                facing: Facing::Right,
            } => {
                let name = name.clone();
                Ok(TopLevel::Sub(self.parse_sub_decl(name)?))
            }
            TokenKind::Sub {
                facing: Facing::Left,
                ..
            } => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                self.cursor.current_span(),
                "a right-facing `>(name)` to declare a subroutine",
                self.cursor.current_kind(),
            )),
            _ => Ok(TopLevel::Stmt(self.parse_stmt()?)),
        }
    }

    /// `>(name) ><param>... ><> ... <><`
    fn parse_sub_decl(&mut self, name: String) -> Result<SubDecl, ParseError> {
        debug!(name = %name, "parse_sub_decl");
        let head = self.cursor.advance().span;

        let mut params: Vec<(String, Span)> = Vec::new();
        while let TokenKind::Ident { name: param, facing } = self.cursor.current_kind() {
            let span = self.cursor.current_span();
            if facing.is_left() {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken,
                    span,
                    "a right-facing `><name>` parameter",
                    self.cursor.current_kind(),
                ));
            }
            if let Some((_, first)) = params.iter().find(|(p, _)| p == param) {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicateParameter { first: *first },
                    span,
                    "a new parameter name",
                    self.cursor.current_kind(),
                ));
            }
            params.push((param.clone(), span));
            self.cursor.advance();
        }

        let body = self.parse_block()?;
        let span = head.merge(body.span);
        Ok(SubDecl {
            name,
            params: params.into_iter().map(|(p, _)| p).collect(),
            body,
            span,
        })
    }
}
