//! Glyph encoding: from values and trees back to Fysh source.
//!
//! Literals use the canonical scales, `(`/`{` when swimming right and
//! `)`/`}` when swimming left, with no eye. [`to_glyphs`] wraps every
//! operator form in `( )` and every `if`/`while` condition in `[ ]`, so the
//! parser regroups the output exactly as the tree was grouped.

use fysh_ir::{
    BinaryOp, Block, Expr, ExprKind, Program, StepDirection, Stmt, StmtKind, SubDecl, TopLevel,
    UnaryOp,
};
use thiserror::Error;

use crate::{Emitter, StringEmitter};

/// A tree with no glyph spelling.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum GlyphError {
    #[error("{what} has no glyph spelling")]
    Unrepresentable { what: String },
    #[error("`{name}` is not a valid fysh name")]
    InvalidName { name: String },
}

/// Canonical glyphs for a signed integer.
///
/// ```
/// use fysh_fmt::glyph::int_literal;
///
/// assert_eq!(int_literal(5), "><{({>");
/// assert_eq!(int_literal(-1), "<}><");
/// assert_eq!(int_literal(0), "><(>");
/// ```
pub fn int_literal(value: i64) -> String {
    literal(value.unsigned_abs(), value < 0)
}

/// Glyphs for decimal text such as `"-6"`, if it is an integer.
pub fn suggest_literal(text: &str) -> Option<String> {
    text.trim().parse::<i64>().ok().map(int_literal)
}

fn literal(magnitude: u64, negative: bool) -> String {
    let (zero, one) = if negative { (')', '}') } else { ('(', '{') };
    let scales: String = format!("{magnitude:b}")
        .chars()
        .map(|bit| if bit == '1' { one } else { zero })
        .collect();
    if negative {
        format!("<{scales}><")
    } else {
        format!("><{scales}>")
    }
}

/// Spell a whole program in glyphs, one statement per line.
pub fn to_glyphs(program: &Program) -> Result<String, GlyphError> {
    let mut out = StringEmitter::new();
    for (i, item) in program.items.iter().enumerate() {
        if i > 0 {
            out.emit_newline();
        }
        match item {
            TopLevel::Sub(sub) => write_sub(&mut out, sub)?,
            TopLevel::Stmt(stmt) => write_stmt(&mut out, stmt)?,
        }
    }
    Ok(out.output())
}

fn checked_name(name: &str) -> Result<&str, GlyphError> {
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if valid {
        Ok(name)
    } else {
        Err(GlyphError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// A name that can swim left: `<3><` would scan as `<3` then `><`.
fn checked_left_name(name: &str) -> Result<&str, GlyphError> {
    if name == "3" {
        return Err(GlyphError::InvalidName {
            name: name.to_string(),
        });
    }
    checked_name(name)
}

fn write_sub<E: Emitter>(out: &mut E, sub: &SubDecl) -> Result<(), GlyphError> {
    out.emit(">(");
    out.emit(checked_name(&sub.name)?);
    out.emit(")");
    for param in &sub.params {
        out.emit(" ><");
        out.emit(checked_name(param)?);
        out.emit(">");
    }
    out.emit_space();
    write_block(out, &sub.body)
}

fn write_block<E: Emitter>(out: &mut E, block: &Block) -> Result<(), GlyphError> {
    out.emit("><>");
    for stmt in &block.stmts {
        out.emit_newline();
        write_stmt(out, stmt)?;
    }
    out.emit_newline();
    out.emit("<><");
    Ok(())
}

fn write_stmt<E: Emitter>(out: &mut E, stmt: &Stmt) -> Result<(), GlyphError> {
    match &stmt.kind {
        StmtKind::Expr(expr) => {
            write_expr(out, expr)?;
            out.emit(" ~");
        }
        StmtKind::Assign {
            target,
            negate,
            value,
        } => {
            if *negate {
                out.emit("<");
                out.emit(checked_left_name(target)?);
                out.emit("><");
            } else {
                out.emit("><");
                out.emit(checked_name(target)?);
                out.emit(">");
            }
            out.emit(" = ");
            write_expr(out, value)?;
            out.emit(" ~");
        }
        StmtKind::If {
            cond,
            then_block,
            else_block,
        } => {
            write_header(out, "><(((^>", cond)?;
            write_block(out, then_block)?;
            if let Some(else_block) = else_block {
                out.emit(" ><(((*> ");
                write_block(out, else_block)?;
            }
        }
        StmtKind::While { cond, body } => {
            write_header(out, "><(((@>", cond)?;
            write_block(out, body)?;
        }
        StmtKind::Return(value) => {
            out.emit("<~ ");
            if let Some(value) = value {
                write_expr(out, value)?;
                out.emit_space();
            }
            out.emit("~");
        }
        StmtKind::Break => out.emit("><\\/> ~"),
        StmtKind::Block(block) => write_block(out, block)?,
    }
    Ok(())
}

/// `keyword [cond] `
fn write_header<E: Emitter>(out: &mut E, keyword: &str, cond: &Expr) -> Result<(), GlyphError> {
    out.emit(keyword);
    out.emit(" [");
    write_expr(out, cond)?;
    out.emit("] ");
    Ok(())
}

fn binary_glyph(op: BinaryOp) -> Option<&'static str> {
    Some(match op {
        BinaryOp::Add => return None,
        BinaryOp::BitOr => "|",
        BinaryOp::BitXor => "^",
        BinaryOp::BitAnd => "&",
        BinaryOp::Mul => "<3",
        BinaryOp::Div => "</3",
        BinaryOp::Gt => "o~",
        BinaryOp::Lt => "~o",
        BinaryOp::GtEq => "o~=",
        BinaryOp::LtEq => "~o=",
        BinaryOp::Eq => "==",
        BinaryOp::NotEq => "~=",
    })
}

fn write_expr<E: Emitter>(out: &mut E, expr: &Expr) -> Result<(), GlyphError> {
    match &expr.kind {
        ExprKind::Int { value, negative } => out.emit(&literal(*value, *negative)),
        ExprKind::Ident(name) => {
            out.emit("><");
            out.emit(checked_name(name)?);
            out.emit(">");
        }
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand,
        } => match &operand.kind {
            ExprKind::Ident(name) => {
                out.emit("<");
                out.emit(checked_left_name(name)?);
                out.emit("><");
            }
            ExprKind::Call { callee, args } => {
                out.emit("[(");
                out.emit(checked_name(callee)?);
                out.emit(")<");
                write_args(out, args)?;
                out.emit("]");
            }
            _ => {
                return Err(GlyphError::Unrepresentable {
                    what: "negation of anything but a name or a call".to_string(),
                })
            }
        },
        ExprKind::Unary { op, operand } => {
            out.emit(if *op == UnaryOp::Not { "(!!" } else { "(!" });
            write_expr(out, operand)?;
            out.emit(")");
        }
        ExprKind::Binary { op, left, right } => {
            out.emit("(");
            write_expr(out, left)?;
            if let Some(glyph) = binary_glyph(*op) {
                out.emit_space();
                out.emit(glyph);
            }
            out.emit_space();
            write_expr(out, right)?;
            out.emit(")");
        }
        ExprKind::Call { callee, args } => {
            out.emit("[>(");
            out.emit(checked_name(callee)?);
            out.emit(")");
            write_args(out, args)?;
            out.emit("]");
        }
        ExprKind::Array(items) => {
            out.emit("[");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.emit(" - ");
                }
                write_expr(out, item)?;
            }
            out.emit("]");
        }
        ExprKind::Step { target, direction } => match direction {
            StepDirection::Increment => {
                out.emit(">><");
                out.emit(checked_name(target)?);
                out.emit(">");
            }
            StepDirection::Decrement => {
                out.emit("<");
                out.emit(checked_left_name(target)?);
                out.emit("><<");
            }
        },
        ExprKind::Opaque(text) => {
            let body = text
                .strip_prefix("><#")
                .and_then(|rest| rest.strip_suffix("#>"));
            match body {
                Some(body) if !body.contains("#>") => out.emit(text),
                _ => {
                    return Err(GlyphError::Unrepresentable {
                        what: format!("opaque text `{text}`"),
                    })
                }
            }
        }
        ExprKind::OpaquePrefix { glyph, operand } => {
            out.emit("(");
            out.emit(glyph);
            out.emit_space();
            write_expr(out, operand)?;
            out.emit(")");
        }
        // A bubble that can open an operand reads as a prefix after a space.
        ExprKind::OpaqueInfix { glyph, left, right } if *glyph == "(+o" => {
            out.emit("(");
            write_expr(out, left)?;
            out.emit(" (+o ");
            write_expr(out, right)?;
            out.emit(")");
        }
        ExprKind::OpaqueInfix { glyph, .. } => {
            return Err(GlyphError::Unrepresentable {
                what: format!("`{glyph}` between two operands"),
            })
        }
    }
    Ok(())
}

/// Call arguments, each preceded by a space.
fn write_args<E: Emitter>(out: &mut E, args: &[Expr]) -> Result<(), GlyphError> {
    for arg in args {
        out.emit_space();
        write_expr(out, arg)?;
    }
    Ok(())
}
