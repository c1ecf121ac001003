//! Canonical rendering.
//!
//! Every binary and unary form is fully parenthesized, so the rendering
//! shows exactly how the parser grouped its input:
//!
//! ```text
//! ><fysh> ><{({o> <3 ><(({o> ~   =>   (fysh + (5 * 1));
//! ```
//!
//! Blocks put each statement on its own line with no indentation.

use fysh_ir::{
    Block, Expr, ExprKind, Program, StepDirection, Stmt, StmtKind, SubDecl, TopLevel,
};

use crate::{Emitter, StringEmitter};

/// A node with a canonical rendering.
pub trait Render {
    fn render_into<E: Emitter>(&self, out: &mut E);

    fn render(&self) -> String {
        let mut out = StringEmitter::new();
        self.render_into(&mut out);
        out.output()
    }
}

/// Render any node to a string.
pub fn render<T: Render + ?Sized>(node: &T) -> String {
    node.render()
}

impl Render for Program {
    /// Items separated by newlines.
    fn render_into<E: Emitter>(&self, out: &mut E) {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.emit_newline();
            }
            item.render_into(out);
        }
    }
}

impl Render for TopLevel {
    fn render_into<E: Emitter>(&self, out: &mut E) {
        match self {
            TopLevel::Sub(sub) => sub.render_into(out),
            TopLevel::Stmt(stmt) => stmt.render_into(out),
        }
    }
}

impl Render for SubDecl {
    fn render_into<E: Emitter>(&self, out: &mut E) {
        out.emit("sub ");
        out.emit(&self.name);
        out.emit("(");
        out.emit(&self.params.join(", "));
        out.emit(")");
        out.emit_space();
        self.body.render_into(out);
    }
}

impl Render for Block {
    fn render_into<E: Emitter>(&self, out: &mut E) {
        out.emit("{");
        out.emit_newline();
        for stmt in &self.stmts {
            stmt.render_into(out);
            out.emit_newline();
        }
        out.emit("}");
    }
}

impl Render for Stmt {
    fn render_into<E: Emitter>(&self, out: &mut E) {
        match &self.kind {
            StmtKind::Expr(expr) => {
                expr.render_into(out);
                out.emit(";");
            }
            StmtKind::Assign {
                target,
                negate,
                value,
            } => {
                out.emit(target);
                out.emit(" = ");
                if *negate {
                    out.emit("(-");
                    value.render_into(out);
                    out.emit(")");
                } else {
                    value.render_into(out);
                }
                out.emit(";");
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                render_header(out, "if", cond);
                then_block.render_into(out);
                if let Some(else_block) = else_block {
                    out.emit(" else ");
                    else_block.render_into(out);
                }
            }
            StmtKind::While { cond, body } => {
                render_header(out, "while", cond);
                body.render_into(out);
            }
            StmtKind::Return(Some(value)) => {
                out.emit("return ");
                value.render_into(out);
                out.emit(";");
            }
            StmtKind::Return(None) => out.emit("return;"),
            StmtKind::Break => out.emit("break;"),
            StmtKind::Block(block) => block.render_into(out),
        }
    }
}

/// `keyword (cond) `
fn render_header<E: Emitter>(out: &mut E, keyword: &str, cond: &Expr) {
    out.emit(keyword);
    out.emit(" (");
    cond.render_into(out);
    out.emit(") ");
}

impl Render for Expr {
    fn render_into<E: Emitter>(&self, out: &mut E) {
        match &self.kind {
            ExprKind::Int { value, negative } => {
                if *negative {
                    out.emit("-");
                }
                out.emit(&value.to_string());
            }
            ExprKind::Ident(name) => out.emit(name),
            ExprKind::Unary { op, operand } => {
                out.emit("(");
                out.emit(op.as_symbol());
                operand.render_into(out);
                out.emit(")");
            }
            ExprKind::Binary { op, left, right } => {
                render_infix(out, left, op.as_symbol(), right);
            }
            ExprKind::Call { callee, args } => {
                out.emit(callee);
                out.emit("(");
                render_list(out, args);
                out.emit(")");
            }
            ExprKind::Array(items) => {
                out.emit("[");
                render_list(out, items);
                out.emit("]");
            }
            ExprKind::Step { target, direction } => {
                out.emit(target);
                out.emit(match direction {
                    StepDirection::Increment => "++",
                    StepDirection::Decrement => "--",
                });
            }
            ExprKind::Opaque(text) => out.emit(text),
            ExprKind::OpaquePrefix { glyph, operand } => {
                out.emit(glyph);
                out.emit_space();
                operand.render_into(out);
            }
            ExprKind::OpaqueInfix { glyph, left, right } => {
                render_infix(out, left, glyph, right);
            }
        }
    }
}

/// `(left op right)`
fn render_infix<E: Emitter>(out: &mut E, left: &Expr, op: &str, right: &Expr) {
    out.emit("(");
    left.render_into(out);
    out.emit_space();
    out.emit(op);
    out.emit_space();
    right.render_into(out);
    out.emit(")");
}

fn render_list<E: Emitter>(out: &mut E, items: &[Expr]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.emit(", ");
        }
        item.render_into(out);
    }
}
