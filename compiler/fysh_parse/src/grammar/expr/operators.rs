//! Token to operator mapping, one function per binding tier.

use fysh_ir::{BinaryOp, TokenKind};

pub(super) fn bit_or_op(kind: &TokenKind) -> Option<BinaryOp> {
    matches!(kind, TokenKind::Pipe).then_some(BinaryOp::BitOr)
}

pub(super) fn bit_xor_op(kind: &TokenKind) -> Option<BinaryOp> {
    matches!(kind, TokenKind::Caret).then_some(BinaryOp::BitXor)
}

pub(super) fn bit_and_op(kind: &TokenKind) -> Option<BinaryOp> {
    matches!(kind, TokenKind::Amp).then_some(BinaryOp::BitAnd)
}

pub(super) fn product_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}

pub(super) fn comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::EqEq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        _ => None,
    }
}
