//! Diagnostic system for Fysh front-end errors.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (what the parser was expecting)
//!
//! The scanner and parser each produce a single terminal error; both convert
//! into a [`Diagnostic`] which an emitter renders for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
