//! Printers for Fysh syntax trees.
//!
//! - [`render`]: the canonical, language-level rendering
//!   (`(fysh + (5 * 1));`). Pure and total.
//! - [`glyph`]: the way back to Fysh glyphs, for single literals
//!   ([`glyph::int_literal`]) and whole programs ([`glyph::to_glyphs`]).
//!
//! Both write through an [`Emitter`], so output can be collected in a
//! string or sent elsewhere.

mod emitter;
pub mod glyph;
mod render;

pub use emitter::{Emitter, StringEmitter};
pub use render::{render, Render};
