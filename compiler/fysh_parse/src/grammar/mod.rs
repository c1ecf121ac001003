//! Grammar rules, split by syntactic category.
//!
//! - `item`: the program and subroutine declarations
//! - `stmt`: statements and blocks
//! - `expr`: expression tiers, primaries and tank forms

mod expr;
mod item;
mod stmt;
