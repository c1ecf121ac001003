//! Fysh front-end driver.
//!
//! The `fysh` binary hands each command a [`commands::SourceInput`], an
//! output writer and a [`commands::Reporter`] for diagnostics, so every
//! command can be run against in-memory buffers.
//!
//! # Debugging
//!
//! - `RUST_LOG=fysh_parse=trace`: follow token advances and dispatch.
//! - `RUST_LOG=fysh_lexer=debug`: lexing summaries.
//! - `FYSH_LOG_TREE=1`: indent spans as a tree instead of flat lines.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("FYSH_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
