//! CRi driver: runs source files, hosts the REPL and wires up logging.
//!
//! The pipeline is lex → parse → interpret, each phase in its own crate.
//! This crate only orchestrates and reports.

use std::sync::Once;

pub mod commands;
mod error;
mod repl;
mod run;

pub use error::CriError;
pub use repl::{exit_on_interrupt, farewell, Repl, ReplConfig};
pub use run::{read_source, run_file, run_source};

/// Re-exported so binaries and embedders need only this crate.
pub use cri_eval::{Interpreter, PrintHandler};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal program output stays
/// clean. Safe to call more than once. Enable with e.g.
/// `RUST_LOG=cri_parse=trace` or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
