//! CRi Eval - tree-walking evaluator for the CRi language.
//!
//! # Architecture
//!
//! - `Interpreter`: executes statements and keeps the `print` output log
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `format_number`: shortest round-trip rendering used by `print`
//! - `PrintHandler`: where printed lines go (stdout or nowhere)

mod errors;
mod format;
mod interpreter;
mod operators;
mod print_handler;

pub use errors::{EvalError, EvalResult};
pub use format::format_number;
pub use interpreter::Interpreter;
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::PrintHandler;
