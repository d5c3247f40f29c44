//! Driver-level errors.

use std::io;
use std::path::PathBuf;

use cri_eval::EvalError;
use cri_lexer::LexError;
use cri_parse::ParseError;
use thiserror::Error;

/// Any failure while running CRi source.
///
/// `Display` is the complete user-facing message; callers add the
/// `Error: ` prefix.
#[derive(Debug, Error)]
pub enum CriError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("File '{}' not found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
