//! Whole-source execution: lex, parse, interpret.

use std::fs;
use std::io;
use std::path::Path;

use cri_eval::Interpreter;
use cri_lexer::tokenize;
use cri_parse::parse;
use tracing::debug;

use crate::error::CriError;

/// Run CRi source against `interpreter`.
///
/// Each phase must succeed before the next starts; nothing is evaluated if
/// lexing or parsing fails.
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<(), CriError> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    interpreter.interpret(&program)?;
    Ok(())
}

/// Read a file and run it with [`run_source`].
pub fn run_file(path: impl AsRef<Path>, interpreter: &mut Interpreter) -> Result<(), CriError> {
    let source = read_source(path.as_ref())?;
    run_source(&source, interpreter)
}

/// Read a source file, mapping a missing file to its own error.
pub fn read_source(path: &Path) -> Result<String, CriError> {
    debug!(path = %path.display(), "reading source");
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CriError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CriError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
