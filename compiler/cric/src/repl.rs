//! Interactive read-eval-print loop.
//!
//! The loop is generic over its input and output so it can run against
//! stdin/stdout or in-memory buffers. Printed values are written to the
//! loop's output, and the interpreter itself stays silent.

use std::io::{self, BufRead, Write};

use cri_eval::{Interpreter, PrintHandler};
use tracing::debug;

use crate::run::run_source;

/// REPL presentation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Written before each line is read.
    pub prompt: String,
    /// Whether to greet with the version banner.
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "cri> ".to_owned(),
            banner: true,
        }
    }
}

/// A REPL session. The interpreter, and so its output log, persists for
/// the whole session.
#[derive(Debug)]
pub struct Repl {
    config: ReplConfig,
    interpreter: Interpreter,
}

impl Repl {
    pub fn new() -> Self {
        Self::with_config(ReplConfig::default())
    }

    pub fn with_config(config: ReplConfig) -> Self {
        Repl {
            config,
            interpreter: Interpreter::with_print_handler(PrintHandler::Silent),
        }
    }

    /// The session's interpreter.
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Read and run lines until `exit` or end of input.
    ///
    /// Lex, parse and runtime errors are reported as `Error: <message>`
    /// and the loop continues. Only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        if self.config.banner {
            writeln!(out, "CRi Language Interpreter v{}", env!("CARGO_PKG_VERSION"))?;
            writeln!(out, "Type 'exit' to quit.")?;
            writeln!(out)?;
        }

        let mut line = String::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return farewell(&mut out);
            }

            let source = line.trim();
            if source.eq_ignore_ascii_case("exit") {
                debug!("exit requested");
                return Ok(());
            }
            if source.is_empty() {
                continue;
            }

            let already_printed = self.interpreter.output().len();
            let result = run_source(source, &mut self.interpreter);
            for printed in self.interpreter.output().iter().skip(already_printed) {
                writeln!(out, "{printed}")?;
            }
            if let Err(err) = result {
                writeln!(out, "Error: {err}")?;
            }
        }
    }
}

/// Say goodbye on a fresh line. Shared by end of input and interrupt.
pub fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nGoodbye!")?;
    out.flush()
}

/// On Ctrl-C, print the farewell to stdout and exit. The status is 0
/// unless the farewell could not be written.
pub fn exit_on_interrupt() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let code = i32::from(farewell(&mut io::stdout()).is_err());
        std::process::exit(code);
    })
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests;
