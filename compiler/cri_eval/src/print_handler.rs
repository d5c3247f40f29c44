//! Where `print` statements write.
//!
//! Enum dispatch: the destinations are fixed, so no trait object is needed.
//! The interpreter's output log is recorded separately and does not depend
//! on the handler.

/// Destination for printed lines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PrintHandler {
    /// Write each line to stdout.
    #[default]
    Stdout,
    /// Discard output; the log is the only record.
    Silent,
}

impl PrintHandler {
    /// Print a line (with newline).
    pub fn println(self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Silent => {}
        }
    }
}
