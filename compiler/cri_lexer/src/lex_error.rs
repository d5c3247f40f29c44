//! Lexer error types.

use cri_ir::Span;
use thiserror::Error;

/// A lexer error. Lexing stops at the first one; no partial token list is
/// returned alongside it.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    /// No token pattern matches at this position.
    #[error("Unexpected character '{ch}' at line {line}, column {column}")]
    UnexpectedCharacter {
        ch: char,
        line: u32,
        column: u32,
        span: Span,
    },
}

impl LexError {
    /// Build an unexpected-character error from the unmatched source text.
    ///
    /// Only the first character of `slice` is reported, with `span` narrowed
    /// to cover just that character.
    pub(crate) fn unexpected(slice: &str, line: u32, column: u32, span: Span) -> Self {
        let ch = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        let width = u32::try_from(ch.len_utf8()).unwrap_or(1);
        LexError::UnexpectedCharacter {
            ch,
            line,
            column,
            span: Span::new(span.start, span.start.saturating_add(width)),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    pub fn column(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { column, .. } => *column,
        }
    }
}
