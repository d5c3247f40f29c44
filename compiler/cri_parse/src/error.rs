//! Parse error types.
//!
//! Parsing stops at the first error; there is no recovery and no
//! multi-error collection. Every variant carries the offending token's
//! text, its line, and its span.

use cri_ir::{Span, Token, TokenKind};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No expression can start with this token.
    #[error("Unexpected token: {found} at line {line}")]
    UnexpectedToken { found: String, line: u32, span: Span },

    /// A required token is missing.
    #[error("Expected '{expected}' {context}. Got {found} at line {line}")]
    ExpectedToken {
        expected: TokenKind,
        context: &'static str,
        found: String,
        line: u32,
        span: Span,
    },

    /// A `Number` token whose text is not a decimal literal.
    ///
    /// The lexer never produces one; hand-built token streams can.
    #[error("Invalid number literal '{text}' at line {line}")]
    InvalidNumber { text: String, line: u32, span: Span },
}

impl ParseError {
    pub(crate) fn unexpected(token: &Token) -> Self {
        ParseError::UnexpectedToken {
            found: token.describe().to_owned(),
            line: token.line,
            span: token.span,
        }
    }

    pub(crate) fn expected(expected: TokenKind, context: &'static str, token: &Token) -> Self {
        ParseError::ExpectedToken {
            expected,
            context,
            found: token.describe().to_owned(),
            line: token.line,
            span: token.span,
        }
    }

    pub(crate) fn invalid_number(token: &Token) -> Self {
        ParseError::InvalidNumber {
            text: token.text.clone(),
            line: token.line,
            span: token.span,
        }
    }

    /// Line of the token the parser stopped at.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::ExpectedToken { line, .. }
            | ParseError::InvalidNumber { line, .. } => *line,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedToken { span, .. }
            | ParseError::InvalidNumber { span, .. } => *span,
        }
    }
}
