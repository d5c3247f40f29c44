//! Token cursor for navigating the token stream.
//!
//! A single forward-only position with one token of lookahead. The parser
//! never backtracks.

use cri_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::ParseError;

/// Cursor over a token slice.
///
/// Positions past the end of the slice read as `Eof`, so a stream without
/// a trailing `Eof` token (or an empty one) still terminates cleanly.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    /// Stand-in returned once the slice is exhausted.
    eof: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::new(
                TokenKind::Eof,
                "",
                last.line,
                last.column,
                Span::point(last.span.end),
            ),
            None => Token::new(TokenKind::Eof, "", 1, 1, Span::DUMMY),
        };
        Cursor {
            tokens,
            eof,
            pos: 0,
        }
    }

    /// Current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current token.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Advance to the next token and return the consumed one.
    ///
    /// At `Eof` the cursor stays put.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        let token = self.tokens.get(current).unwrap_or(&self.eof);
        trace!(
            pos = current,
            kind = %token.kind,
            line = token.line,
            column = token.column,
            "advance"
        );
        token
    }

    /// Consume a token of `kind`, or fail naming what was expected.
    ///
    /// `context` completes the message, e.g. `"after expression"`.
    pub fn expect(&mut self, kind: TokenKind, context: &'static str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(kind, context, self.current()))
        }
    }
}
