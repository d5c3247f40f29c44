//! Lexer for CRi using logos.
//!
//! Converts source text into a `TokenList`. Comments and intra-line
//! whitespace take part in line/column tracking but are dropped from the
//! output; newlines are kept because they separate statements. The list
//! always ends with a single `Eof` token.

mod lex_error;
mod raw_token;

use cri_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::{debug, trace};

pub use lex_error::LexError;
use raw_token::RawToken;

/// Line/column cursor; both 1-based, columns in characters.
#[derive(Copy, Clone, Debug)]
struct Position {
    line: u32,
    column: u32,
}

impl Position {
    const START: Position = Position { line: 1, column: 1 };

    fn advance(&mut self, raw: RawToken, slice: &str) {
        if raw == RawToken::Newline {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            let width = u32::try_from(slice.chars().count()).unwrap_or(u32::MAX);
            self.column = self.column.saturating_add(width);
        }
    }
}

/// Tokenize `source`.
///
/// Fails on the first character that no token pattern matches. A word
/// such as `printer` counts as unmatched at its first character, since the
/// only word the language knows is `print`.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::with_capacity(source.len() / 2 + 1);
    let mut pos = Position::START;
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();

        let raw = match result {
            Ok(RawToken::Word) | Err(()) => {
                return Err(LexError::unexpected(slice, pos.line, pos.column, span));
            }
            Ok(raw) => raw,
        };

        if let Some(kind) = raw.kind() {
            trace!(?kind, text = slice, line = pos.line, column = pos.column, "token");
            tokens.push(Token::new(kind, slice, pos.line, pos.column, span));
        }
        pos.advance(raw, slice);
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, "", pos.line, pos.column, end));

    debug!(tokens = tokens.len(), lines = pos.line, "tokenized");
    Ok(tokens)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests;
