//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived matcher output before position
//! tracking and trivia filtering. Declaration order mirrors the language's
//! pattern priority: comment, number, operators, parens, `print`, newline,
//! whitespace.

use cri_ir::TokenKind;
use logos::Logos;

/// Raw token from logos.
///
/// Whitespace is a real variant rather than a `#[logos(skip)]` pattern so
/// the lexer sees its width when tracking columns.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[token("print")]
    Print,

    /// A run of word characters that is not the `print` keyword.
    ///
    /// The language has no identifiers; this exists so that `print` only
    /// matches at a word boundary (`printx` is not `print` followed by `x`).
    /// Word characters are Unicode letters, numbers and `_`. A word cannot
    /// start with a number, so `2print` is still a literal then a keyword.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Word,

    #[token("\n")]
    Newline,

    #[regex(r"[ \t]+")]
    Whitespace,
}

impl RawToken {
    /// The token kind this raw token becomes, or `None` for trivia and words.
    pub(crate) const fn kind(self) -> Option<TokenKind> {
        match self {
            RawToken::Number => Some(TokenKind::Number),
            RawToken::Plus => Some(TokenKind::Plus),
            RawToken::Minus => Some(TokenKind::Minus),
            RawToken::Star => Some(TokenKind::Star),
            RawToken::Slash => Some(TokenKind::Slash),
            RawToken::Caret => Some(TokenKind::Caret),
            RawToken::LParen => Some(TokenKind::LParen),
            RawToken::RParen => Some(TokenKind::RParen),
            RawToken::Print => Some(TokenKind::Print),
            RawToken::Newline => Some(TokenKind::Newline),
            RawToken::Comment | RawToken::Whitespace | RawToken::Word => None,
        }
    }
}

#[cfg(test)]
mod tests;
