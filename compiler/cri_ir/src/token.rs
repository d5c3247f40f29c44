//! Token types produced by the lexer.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// A classified lexical unit with its source position.
///
/// `line` and `column` are 1-based; columns count characters, not bytes.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
            span,
        }
    }

    /// Create a token with no source position, for tests and hand-built streams.
    pub fn dummy(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, 1, 1, Span::DUMMY)
    }

    /// The token text as shown in diagnostics.
    ///
    /// The end-of-input token has no text, so it is described instead.
    pub fn describe(&self) -> &str {
        match self.kind {
            TokenKind::Eof => "end of input",
            TokenKind::Newline => "newline",
            _ => &self.text,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}:{}",
            self.kind, self.text, self.line, self.column
        )
    }
}

/// Token kinds for CRi.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Decimal literal: digits with an optional fractional part.
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    /// The `print` keyword.
    Print,
    /// Statement separator.
    Newline,
    /// End of input. Always the last token of a `TokenList`.
    Eof,
}

impl TokenKind {
    /// Human-readable name used in diagnostics and token dumps.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Caret => "^",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Print => "print",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ordered lexer output, terminated by an `Eof` token when produced by the lexer.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// The kinds of all tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
