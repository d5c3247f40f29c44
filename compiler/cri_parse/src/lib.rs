//! Recursive descent parser for CRi.
//!
//! Grammar, lowest to highest binding:
//!
//! ```text
//! program        := (statement | NEWLINE)* EOF
//! statement      := 'print' expression | expression
//! expression     := addition
//! addition       := multiplication (('+' | '-') multiplication)*
//! multiplication := power (('*' | '/') power)*
//! power          := unary ('^' power)?
//! unary          := ('+' | '-') unary | primary
//! primary        := NUMBER | '(' expression ')'
//! ```
//!
//! `^` is right-associative; every other binary operator is left-associative.
//! The grammar is LL(1), so one token of lookahead suffices.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use cri_ir::{Program, Token, TokenKind, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    #[inline]
    fn current(&self) -> &Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &Token {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind, context: &'static str) -> Result<&Token, ParseError> {
        self.cursor.expect(kind, context)
    }

    /// Parse every statement up to end of input.
    ///
    /// Blank lines are skipped and produce no node. Tokens left over after
    /// a statement must themselves start another statement, so `1 2` is
    /// two expression statements.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if self.check(TokenKind::Newline) {
                self.advance();
                continue;
            }
            statements.push(self.parse_statement()?);
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(Program::new(statements))
    }
}

/// Parse a token list into a `Program`.
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens.as_slice()).parse_program()
}
