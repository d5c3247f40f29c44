//! Grammar productions.
//!
//! - `mod.rs`: statements
//! - `expr.rs`: the binary precedence chain, unary and primary expressions
//! - `operators.rs`: token-to-operator matching

mod expr;
mod operators;

use cri_ir::{Stmt, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a statement: `print expression` or a bare expression.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.check(TokenKind::Print) {
            self.parse_print_statement()
        } else {
            Ok(Stmt::Expr(self.parse_expr()?))
        }
    }

    fn parse_print_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Print, "to start a print statement")?;
        let expr = self.parse_expr()?;
        Ok(Stmt::Print(expr))
    }
}
