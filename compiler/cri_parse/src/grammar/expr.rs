//! Expression parsing.
//!
//! One method per precedence level, lowest binding outermost. The
//! recursive entry points (`parse_expr`, `parse_power`, `parse_unary`) run
//! under `ensure_sufficient_stack`, since parenthesized, chained `^` and
//! repeated sign input recurse once per level.

use cri_ir::{BinaryOp, Expr, TokenKind};
use cri_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_addition())
    }

    /// Parse `+` and `-` (lowest precedence, left-associative).
    fn parse_addition(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplication()?;

        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplication()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*` and `/` (left-associative).
    fn parse_multiplication(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_power()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_power()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `^` (highest binary precedence, right-associative).
    ///
    /// The right operand recurses into `parse_power` itself, so
    /// `2 ^ 3 ^ 2` groups as `2 ^ (3 ^ 2)`.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let base = self.parse_unary()?;

            if self.check(TokenKind::Caret) {
                self.advance();
                let exponent = self.parse_power()?;
                return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
            }

            Ok(base)
        })
    }

    /// Parse prefix `+` / `-`, which may repeat (`--5`).
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            if let Some(op) = self.match_unary_op() {
                self.advance();
                let operand = self.parse_unary()?;
                return Ok(Expr::unary(op, operand));
            }

            self.parse_primary()
        })
    }

    /// Parse a number literal or a parenthesized expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::Number => {
                let token = self.advance();
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| ParseError::invalid_number(token))?;
                Ok(Expr::number(value))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen, "after expression")?;
                Ok(expr)
            }
            _ => Err(ParseError::unexpected(self.current())),
        }
    }
}
