//! CRi IR - shared data model for the CRi pipeline.
//!
//! This crate contains the types every stage agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`, `Program`) for parser output
//!
//! The AST is a strict tree of owned nodes. Node kinds and operators are
//! closed enums, so every consumer matches them exhaustively.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, Program, Stmt, UnaryOp};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
