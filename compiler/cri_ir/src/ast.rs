//! AST node types.
//!
//! The tree is built once by the parser and walked once by the evaluator.
//! Every child is an owned, fully-formed subtree; there is no sharing and
//! no partially built node.

mod operators;

use std::fmt;

use cri_stack::ensure_sufficient_stack;

pub use operators::{BinaryOp, UnaryOp};

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `op operand`
    Unary { op: UnaryOp, operand: Box<Expr> },
}

impl Expr {
    #[inline]
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    #[inline]
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline]
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Move this node's children onto `stack`, leaving literals behind.
    fn take_children(&mut self, stack: &mut Vec<Expr>) {
        match self {
            Expr::Number(_) => {}
            Expr::Binary { left, right, .. } => {
                stack.push(std::mem::replace(&mut **left, Expr::Number(0.0)));
                stack.push(std::mem::replace(&mut **right, Expr::Number(0.0)));
            }
            Expr::Unary { operand, .. } => {
                stack.push(std::mem::replace(&mut **operand, Expr::Number(0.0)));
            }
        }
    }
}

/// Drops iteratively so that tearing down a deeply nested tree does not
/// recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut expr) = stack.pop() {
            expr.take_children(&mut stack);
        }
    }
}

/// Renders fully parenthesized, e.g. `(2.0 + (3.0 * 4.0))`.
///
/// Recurses once per nesting level, so it grows the stack like the parser.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Number(value) => write!(f, "{value:?}"),
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::Unary { op, operand } => write!(f, "({op}{operand})"),
        })
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `print expression`
    Print(Expr),
    /// A bare expression; its value is discarded.
    Expr(Expr),
}

impl Stmt {
    /// The expression this statement evaluates.
    pub fn expr(&self) -> &Expr {
        match self {
            Stmt::Print(expr) | Stmt::Expr(expr) => expr,
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Print(expr) => write!(f, "print {expr}"),
            Stmt::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

/// Root of a parsed program: statements in source order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    #[inline]
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// One statement per line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}
