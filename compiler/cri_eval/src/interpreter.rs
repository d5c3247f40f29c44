//! Tree-walking interpreter.

use cri_ir::{Expr, Program, Stmt};
use cri_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::EvalResult;
use crate::format::format_number;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::print_handler::PrintHandler;

/// Evaluates programs and records what `print` produced.
///
/// The output log accumulates across `interpret` calls until
/// [`clear_output`](Self::clear_output). Lines printed before a runtime
/// error stay in the log.
#[derive(Debug, Default)]
pub struct Interpreter {
    output: Vec<String>,
    print_handler: PrintHandler,
}

impl Interpreter {
    /// Interpreter that prints to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpreter with an explicit print destination.
    pub fn with_print_handler(print_handler: PrintHandler) -> Self {
        Interpreter {
            output: Vec::new(),
            print_handler,
        }
    }

    /// Execute every statement in order, stopping at the first error.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn interpret(&mut self, program: &Program) -> EvalResult<()> {
        for stmt in &program.statements {
            if let Err(err) = self.execute(stmt) {
                debug!(error = %err, "runtime error");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Execute one statement, returning its value.
    ///
    /// A `print` statement also emits and logs the formatted value.
    pub fn execute(&mut self, stmt: &Stmt) -> EvalResult {
        match stmt {
            Stmt::Expr(expr) => self.evaluate(expr),
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                let text = format_number(value);
                trace!(%text, "print");
                self.print_handler.println(&text);
                self.output.push(text);
                Ok(value)
            }
        }
    }

    /// Evaluate an expression. The left operand is evaluated before the
    /// right.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Binary { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(*op, left, right)
            }
            Expr::Unary { op, operand } => Ok(evaluate_unary(*op, self.evaluate(operand)?)),
        })
    }

    /// Snapshot of the output log.
    pub fn output(&self) -> Vec<String> {
        self.output.clone()
    }

    /// Empty the output log.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}
