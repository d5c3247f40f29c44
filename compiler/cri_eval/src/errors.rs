//! Runtime errors.
//!
//! Any of these aborts the remaining statements of the current `interpret`
//! call. Operators and node kinds are closed enums, so there is no
//! unknown-operator or unknown-node case to report.

use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum EvalError {
    /// Right operand of `/` is exactly zero (either sign).
    #[error("Division by zero")]
    DivisionByZero,

    /// `0 ^ e` with a finite negative exponent.
    #[error("0.0 cannot be raised to a negative power")]
    ZeroToNegativePower,

    /// `b ^ e` with finite negative `b` and finite non-integer `e`.
    #[error("negative number cannot be raised to a fractional power")]
    FractionalPowerOfNegative,

    /// `^` on finite operands whose result is infinite.
    #[error("Numerical result out of range")]
    PowerOverflow,
}

/// Result of evaluating an expression or statement.
pub type EvalResult<T = f64> = Result<T, EvalError>;
