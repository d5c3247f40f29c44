//! Operator implementations for the evaluator.
//!
//! Direct enum dispatch: the operator sets are closed, so a `match`
//! covers them exhaustively.

use cri_ir::{BinaryOp, UnaryOp};

use crate::errors::{EvalError, EvalResult};

/// Evaluate a binary operation on already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: f64, right: f64) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => divide(left, right),
        BinaryOp::Pow => power(left, right),
    }
}

/// Evaluate a unary operation.
pub fn evaluate_unary(op: UnaryOp, operand: f64) -> f64 {
    match op {
        UnaryOp::Plus => operand,
        UnaryOp::Neg => -operand,
    }
}

/// Only an exact zero divisor fails; tiny divisors divide normally.
#[allow(clippy::float_cmp, reason = "exact zero is the documented condition")]
fn divide(left: f64, right: f64) -> EvalResult {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(left / right)
}

/// Floating-point exponentiation.
///
/// Finite operands are checked for the three cases with no real result.
/// If either operand is infinite or NaN the IEEE `pow` result is returned
/// as is.
#[allow(clippy::float_cmp, reason = "zero base and integral exponent are exact checks")]
fn power(base: f64, exponent: f64) -> EvalResult {
    if !(base.is_finite() && exponent.is_finite()) {
        return Ok(base.powf(exponent));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::ZeroToNegativePower);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::FractionalPowerOfNegative);
    }

    let result = base.powf(exponent);
    if result.is_infinite() {
        return Err(EvalError::PowerOverflow);
    }
    Ok(result)
}
