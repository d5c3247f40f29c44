//! Printed rendering of numbers.
//!
//! Produces the shortest text that reads back to the same `f64`, laid out
//! the way a Python `float` repr is:
//!
//! - decimal exponent in `-4..16`: positional, always with a `.` (`42.0`,
//!   `0.0001`, `1000000000000000.0`)
//! - otherwise scientific with a signed exponent of at least two digits
//!   (`1e+16`, `1.5e-05`)
//! - `nan`, `inf` and `-inf` for the non-finite values

/// Render a number for `print`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    // `{:e}` yields the shortest round-trip digits: `-1.25e-7`, `0e0`.
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..16).contains(&exponent) {
        let (sign, mantissa) = match mantissa.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", mantissa),
        };
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        format!("{sign}{}", positional(&digits, exponent))
    } else {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{exponent_sign}{:02}", exponent.unsigned_abs())
    }
}

/// Place the significant `digits` (no sign, no point) at decimal
/// `exponent`.
fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = usize::try_from(-exponent - 1).unwrap_or_default();
        return format!("0.{}{digits}", "0".repeat(zeros));
    }

    let int_len = usize::try_from(exponent).unwrap_or_default() + 1;
    if digits.len() <= int_len {
        format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}
