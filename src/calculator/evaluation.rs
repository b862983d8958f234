//! Evaluation of the display buffer.
//!
//! Either a pending function is applied to the number after `(`, or the
//! buffer is parsed as `number op number`. Results that are not finite
//! count as failures.

use super::CalcError;
use super::expression::{Expression, function_argument, parse};
use super::operations::{Function, apply, calculate};

/// Text shown in the display after any failed evaluation.
pub const ERROR_TEXT: &str = "Error";

/// Evaluate the display text, applying `pending` if a function was selected.
pub fn evaluate(display: &str, pending: Option<Function>) -> Result<f64, CalcError> {
    let value = match pending {
        Some(func) => apply(func, function_argument(display)?)?,
        None => match parse(display)? {
            Expression::Number(value) => value,
            Expression::Binary { lhs, op, rhs } => calculate(lhs, rhs, op),
        },
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite)
    }
}

/// Evaluate a plain `number op number` text.
pub fn evaluate_expression(input: &str) -> Result<f64, CalcError> {
    evaluate(input, None)
}

/// Format a result for the display.
///
/// Uses the shortest decimal that round-trips, without exponent notation,
/// so the text can be reused as the left operand of the next expression.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Avoid showing "-0".
        return "0".to_string();
    }
    format!("{}", value)
}
