//! Errors produced while evaluating the display buffer.

use thiserror::Error;

/// Why an evaluation failed.
///
/// The controller never shows these to the user; every variant collapses
/// into the fixed error text on the display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The buffer did not have the shape `number` or `number op number`.
    #[error("malformed expression: expected `number op number`, got {tokens} token(s)")]
    MalformedExpression { tokens: usize },

    /// A word in the buffer was neither a number nor an operator.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Not one of the operator or function symbols.
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(String),

    /// Factorial is only defined here for non-negative integers.
    #[error("factorial needs a non-negative integer, got {0}")]
    InvalidFactorial(f64),

    /// The computation produced NaN or an infinity.
    #[error("result is not a finite number")]
    NonFinite,
}
