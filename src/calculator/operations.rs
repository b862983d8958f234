//! The math table behind every operator and function button.
//!
//! Trigonometric functions take their argument in degrees and the inverse
//! functions return degrees, matching what a pocket calculator shows.

use std::fmt;
use std::str::FromStr;

use super::CalcError;

/// A binary operator between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// All operators, in keypad order.
    pub const ALL: [BinaryOp; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// The symbol shown on the button and in the display.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CalcError::UnknownSymbol(s.to_string()))
    }
}

/// A unary scientific function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Arcsin,
    Arccos,
    Arctan,
    Sqrt,
    Log,
    Ln,
    Factorial,
}

impl Function {
    pub const ALL: [Function; 10] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Arcsin,
        Self::Arccos,
        Self::Arctan,
        Self::Sqrt,
        Self::Log,
        Self::Ln,
        Self::Factorial,
    ];

    /// The label on the button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Factorial => "!",
        }
    }

    /// Text placed in the display when the function is selected,
    /// e.g. `"sin("`. Factorial reads as `"fact("`.
    pub fn display_prefix(self) -> String {
        match self {
            Self::Factorial => "fact(".to_string(),
            other => format!("{}(", other.label()),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Function {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "fact" {
            return Ok(Self::Factorial);
        }
        Self::ALL
            .into_iter()
            .find(|func| func.label() == s)
            .ok_or_else(|| CalcError::UnknownSymbol(s.to_string()))
    }
}

/// Apply a binary operator.
///
/// Division by zero follows IEEE rules and yields an infinity or NaN;
/// the evaluator rejects those.
pub fn calculate(lhs: f64, rhs: f64, op: BinaryOp) -> f64 {
    match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => lhs / rhs,
        BinaryOp::Power => lhs.powf(rhs),
    }
}

/// Apply a unary function to its argument.
pub fn apply(func: Function, value: f64) -> Result<f64, CalcError> {
    let result = match func {
        Function::Sin => value.to_radians().sin(),
        Function::Cos => value.to_radians().cos(),
        Function::Tan => value.to_radians().tan(),
        Function::Arcsin => value.asin().to_degrees(),
        Function::Arccos => value.acos().to_degrees(),
        Function::Arctan => value.atan().to_degrees(),
        Function::Sqrt => value.sqrt(),
        Function::Log => value.log10(),
        Function::Ln => value.ln(),
        Function::Factorial => factorial(value)?,
    };
    Ok(result)
}

/// `value` raised to `1 / n`.
pub fn nth_root(value: f64, n: f64) -> f64 {
    value.powf(1.0 / n)
}

/// Factorial of a non-negative integer, accumulated in `f64`.
///
/// Overflows to infinity past `170!`.
pub fn factorial(n: f64) -> Result<f64, CalcError> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::InvalidFactorial(n));
    }

    let mut product = 1.0;
    let mut i = 2.0;
    while i <= n {
        product *= i;
        i += 1.0;
        if product.is_infinite() {
            break;
        }
    }
    Ok(product)
}
