//! Tokenizer and grammar for the display buffer.
//!
//! The keypad inserts operators as `" op "`, so the buffer is split on
//! whitespace and every word must be either a number or an operator.
//!
//! GRAMMAR:
//!   expression --> NUMBER | NUMBER OPERATOR NUMBER
//!
//! Anything longer (chained operations, two operators in a row) is rejected.

use lazy_static::lazy_static;
use regex::Regex;

use super::CalcError;
use super::operations::BinaryOp;

lazy_static! {
    /// A plain decimal number as typed on the keypad or printed as a result.
    /// Allows a leading minus so a negative result can be reused.
    static ref NUMBER: Regex = Regex::new(r"^-?(\d+(\.\d*)?|\.\d+)$").unwrap();
}

/// A single word of the display buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOp),
}

/// A parsed display buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Expression {
    /// A lone number, e.g. a previous result.
    Number(f64),
    /// `lhs op rhs`
    Binary { lhs: f64, op: BinaryOp, rhs: f64 },
}

/// Parse one word as a number.
pub fn parse_number(word: &str) -> Result<f64, CalcError> {
    if !NUMBER.is_match(word) {
        return Err(CalcError::InvalidNumber(word.to_string()));
    }
    word.parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(word.to_string()))
}

/// Split the buffer into tokens.
pub fn tokenize(text: &str) -> Result<Vec<Token>, CalcError> {
    text.split_whitespace()
        .map(|word| match word.parse::<BinaryOp>() {
            Ok(op) => Ok(Token::Operator(op)),
            Err(_) => parse_number(word).map(Token::Number),
        })
        .collect()
}

/// Parse the buffer into an [`Expression`].
pub fn parse(text: &str) -> Result<Expression, CalcError> {
    let tokens = tokenize(text)?;

    match tokens.as_slice() {
        [Token::Number(value)] => Ok(Expression::Number(*value)),
        [Token::Number(lhs), Token::Operator(op), Token::Number(rhs)] => Ok(Expression::Binary {
            lhs: *lhs,
            op: *op,
            rhs: *rhs,
        }),
        _ => Err(CalcError::MalformedExpression {
            tokens: tokens.len(),
        }),
    }
}

/// Extract the argument of a function-call-shaped buffer such as `"sin(45"`.
///
/// The argument is everything after the first `(`. A buffer without `(`,
/// or with nothing after it, yields `0`.
pub fn function_argument(text: &str) -> Result<f64, CalcError> {
    let Some(idx) = text.find('(') else {
        return Ok(0.0);
    };

    let rest = text[idx + 1..].trim();
    if rest.is_empty() {
        return Ok(0.0);
    }

    parse_number(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keypad_text() {
        assert_eq!(
            tokenize("12.5 * 4").unwrap(),
            vec![
                Token::Number(12.5),
                Token::Operator(BinaryOp::Multiply),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_negative_number_vs_minus() {
        assert_eq!(
            tokenize("-3 - 2").unwrap(),
            vec![
                Token::Number(-3.0),
                Token::Operator(BinaryOp::Subtract),
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_words() {
        assert_eq!(
            tokenize("abc"),
            Err(CalcError::InvalidNumber("abc".to_string()))
        );
        assert!(tokenize("1e5").is_err());
        assert!(tokenize("inf").is_err());
        assert!(tokenize("NaN").is_err());
        assert!(tokenize("1.2.3").is_err());
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(parse_number("7"), Ok(7.0));
        assert_eq!(parse_number("7."), Ok(7.0));
        assert_eq!(parse_number(".5"), Ok(0.5));
        assert_eq!(parse_number("-0.25"), Ok(-0.25));
        assert!(parse_number(".").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_parse_binary() {
        assert_eq!(
            parse("2 + 3"),
            Ok(Expression::Binary {
                lhs: 2.0,
                op: BinaryOp::Add,
                rhs: 3.0,
            })
        );
        assert_eq!(
            parse("2 ^ 0.5"),
            Ok(Expression::Binary {
                lhs: 2.0,
                op: BinaryOp::Power,
                rhs: 0.5,
            })
        );
    }

    #[test]
    fn test_parse_single_number() {
        assert_eq!(parse("42"), Ok(Expression::Number(42.0)));
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        assert_eq!(
            parse("2 + "),
            Err(CalcError::MalformedExpression { tokens: 2 })
        );
        assert_eq!(parse(""), Err(CalcError::MalformedExpression { tokens: 0 }));
        assert_eq!(
            parse("1 + 2 + 3"),
            Err(CalcError::MalformedExpression { tokens: 5 })
        );
        assert_eq!(
            parse("5 -  * 2"),
            Err(CalcError::MalformedExpression { tokens: 4 })
        );
        assert_eq!(
            parse("+ 2 3"),
            Err(CalcError::MalformedExpression { tokens: 3 })
        );
    }

    #[test]
    fn test_function_argument() {
        assert_eq!(function_argument("sin(45"), Ok(45.0));
        assert_eq!(function_argument("fact(5"), Ok(5.0));
        assert_eq!(function_argument("sqrt(-4"), Ok(-4.0));
        assert_eq!(function_argument("cos("), Ok(0.0));
        assert_eq!(function_argument("cos"), Ok(0.0));
        assert!(function_argument("sin(45 + 1").is_err());
        assert!(function_argument("ln(x").is_err());
    }
}
