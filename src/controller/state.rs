//! Calculator state and the reducer that drives it.
//!
//! The state is a plain value: every button press consumes the previous
//! state and returns the next one, so front ends only need to render it.

use tracing::debug;

use super::button::Button;
use crate::calculator::{ERROR_TEXT, Function, evaluate, format_result};

/// Everything the keypad mutates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcState {
    /// Text shown in the display.
    pub display: String,
    /// Function selected before its argument was typed.
    pub pending: Option<Function>,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the display currently shows the error text.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    /// Whether a function is waiting for `=`.
    pub fn is_function_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Apply one button press and return the resulting state.
pub fn reduce(mut state: CalcState, button: Button) -> CalcState {
    // Typing after an error starts a fresh entry.
    if button.is_input() && state.is_error() {
        state.display.clear();
    }

    match button {
        Button::Digit(d) => {
            if let Some(digit) = char::from_digit(u32::from(d), 10) {
                state.display.push(digit);
            }
        }
        Button::Point => state.display.push('.'),
        Button::Pi => state.display.push_str(&std::f64::consts::PI.to_string()),
        Button::E => state.display.push_str(&std::f64::consts::E.to_string()),
        Button::Operator(op) => {
            state.display.push(' ');
            state.display.push_str(op.symbol());
            state.display.push(' ');
        }
        Button::Function(func) => {
            state.pending = Some(func);
            state.display = func.display_prefix();
        }
        Button::Clear => {
            state.display.clear();
            state.pending = None;
        }
        Button::ClearEntry => {
            // The error text is not an entry; drop it whole.
            if state.is_error() {
                state.display.clear();
            } else {
                state.display.pop();
            }
        }
        Button::Equals => return evaluate_state(state),
    }

    state
}

/// Apply a sequence of button presses starting from `state`.
pub fn reduce_all(state: CalcState, buttons: impl IntoIterator<Item = Button>) -> CalcState {
    buttons.into_iter().fold(state, reduce)
}

fn evaluate_state(state: CalcState) -> CalcState {
    if state.display.is_empty() && state.pending.is_none() {
        return state;
    }

    match evaluate(&state.display, state.pending) {
        Ok(value) => CalcState {
            display: format_result(value),
            pending: None,
        },
        Err(err) => {
            debug!(display = %state.display, pending = ?state.pending, "evaluation failed: {err}");
            CalcState {
                display: ERROR_TEXT.to_string(),
                pending: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::BinaryOp;

    const EPSILON: f64 = 1e-9;

    fn press(labels: &str) -> CalcState {
        press_from(CalcState::new(), labels)
    }

    fn press_from(state: CalcState, labels: &str) -> CalcState {
        let buttons = labels
            .split_whitespace()
            .map(|label| label.parse::<Button>().unwrap());
        reduce_all(state, buttons)
    }

    fn display_value(state: &CalcState) -> f64 {
        state.display.parse().unwrap()
    }

    fn assert_display_close(state: &CalcState, expected: f64) {
        let actual = display_value(state);
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = CalcState::new();
        assert!(state.display.is_empty());
        assert!(!state.is_function_pending());
    }

    #[test]
    fn test_digits_and_point_append() {
        let state = press("1 2 . 5");
        assert_eq!(state.display, "12.5");
    }

    #[test]
    fn test_operator_is_spaced() {
        let state = press("2 +");
        assert_eq!(state.display, "2 + ");
        let state = press_from(state, "3");
        assert_eq!(state.display, "2 + 3");
    }

    #[test]
    fn test_constants_append_digits() {
        assert_eq!(press("π").display, "3.141592653589793");
        assert_eq!(press("e").display, "2.718281828459045");
        assert_eq!(press("2 * π").display, "2 * 3.141592653589793");
    }

    #[test]
    fn test_binary_evaluation() {
        assert_eq!(press("2 + 3 =").display, "5");
        assert_eq!(press("9 - 1 2 =").display, "-3");
        assert_eq!(press("1 . 5 * 4 =").display, "6");
        assert_eq!(press("7 / 2 =").display, "3.5");
        assert_eq!(press("2 ^ 1 0 =").display, "1024");
    }

    #[test]
    fn test_result_feeds_next_expression() {
        let state = press("9 - 1 2 =");
        let state = press_from(state, "* 2 =");
        assert_eq!(state.display, "-6");
    }

    #[test]
    fn test_function_sets_pending_and_prefix() {
        let state = press("4 2 sin");
        assert_eq!(state.display, "sin(");
        assert_eq!(state.pending, Some(Function::Sin));

        let state = press("!");
        assert_eq!(state.display, "fact(");
        assert_eq!(state.pending, Some(Function::Factorial));
    }

    #[test]
    fn test_function_evaluation() {
        assert_display_close(&press("sin 9 0 ="), 1.0);
        assert_display_close(&press("cos 6 0 ="), 0.5);
        assert_display_close(&press("tan 4 5 ="), 1.0);
        assert_display_close(&press("arcsin 1 ="), 90.0);
        assert_display_close(&press("arccos 1 ="), 0.0);
        assert_display_close(&press("arctan 1 ="), 45.0);
        assert_display_close(&press("sqrt 1 6 ="), 4.0);
        assert_display_close(&press("log 1 0 0 0 ="), 3.0);
        assert_display_close(&press("ln 1 ="), 0.0);
        assert_display_close(&press("ln e ="), 1.0);
        assert_eq!(press("! 5 =").display, "120");
    }

    #[test]
    fn test_function_evaluation_clears_pending() {
        let state = press("sqrt 9 =");
        assert_eq!(state.display, "3");
        assert_eq!(state.pending, None);
    }

    #[test]
    fn test_factorial_of_negative_is_error() {
        let state = CalcState {
            display: "fact(-3".to_string(),
            pending: Some(Function::Factorial),
        };
        let state = reduce(state, Button::Equals);
        assert_eq!(state.display, ERROR_TEXT);
        assert_eq!(state.pending, None);
    }

    #[test]
    fn test_factorial_of_fraction_is_error() {
        assert!(press("! 2 . 5 =").is_error());
    }

    #[test]
    fn test_division_by_zero_is_error() {
        let state = press("1 / 0 =");
        assert!(state.is_error());
    }

    #[test]
    fn test_malformed_expressions_are_error() {
        assert!(press("2 + =").is_error());
        assert!(press("2 + + 3 =").is_error());
        assert!(press("1 + 2 + 3 =").is_error());
        assert!(press(". =").is_error());

        let state = reduce(
            CalcState {
                display: "abc".to_string(),
                pending: None,
            },
            Button::Equals,
        );
        assert!(state.is_error());
    }

    #[test]
    fn test_function_with_expression_argument_is_error() {
        let state = press("sin 4 5 + 1 =");
        assert!(state.is_error());
        assert_eq!(state.pending, None);
    }

    #[test]
    fn test_equals_on_empty_display_is_noop() {
        assert_eq!(press("="), CalcState::new());
    }

    #[test]
    fn test_lone_number_evaluates_to_itself() {
        assert_eq!(press("4 2 =").display, "42");
        assert_eq!(press("0 0 7 . 5 0 =").display, "7.5");
    }

    #[test]
    fn test_clear_resets_everything() {
        let states = [
            CalcState::new(),
            press("1 2 +"),
            press("sin 3 0"),
            press("1 / 0 ="),
            press("!"),
        ];
        for state in states {
            assert_eq!(reduce(state, Button::Clear), CalcState::new());
        }
    }

    #[test]
    fn test_clear_entry_removes_one_character() {
        let state = press("1 2 3 CE");
        assert_eq!(state.display, "12");

        let state = press("2 + CE");
        assert_eq!(state.display, "2 +");

        let state = press("π CE");
        assert_eq!(state.display, "3.14159265358979");
    }

    #[test]
    fn test_clear_entry_on_empty_is_noop() {
        assert_eq!(press("CE"), CalcState::new());
    }

    #[test]
    fn test_clear_entry_keeps_pending_function() {
        let state = press("sqrt 8 1 CE");
        assert_eq!(state.display, "sqrt(8");
        assert_eq!(state.pending, Some(Function::Sqrt));
        assert_eq!(press_from(state, "=").display, "2.8284271247461903");
    }

    #[test]
    fn test_input_after_error_starts_fresh() {
        let state = press("1 / 0 = 7");
        assert_eq!(state.display, "7");

        let state = press("1 / 0 = +");
        assert_eq!(state.display, " + ");
    }

    #[test]
    fn test_clear_entry_on_error_clears_display() {
        let state = press("1 / 0 = CE");
        assert_eq!(state.display, "");
        assert_eq!(press_from(state, "7").display, "7");
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let state = reduce(press("4"), Button::Digit(12));
        assert_eq!(state.display, "4");
    }

    #[test]
    fn test_operator_buttons_cover_all_ops() {
        for op in BinaryOp::ALL {
            let state = reduce(press("8"), Button::Operator(op));
            assert_eq!(state.display, format!("8 {} ", op.symbol()));
        }
    }
}
