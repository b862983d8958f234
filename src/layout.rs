//! Keypad layouts for the two calculator modes.

use serde::{Deserialize, Serialize};

use crate::calculator::{BinaryOp, Function};
use crate::controller::Button;

/// Number of buttons per keypad row.
pub const COLUMNS: usize = 4;

/// Which keypad is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Standard,
    Scientific,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Standard => Self::Scientific,
            Self::Scientific => Self::Standard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Scientific => "Scientific",
        }
    }

    /// Text for the status label, e.g. "Mode: Standard".
    pub fn status_text(self) -> String {
        format!("Mode: {}", self.label())
    }

    /// Text for the toggle button, naming the mode it switches to.
    pub fn toggle_text(self) -> String {
        format!("Switch to {}", self.toggled().label())
    }

    /// The keypad rows for this mode. `None` is an empty spacer cell.
    pub fn rows(self) -> Vec<[Option<Button>; COLUMNS]> {
        match self {
            Self::Standard => {
                let mut rows = vec![[
                    Some(Button::Clear),
                    Some(Button::ClearEntry),
                    Some(op(BinaryOp::Power)),
                    Some(op(BinaryOp::Divide)),
                ]];
                rows.extend(digit_rows());
                rows
            }
            Self::Scientific => {
                let mut rows = vec![
                    [
                        Some(Button::Clear),
                        Some(Button::ClearEntry),
                        Some(Button::Pi),
                        Some(Button::E),
                    ],
                    [
                        Some(func(Function::Sin)),
                        Some(func(Function::Cos)),
                        Some(func(Function::Tan)),
                        Some(func(Function::Log)),
                    ],
                    [
                        Some(func(Function::Arcsin)),
                        Some(func(Function::Arccos)),
                        Some(func(Function::Arctan)),
                        Some(func(Function::Ln)),
                    ],
                    [
                        Some(func(Function::Sqrt)),
                        Some(op(BinaryOp::Power)),
                        Some(func(Function::Factorial)),
                        Some(op(BinaryOp::Divide)),
                    ],
                ];
                rows.extend(digit_rows());
                rows
            }
        }
    }

    /// All buttons of this mode's keypad, row by row.
    pub fn buttons(self) -> Vec<Button> {
        self.rows().into_iter().flatten().flatten().collect()
    }
}

fn op(op: BinaryOp) -> Button {
    Button::Operator(op)
}

fn func(func: Function) -> Button {
    Button::Function(func)
}

/// The digit block shared by both modes.
fn digit_rows() -> [[Option<Button>; COLUMNS]; 4] {
    [
        [
            Some(Button::Digit(7)),
            Some(Button::Digit(8)),
            Some(Button::Digit(9)),
            Some(op(BinaryOp::Multiply)),
        ],
        [
            Some(Button::Digit(4)),
            Some(Button::Digit(5)),
            Some(Button::Digit(6)),
            Some(op(BinaryOp::Subtract)),
        ],
        [
            Some(Button::Digit(1)),
            Some(Button::Digit(2)),
            Some(Button::Digit(3)),
            Some(op(BinaryOp::Add)),
        ],
        [
            Some(Button::Digit(0)),
            Some(Button::Point),
            None,
            Some(Button::Equals),
        ],
    ]
}

/// The keypad currently shown by a front end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    pub mode: Mode,
}

impl Keypad {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Swap between the standard and scientific layouts.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        tracing::info!(mode = self.mode.label(), "switched keypad mode");
    }

    pub fn rows(&self) -> Vec<[Option<Button>; COLUMNS]> {
        self.mode.rows()
    }

    /// Render the keypad as text, one row per line.
    pub fn render_text(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        let label = cell.map(|b| b.label()).unwrap_or_default();
                        format!("{label:^8}")
                    })
                    .collect::<Vec<_>>()
                    .join("|")
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
