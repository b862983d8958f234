//! Colors and sizes for the calculator window.

use gpui::{Hsla, Pixels, hsla, px};
use lazy_static::lazy_static;

use crate::controller::Button;

#[derive(Clone, Debug)]
pub struct CalculatorTheme {
    pub background: Hsla,

    pub mode_label_color: Hsla,
    pub mode_label_size: Pixels,

    pub display_background: Hsla,
    pub display_color: Hsla,
    pub display_error_color: Hsla,
    pub display_pending_color: Hsla,
    pub display_text_size: Pixels,
    pub display_height: Pixels,

    pub button_background: Hsla,
    pub button_background_hover: Hsla,
    pub operator_background: Hsla,
    pub function_background: Hsla,
    pub clear_background: Hsla,
    pub equals_background: Hsla,
    pub button_text_color: Hsla,
    pub button_text_size: Pixels,
    pub button_radius: Pixels,

    pub toggle_background: Hsla,
    pub toggle_text_color: Hsla,

    pub padding: Pixels,
    pub gap: Pixels,
}

impl Default for CalculatorTheme {
    fn default() -> Self {
        Self {
            background: hsla(0.0, 0.0, 0.09, 1.0),

            mode_label_color: hsla(0.0, 0.0, 0.85, 1.0),
            mode_label_size: px(20.0),

            display_background: hsla(0.0, 0.0, 0.0, 1.0),
            display_color: hsla(0.0, 0.0, 1.0, 1.0),
            // Orange/red-ish
            display_error_color: hsla(15.0 / 360.0, 0.7, 0.6, 1.0),
            display_pending_color: hsla(210.0 / 360.0, 0.7, 0.7, 1.0),
            display_text_size: px(30.0),
            display_height: px(72.0),

            button_background: hsla(0.0, 0.0, 0.18, 1.0),
            button_background_hover: hsla(0.0, 0.0, 0.26, 1.0),
            operator_background: hsla(210.0 / 360.0, 0.35, 0.25, 1.0),
            function_background: hsla(260.0 / 360.0, 0.25, 0.24, 1.0),
            clear_background: hsla(15.0 / 360.0, 0.45, 0.30, 1.0),
            equals_background: hsla(210.0 / 360.0, 0.6, 0.45, 1.0),
            button_text_color: hsla(0.0, 0.0, 0.95, 1.0),
            button_text_size: px(20.0),
            button_radius: px(8.0),

            toggle_background: hsla(0.0, 0.0, 0.14, 1.0),
            toggle_text_color: hsla(0.0, 0.0, 0.8, 1.0),

            padding: px(12.0),
            gap: px(10.0),
        }
    }
}

impl CalculatorTheme {
    /// Background color for a keypad button, by kind.
    pub fn button_color(&self, button: Button) -> Hsla {
        match button {
            Button::Operator(_) => self.operator_background,
            Button::Function(_) | Button::Pi | Button::E => self.function_background,
            Button::Clear | Button::ClearEntry => self.clear_background,
            Button::Equals => self.equals_background,
            Button::Digit(_) | Button::Point => self.button_background,
        }
    }
}

lazy_static! {
    static ref THEME: CalculatorTheme = CalculatorTheme::default();
}

pub fn theme() -> &'static CalculatorTheme {
    &THEME
}
