//! Keypad rendering.
//!
//! Each cell of the current layout becomes a clickable button; spacer
//! cells keep the grid aligned.

use gpui::{AnyElement, Div, ElementId, SharedString, Stateful, div, prelude::*};

use crate::controller::Button;
use crate::layout::Keypad;
use crate::ui::theme::theme;

/// Render the keypad grid. `on_press` builds the click handler for a button.
pub fn render_keypad<F, H>(keypad: &Keypad, mut on_press: F) -> Div
where
    F: FnMut(Button) -> H,
    H: Fn(&gpui::ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
{
    let t = theme();

    let rows = keypad.rows().into_iter().enumerate().map(|(row_idx, row)| {
        let cells = row.into_iter().enumerate().map(|(col_idx, cell)| match cell {
            Some(button) => {
                let index = row_idx * crate::layout::COLUMNS + col_idx;
                render_button(button, index)
                    .on_click(on_press(button))
                    .into_any_element()
            }
            None => render_spacer(),
        });

        div()
            .w_full()
            .flex_1()
            .flex()
            .flex_row()
            .gap(t.gap)
            .children(cells.collect::<Vec<_>>())
    });

    div()
        .w_full()
        .flex_1()
        .flex()
        .flex_col()
        .gap(t.gap)
        .children(rows.collect::<Vec<_>>())
}

/// A single keypad button.
fn render_button(button: Button, index: usize) -> Stateful<Div> {
    let t = theme();
    let hover_bg = t.button_background_hover;

    div()
        .id(ElementId::NamedInteger("calc-button".into(), index as u64))
        .flex_1()
        .h_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(t.button_color(button))
        .hover(move |style| style.bg(hover_bg))
        .rounded(t.button_radius)
        .cursor_pointer()
        .text_size(t.button_text_size)
        .font_weight(gpui::FontWeight::BOLD)
        .text_color(t.button_text_color)
        .child(SharedString::from(button.label()))
}

fn render_spacer() -> AnyElement {
    div().flex_1().h_full().into_any_element()
}
