//! The calculator window view.
//!
//! Holds the calculator state and the shown keypad. Clicks and key presses
//! are turned into [`Button`]s and fed through the reducer.

use gpui::{
    App, ClickEvent, Context, Div, FocusHandle, Focusable, KeyDownEvent, SharedString, Stateful,
    Window, div, prelude::*,
};
use tracing::{debug, warn};

use crate::calculator::copy_to_clipboard;
use crate::controller::{Button, CalcState, reduce};
use crate::layout::{Keypad, Mode};
use crate::ui::keypad::render_keypad;
use crate::ui::theme::theme;

pub struct CalculatorView {
    state: CalcState,
    keypad: Keypad,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(mode: Mode, cx: &mut Context<Self>) -> Self {
        Self {
            state: CalcState::new(),
            keypad: Keypad::new(mode),
            focus_handle: cx.focus_handle(),
        }
    }

    fn press(&mut self, button: Button, cx: &mut Context<Self>) {
        debug!(%button, "button pressed");
        self.state = reduce(std::mem::take(&mut self.state), button);
        cx.notify();
    }

    fn toggle_mode(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.keypad.toggle();
        cx.notify();
    }

    fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;

        if keystroke.modifiers.control || keystroke.modifiers.platform {
            if keystroke.key == "c"
                && let Err(err) = copy_to_clipboard(&self.state.display)
            {
                warn!("{err}");
            }
            return;
        }

        if let Some(button) = Button::from_key(&keystroke.key, keystroke.key_char.as_deref()) {
            self.press(button, cx);
            cx.stop_propagation();
        }
    }

    fn render_mode_label(&self) -> Div {
        let t = theme();

        div()
            .w_full()
            .flex()
            .justify_center()
            .text_size(t.mode_label_size)
            .font_weight(gpui::FontWeight::BOLD)
            .text_color(t.mode_label_color)
            .child(SharedString::from(self.keypad.mode.status_text()))
    }

    fn render_display(&self) -> Div {
        let t = theme();

        let color = if self.state.is_error() {
            t.display_error_color
        } else if self.state.is_function_pending() {
            t.display_pending_color
        } else {
            t.display_color
        };

        div()
            .w_full()
            .h(t.display_height)
            .flex_shrink_0()
            .px(t.padding)
            .flex()
            .items_center()
            .justify_end()
            .bg(t.display_background)
            .rounded(t.button_radius)
            .overflow_hidden()
            .whitespace_nowrap()
            .text_size(t.display_text_size)
            .text_color(color)
            .child(SharedString::from(self.state.display.clone()))
    }

    fn render_toggle(&self, cx: &mut Context<Self>) -> Stateful<Div> {
        let t = theme();
        let hover_bg = t.button_background_hover;

        div()
            .id("mode-toggle")
            .w_full()
            .py(t.padding)
            .flex()
            .justify_center()
            .bg(t.toggle_background)
            .hover(move |style| style.bg(hover_bg))
            .rounded(t.button_radius)
            .cursor_pointer()
            .text_color(t.toggle_text_color)
            .child(SharedString::from(self.keypad.mode.toggle_text()))
            .on_click(cx.listener(Self::toggle_mode))
    }
}

impl Focusable for CalculatorView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        let keypad = render_keypad(&self.keypad, |button| {
            cx.listener(move |this: &mut Self, _: &ClickEvent, _window, cx| {
                this.press(button, cx);
            })
        });

        div()
            .id("calculator")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .size_full()
            .p(t.padding)
            .flex()
            .flex_col()
            .gap(t.gap)
            .bg(t.background)
            .child(self.render_mode_label())
            .child(self.render_display())
            .child(keypad)
            .child(self.render_toggle(cx))
    }
}
