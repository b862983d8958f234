pub mod calculator;
pub mod keypad;
pub mod theme;

pub use calculator::CalculatorView;
pub use theme::{CalculatorTheme, theme};

use gpui::{
    App, Application, Bounds, Focusable, TitlebarOptions, WindowBounds, WindowOptions, prelude::*,
    px, size,
};
use tracing::{error, info};

use crate::config::Config;
use crate::layout::Mode;

pub const WINDOW_TITLE: &str = "Advanced Scientific Calculator";

/// Open the calculator window and run the GPUI event loop until it closes.
pub fn run(config: &Config, mode: Mode) -> anyhow::Result<()> {
    let (width, height) = config.window.size();

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(WINDOW_TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| CalculatorView::new(mode, cx));
            window.focus(&view.focus_handle(cx));
            view
        });

        match opened {
            Ok(_) => {
                info!(mode = mode.label(), "calculator window opened");
                cx.on_window_closed(|cx| cx.quit()).detach();
                cx.activate(true);
            }
            Err(err) => {
                error!("Failed to open calculator window: {err:?}");
                cx.quit();
            }
        }
    });

    Ok(())
}
