//! Line-based terminal front end.
//!
//! Each input line is a list of button labels separated by spaces, e.g.
//! `sin 9 0 =`. Lines starting with `:` are commands.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::calculator::copy_to_clipboard;
use crate::controller::{Button, CalcState, reduce};
use crate::layout::{Keypad, Mode};

const HELP: &str = "\
Enter button labels separated by spaces, e.g. `2 + 3 =` or `sin 9 0 =`.
Commands:
  :mode   switch between standard and scientific keypads
  :keys   show the current keypad
  :copy   copy the display to the clipboard
  :help   show this help
  :quit   exit";

/// Interactive session state: calculator state plus the shown keypad.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: CalcState,
    pub keypad: Keypad,
}

/// What the session wants after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            state: CalcState::new(),
            keypad: Keypad::new(mode),
        }
    }

    /// The display line printed after each input.
    pub fn status_line(&self) -> String {
        match self.state.pending {
            Some(func) => format!("[{func}] {}", self.state.display),
            None => format!("[ ] {}", self.state.display),
        }
    }

    /// Press a single button.
    pub fn press(&mut self, button: Button) {
        debug!(%button, "button pressed");
        self.state = reduce(std::mem::take(&mut self.state), button);
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command.trim());
        }

        for label in line.split_whitespace() {
            match label.parse::<Button>() {
                Ok(button) => self.press(button),
                Err(err) => return Outcome::Continue(format!("{err}\n{}", self.status_line())),
            }
        }

        Outcome::Continue(self.status_line())
    }

    fn handle_command(&mut self, command: &str) -> Outcome {
        match command {
            "q" | "quit" | "exit" => Outcome::Quit,
            "mode" => {
                self.keypad.toggle();
                Outcome::Continue(self.keypad.mode.status_text())
            }
            "keys" => Outcome::Continue(self.keypad.render_text()),
            "copy" => match copy_to_clipboard(&self.state.display) {
                Ok(()) => Outcome::Continue(format!("copied {}", self.state.display)),
                Err(err) => {
                    warn!("{err}");
                    Outcome::Continue(err.to_string())
                }
            },
            "help" | "h" => Outcome::Continue(HELP.to_string()),
            other => Outcome::Continue(format!("unknown command :{other}, try :help")),
        }
    }
}

/// Run the interactive loop until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, mode: Mode) -> Result<()> {
    let mut session = Session::new(mode);

    writeln!(output, "{}", session.keypad.mode.status_text())?;
    writeln!(output, "{}", session.keypad.render_text())?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match session.handle_line(&line) {
            Outcome::Continue(text) => writeln!(output, "{text}")?,
            Outcome::Quit => break,
        }
    }

    output.flush().context("Failed to flush output")
}
