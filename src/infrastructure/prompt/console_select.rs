//! Terminal single-choice prompt built on `console::Term`.

use std::io;

use console::{style, Key, Term};
use tracing::{debug, warn};

use crate::domain::ports::TypePrompt;

/// Result of feeding one key press into a [`SelectState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Pending,
    Selected(usize),
    Cancelled,
}

/// Cursor state of a single-choice menu, independent of any terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectState {
    cursor: usize,
    len: usize,
}

impl SelectState {
    pub const fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle(&mut self, key: &Key) -> KeyOutcome {
        if self.len == 0 {
            return KeyOutcome::Cancelled;
        }

        match key {
            Key::ArrowUp | Key::BackTab | Key::Char('k') => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(self.len - 1);
                KeyOutcome::Pending
            }
            Key::ArrowDown | Key::Tab | Key::Char('j') => {
                self.cursor = (self.cursor + 1) % self.len;
                KeyOutcome::Pending
            }
            Key::Enter | Key::Char(' ') => KeyOutcome::Selected(self.cursor),
            Key::Escape | Key::Char('q') => KeyOutcome::Cancelled,
            Key::Char(c) => match c.to_digit(10).map(|digit| digit as usize) {
                Some(digit) if (1..=self.len).contains(&digit) => {
                    self.cursor = digit - 1;
                    KeyOutcome::Selected(self.cursor)
                }
                _ => KeyOutcome::Pending,
            },
            _ => KeyOutcome::Pending,
        }
    }
}

/// Arrow-key menu drawn on stderr.
pub struct ConsoleSelect {
    term: Term,
}

impl ConsoleSelect {
    pub fn new() -> Self {
        Self::with_term(Term::stderr())
    }

    pub const fn with_term(term: Term) -> Self {
        Self { term }
    }

    fn interact(&self, message: &str, options: &[&str]) -> io::Result<Option<usize>> {
        let mut state = SelectState::new(options.len());
        self.term.hide_cursor()?;

        let outcome = self.run_menu(message, options, &mut state);

        self.term.show_cursor()?;
        let choice = outcome?;

        let summary = match choice {
            Some(index) => format!(
                "{} {} {}",
                style("?").green().bold(),
                style(message).bold(),
                style(options[index]).cyan()
            ),
            None => format!(
                "{} {} {}",
                style("?").yellow().bold(),
                style(message).bold(),
                style("(skipped)").dim()
            ),
        };
        self.term.write_line(&summary)?;
        Ok(choice)
    }

    fn run_menu(
        &self,
        message: &str,
        options: &[&str],
        state: &mut SelectState,
    ) -> io::Result<Option<usize>> {
        let lines = self.draw(message, options, state.cursor())?;
        loop {
            let key = self.term.read_key()?;
            let outcome = state.handle(&key);
            self.term.clear_last_lines(lines)?;
            match outcome {
                KeyOutcome::Pending => {
                    self.draw(message, options, state.cursor())?;
                }
                KeyOutcome::Selected(index) => return Ok(Some(index)),
                KeyOutcome::Cancelled => return Ok(None),
            }
        }
    }

    fn draw(&self, message: &str, options: &[&str], cursor: usize) -> io::Result<usize> {
        self.term.write_line(&format!(
            "{} {} {}",
            style("?").yellow().bold(),
            style(message).bold(),
            style("[↑/↓ to move, enter to select, esc to skip]").dim()
        ))?;
        for (index, option) in options.iter().enumerate() {
            let line = if index == cursor {
                format!("{} {}", style(">").cyan().bold(), style(option).cyan())
            } else {
                format!("  {option}")
            };
            self.term.write_line(&line)?;
        }
        Ok(options.len() + 1)
    }
}

impl Default for ConsoleSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl TypePrompt for ConsoleSelect {
    fn select_one(&mut self, message: &str, options: &[&str]) -> Option<String> {
        if options.is_empty() {
            return None;
        }

        if !self.term.is_term() {
            warn!(prompt = message, "Not attached to a terminal, leaving value unset");
            return None;
        }

        match self.interact(message, options) {
            Ok(Some(index)) => {
                debug!(prompt = message, selected = options[index], "Prompt answered");
                Some(options[index].to_string())
            }
            Ok(None) => {
                warn!(prompt = message, "Prompt cancelled, leaving value unset");
                None
            }
            Err(err) => {
                warn!(prompt = message, error = %err, "Prompt aborted, leaving value unset");
                None
            }
        }
    }
}
