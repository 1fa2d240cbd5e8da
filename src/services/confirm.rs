use std::io::{self, BufRead, Write};

use crate::models::ClickOutcome;

/// The blocking yes/no prompt a confirm-gated click waits on. Injected so
/// callers can swap the interactive prompt for a scripted decision in tests
/// and in non-interactive runs.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Interactive prompt on stdin/stdout. Accepts `y`/`yes` (any case);
/// anything else, including EOF, counts as a refusal.
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

/// Fixed-answer prompt for tests and `--assume-yes` runs.
pub struct StaticPrompt(pub bool);

impl ConfirmPrompt for StaticPrompt {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

/// Gate a click behind the prompt: affirm lets the default action proceed,
/// deny suppresses it entirely.
pub fn gate_click(prompt: &mut dyn ConfirmPrompt, message: &str) -> ClickOutcome {
    if prompt.confirm(message) {
        ClickOutcome::Proceed
    } else {
        ClickOutcome::Suppressed
    }
}
