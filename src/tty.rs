//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection and user prompting.

use std::io::{self, BufRead, IsTerminal, Write};

use themeboy::prompt::Prompt;

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn prompt(message: &str) -> themeboy::Result<String> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line).map_err(|e| {
        themeboy::Error::internal_io(
            format!("Failed to read input: {}", e),
            Some("prompt".to_string()),
        )
    })?;

    Ok(line.trim().to_string())
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}

/// Interactive prompt backed by the controlling terminal.
///
/// Refuses to ask when stdin is not a TTY: a scripted run that hits a
/// file conflict should fail loudly instead of blocking on input that
/// will never arrive.
pub struct TtyPrompt;

impl Prompt for TtyPrompt {
    fn ask(&mut self, question: &str) -> themeboy::Result<String> {
        if !is_stdin_tty() {
            return Err(themeboy::Error::prompt_not_interactive(question));
        }
        prompt(question)
    }

    fn warn(&mut self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    fn log(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
