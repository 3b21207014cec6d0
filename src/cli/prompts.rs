//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use crossterm::style::Stylize;

use crate::terminal::format_number;

/// Warning to stderr (yellow). Suppressed in quiet mode.
pub fn warn(quiet: bool, msg: &str) {
    if !quiet {
        eprintln!("{}", msg.yellow());
    }
}

/// Error to stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// True when stdin is a terminal.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

pub fn clipboard_copied(quiet: bool, count: usize) {
    if !quiet {
        println!("*** -COPIED {} PASSWORD(S) TO CLIPBOARD- ***", format_number(count));
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Returns true to fall back to the terminal. Without a terminal, or in
/// quiet mode, falls back silently.
pub fn clipboard_fallback_prompt(quiet: bool) -> bool {
    if quiet || !is_interactive() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(quiet: bool, count: usize, path: &Path) {
    if !quiet {
        let full_path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        println!("{} password(s) \u{2192} {}", format_number(count), full_path.display());
    }
}

pub fn settings_saved(quiet: bool, path: &Path) {
    if !quiet {
        println!("Settings saved \u{2192} {}", path.display());
    }
}

pub fn settings_reset(quiet: bool, path: &Path) {
    if !quiet {
        println!("Settings reset to defaults \u{2192} {}", path.display());
    }
}
