//! Console logging for the teevi CLI.
//!
//! User-facing messages carry the cyan `teevi` prefix; errors go to stderr.
//! Verbosity and quiet flags are process-global so command handlers and
//! library callbacks do not have to thread logger state through every call.

use colored::Colorize;
use std::sync::Mutex;

static VERBOSITY: Mutex<u8> = Mutex::new(0);
static QUIET: Mutex<bool> = Mutex::new(false);

/// Initialize the logger from the CLI's global options.
/// Verbosity: 0 = normal, 1 = debug (-v), 2+ = trace (-vv).
pub fn init_with_verbosity(verbosity: u8, quiet: bool) {
    if let Ok(mut v) = VERBOSITY.lock() {
        *v = verbosity;
    }
    if let Ok(mut q) = QUIET.lock() {
        *q = quiet;
    }
}

/// Get the current verbosity level for use by other modules.
pub fn get_verbosity() -> u8 {
    VERBOSITY.lock().ok().map(|v| *v).unwrap_or(0)
}

/// Get whether normal output is suppressed.
pub fn get_quiet() -> bool {
    QUIET.lock().ok().map(|q| *q).unwrap_or(false)
}

/// Log a user-facing progress message.
pub fn info(message: &str) {
    if !get_quiet() {
        println!("{} {}", "teevi".cyan(), message);
    }
}

/// Log a user-facing success message.
pub fn success(message: &str) {
    if !get_quiet() {
        println!("{} {}", "teevi".cyan(), message.green());
    }
}

/// Log a warning (shown even under --quiet).
pub fn warn(message: &str) {
    eprintln!("{} {}", "teevi".cyan(), message.yellow());
}

/// Log an error (shown even under --quiet).
pub fn error(message: &str) {
    eprintln!("{} {}", "teevi".cyan(), message.red());
}

/// Log a debug message (shown with -v).
pub fn debug(message: &str) {
    if get_verbosity() >= 1 {
        eprintln!("{} {}", "debug:".blue().bold(), message);
    }
}
