//! Converter warnings with colored terminal output.
//!
//! Per-property and per-rule failures are non-fatal: resolution continues
//! with the remaining input and the skipped piece is reported here instead.
//! Deduplication keeps a malformed selector that matches a hundred elements
//! from producing a hundred identical lines.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed during this process, used to deduplicate.
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about skipped or unsupported input (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "skipping selector 'li:nth-child(2)': unsupported pseudo-class");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let is_new = WARNED.lock().unwrap().insert(key);

    if is_new {
        eprintln!("{YELLOW}[Wyvern {component}] ⚠ {message}{RESET}");
    }
}

/// Number of distinct warnings recorded so far.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn warning_count() -> usize {
    WARNED.lock().unwrap().len()
}

/// Clear all recorded warnings (call between independent conversions).
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_warnings_recorded_once() {
        clear_warnings();
        warn_once("TEST", "same message");
        warn_once("TEST", "same message");
        assert_eq!(warning_count(), 1);

        warn_once("TEST", "other message");
        assert_eq!(warning_count(), 2);
        clear_warnings();
    }
}
