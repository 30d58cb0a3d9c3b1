//! Shared utility functions used across modules.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::constants::SPINNER_CHARS;

/// Truncate a string to `max_len` characters, appending "..." if truncated.
/// Counts chars, not bytes: the input may be arbitrary UTF-8 (server error
/// messages included) and must never be cut mid-codepoint.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Get the spinner character for the current tick.
pub fn spinner_char(tick: u64) -> &'static str {
    SPINNER_CHARS[(tick % SPINNER_CHARS.len() as u64) as usize]
}

/// Build an OSC 52 escape sequence that asks the terminal to place `text`
/// on the system clipboard. Terminals without OSC 52 support ignore it,
/// which is exactly the silent-failure behavior copy wants.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text))
}

/// Best-effort clipboard copy via OSC 52. Errors are ignored: copy is
/// non-fatal and non-blocking.
pub fn copy_to_clipboard(text: &str) {
    use std::io::Write;
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(osc52_sequence(text).as_bytes());
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_str_short_unchanged() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn truncate_str_adds_ellipsis() {
        assert_eq!(truncate_str("hello world", 8), "hello...");
    }

    #[test]
    fn truncate_str_tiny_max() {
        assert_eq!(truncate_str("abcdef", 2), "ab");
    }

    #[test]
    fn truncate_str_multibyte_server_message() {
        // A long backend error full of em dashes must not split a codepoint.
        let message = format!("{}——— model temporarily offline ———", "x".repeat(116));
        let short = truncate_str(&message, 120);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 120);
    }

    #[test]
    fn truncate_str_counts_chars_not_bytes() {
        assert_eq!(truncate_str("ééééé", 5), "ééééé");
        assert_eq!(truncate_str("éééééé", 5), "éé...");
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_char(0), SPINNER_CHARS[0]);
        assert_eq!(spinner_char(SPINNER_CHARS.len() as u64), SPINNER_CHARS[0]);
        assert_ne!(spinner_char(1), spinner_char(2));
    }

    #[test]
    fn osc52_wraps_base64_payload() {
        let seq = osc52_sequence("hi");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
        assert!(seq.contains("aGk="));
    }
}
