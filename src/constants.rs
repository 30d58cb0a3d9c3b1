//! Application-wide constants.
//!
//! Centralizes magic numbers, user-facing messages, and configuration
//! defaults so they live in one place instead of being scattered around.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Event poll timeout (ms) -- how often the UI checks for input.
pub const EVENT_POLL_MS: u64 = 50;
/// Ticks to wait after a result commits before switching to the results
/// view (lets the layout settle on the commit frame).
pub const RESULT_SETTLE_TICKS: u64 = 2;
/// Default network timeout for all API calls (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Minimum allowed network timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
/// Status message display duration (seconds).
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 4;

// ── API ───────────────────────────────────────────────────────────
/// Default API base URL (local Flask backend).
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

// ── Input Validation ──────────────────────────────────────────────
/// Minimum trimmed text length accepted for analysis.
pub const MIN_TEXT_LEN: usize = 20;
/// Maximum advertised word count (display only, not enforced).
pub const MAX_WORDS_DISPLAY: usize = 10_000;
/// Maximum accepted upload size (bytes), advertised and enforced client-side.
pub const MAX_FILE_BYTES: u64 = 2 * 1024 * 1024;
/// Accepted upload extensions.
pub const ACCEPTED_FILE_EXTENSIONS: &[&str] = &["txt", "csv"];

/// Shown when the text buffer is empty on submit.
pub const MSG_EMPTY_TEXT: &str = "Please enter a news article or headline.";
/// Shown when the trimmed text is below MIN_TEXT_LEN.
pub const MSG_TOO_SHORT: &str = "Input too short — please provide at least 20 characters.";
/// Shown when no file path has been entered on submit.
pub const MSG_NO_FILE: &str = "Please select a file.";
/// Shown when the selected file has a disallowed extension.
pub const MSG_BAD_FILE_TYPE: &str = "Only .txt or .csv files are supported.";
/// Shown when the selected file exceeds MAX_FILE_BYTES.
pub const MSG_FILE_TOO_LARGE: &str = "File exceeds the 2MB limit.";
/// Generic network failure message when the server gives no better one.
pub const MSG_CONNECT_FAILED: &str = "Failed to connect to the server.";

// ── Presentation ──────────────────────────────────────────────────
/// Confidence at or above this is "Very high confidence".
pub const CONFIDENCE_VERY_HIGH: f64 = 90.0;
/// Confidence at or above this is "High confidence".
pub const CONFIDENCE_HIGH: f64 = 75.0;
/// Keyword positions below this index are tier "high".
pub const KEYWORD_TIER_HIGH_END: usize = 3;
/// Keyword positions below this index (and >= high end) are tier "mid".
pub const KEYWORD_TIER_MID_END: usize = 6;
/// Maximum keyword chips rendered in the verdict card.
pub const MAX_KEYWORD_CHIPS: usize = 8;
/// Gauge fill animation step per tick (confidence percentage points).
pub const GAUGE_ANIM_STEP: f64 = 4.0;
/// Best-accuracy figure shown until a metrics snapshot resolves.
pub const DEFAULT_BEST_ACCURACY: &str = "98.4%";

// ── Spinner Animation ─────────────────────────────────────────────
/// Spinner character sequence for loading indicators.
pub const SPINNER_CHARS: &[&str] = &["◐", "◓", "◑", "◒"];

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/veracity/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("veracity")
}

/// Returns `~/.config/veracity/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/veracity/themes/`.
pub fn custom_theme_dir() -> PathBuf {
    config_dir().join("themes")
}

/// Returns `~/.config/veracity/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    custom_theme_dir().join(format!("{}.toml", name))
}
