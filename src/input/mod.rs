//! Input collection and local validation.
//!
//! Owns the two mutually-exclusive input modes (pasted text vs. file path),
//! the deep-scan toggle, and the validation rules that run before any
//! network call is allowed.

use std::path::Path;

use crate::constants::*;

/// Which input surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    File,
}

/// Buffered user input. Switching modes never clears the other mode's
/// buffer: text typed before switching to File is still there on return.
#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    pub text: String,
    pub file_path: String,
    pub deep_scan: bool,
    /// Inline validation message, cleared on the next edit or submit.
    pub validation_error: Option<String>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Text,
            text: String::new(),
            file_path: String::new(),
            deep_scan: false,
            validation_error: None,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between Text and File input.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            InputMode::Text => InputMode::File,
            InputMode::File => InputMode::Text,
        };
        self.validation_error = None;
    }

    /// Append a character to whichever buffer is active.
    pub fn insert_char(&mut self, c: char) {
        match self.mode {
            InputMode::Text => self.text.push(c),
            InputMode::File => self.file_path.push(c),
        }
        self.validation_error = None;
    }

    /// Remove the last character from the active buffer.
    pub fn backspace(&mut self) {
        match self.mode {
            InputMode::Text => {
                self.text.pop();
            }
            InputMode::File => {
                self.file_path.pop();
            }
        }
        self.validation_error = None;
    }

    /// Clear the active buffer.
    pub fn clear_active(&mut self) {
        match self.mode {
            InputMode::Text => self.text.clear(),
            InputMode::File => self.file_path.clear(),
        }
        self.validation_error = None;
    }

    /// Live word count: whitespace-run split of the trimmed text.
    /// Empty input counts as zero words.
    pub fn word_count(&self) -> usize {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            0
        } else {
            trimmed.split_whitespace().count()
        }
    }

    /// Validate the text buffer for submission. Checked only on a submit
    /// attempt, never while typing.
    pub fn validate_text(&self) -> Result<(), &'static str> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(MSG_EMPTY_TEXT);
        }
        if trimmed.len() < MIN_TEXT_LEN {
            return Err(MSG_TOO_SHORT);
        }
        Ok(())
    }

    /// Validate the file path for submission: something must be entered
    /// and it must carry an accepted extension. Size is checked at read
    /// time, once the file's metadata is available.
    pub fn validate_file(&self) -> Result<(), &'static str> {
        let trimmed = self.file_path.trim();
        if trimmed.is_empty() {
            return Err(MSG_NO_FILE);
        }
        let extension = Path::new(trimmed)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension {
            Some(ext) if ACCEPTED_FILE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(MSG_BAD_FILE_TYPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_rejected() {
        let input = InputState::new();
        assert_eq!(input.validate_text(), Err(MSG_EMPTY_TEXT));
    }

    #[test]
    fn whitespace_only_text_rejected_as_empty() {
        let mut input = InputState::new();
        input.text = "   \n\t  ".to_string();
        assert_eq!(input.validate_text(), Err(MSG_EMPTY_TEXT));
    }

    #[test]
    fn short_text_rejected() {
        let mut input = InputState::new();
        for len in 1..MIN_TEXT_LEN {
            input.text = "x".repeat(len);
            assert_eq!(input.validate_text(), Err(MSG_TOO_SHORT), "len {}", len);
        }
    }

    #[test]
    fn short_text_trimmed_before_length_check() {
        let mut input = InputState::new();
        // 19 chars of payload padded with whitespace: still too short.
        input.text = format!("   {}   ", "y".repeat(19));
        assert_eq!(input.validate_text(), Err(MSG_TOO_SHORT));
    }

    #[test]
    fn twenty_chars_accepted() {
        let mut input = InputState::new();
        input.text = "z".repeat(MIN_TEXT_LEN);
        assert!(input.validate_text().is_ok());
    }

    #[test]
    fn word_count_empty_is_zero() {
        let mut input = InputState::new();
        assert_eq!(input.word_count(), 0);
        input.text = "   ".to_string();
        assert_eq!(input.word_count(), 0);
    }

    #[test]
    fn word_count_splits_on_whitespace_runs() {
        let mut input = InputState::new();
        input.text = "  breaking   news\ttonight \n official ".to_string();
        assert_eq!(input.word_count(), 4);
    }

    #[test]
    fn mode_switch_preserves_both_buffers() {
        let mut input = InputState::new();
        input.text = "draft headline text".to_string();
        input.toggle_mode();
        assert_eq!(input.mode, InputMode::File);
        input.file_path = "article.txt".to_string();
        input.toggle_mode();
        assert_eq!(input.mode, InputMode::Text);
        assert_eq!(input.text, "draft headline text");
        assert_eq!(input.file_path, "article.txt");
    }

    #[test]
    fn file_validation_requires_path() {
        let mut input = InputState::new();
        input.mode = InputMode::File;
        assert_eq!(input.validate_file(), Err(MSG_NO_FILE));
    }

    #[test]
    fn file_validation_checks_extension() {
        let mut input = InputState::new();
        input.file_path = "notes.pdf".to_string();
        assert_eq!(input.validate_file(), Err(MSG_BAD_FILE_TYPE));
        input.file_path = "story.TXT".to_string();
        assert!(input.validate_file().is_ok());
        input.file_path = "rows.csv".to_string();
        assert!(input.validate_file().is_ok());
    }

    #[test]
    fn editing_clears_validation_error() {
        let mut input = InputState::new();
        input.validation_error = Some(MSG_EMPTY_TEXT.to_string());
        input.insert_char('a');
        assert!(input.validation_error.is_none());
    }
}
