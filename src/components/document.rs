use std::ops::{Deref, Range};

use egui::TextBuffer;

/// The editor buffer. Only the UI thread touches it; everything else gets `&str` snapshots.
#[derive(Debug, Default)]
pub struct Document {
    // underlying text buffer
    text: String,

    // bumped on every change so the UI knows when to recount
    version: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> usize {
        self.version
    }

    /// Swap in entirely new contents (e.g., a freshly loaded file)
    pub fn replace(&mut self, text: String) {
        self.version += 1;
        self.text = text;
    }

    pub fn clear(&mut self) {
        self.version += 1;
        self.text.clear();
    }
}

impl From<String> for Document {
    fn from(text: String) -> Document {
        Document { text, version: 0 }
    }
}

impl Deref for Document {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl TextBuffer for Document {
    fn is_mutable(&self) -> bool {
        true
    }

    fn as_str(&self) -> &str {
        &self.text
    }

    fn insert_text(&mut self, text: &str, char_index: usize) -> usize {
        self.version += 1;
        <String as TextBuffer>::insert_text(&mut self.text, text, char_index)
    }

    fn delete_char_range(&mut self, char_range: Range<usize>) {
        self.version += 1;
        <String as TextBuffer>::delete_char_range(&mut self.text, char_range)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_edits_bump_version() {
        let mut document = Document::new();
        assert_eq!(document.version(), 0);

        document.insert_text("hello world", 0);
        assert_eq!(document.as_str(), "hello world");
        assert_eq!(document.version(), 1);

        // character offsets, not bytes
        document.insert_text("é", 5);
        assert_eq!(document.as_str(), "helloé world");

        document.delete_char_range(5..6);
        assert_eq!(document.as_str(), "hello world");
        assert_eq!(document.version(), 3);
    }

    #[test]
    fn test_replace_and_clear() {
        let mut document = Document::from("old".to_string());
        let start = document.version();

        document.replace("one two three\n".to_string());
        assert_eq!(document.as_str(), "one two three\n");
        assert!(document.version() > start);

        let before_clear = document.version();
        document.clear();
        assert!(document.is_empty());
        assert!(document.version() > before_clear);
    }
}
