use std::path::Path;

use crate::components::document::Document;
use crate::components::metrics::{self, TextMetrics};
use crate::components::text_file::load_text_file;
use crate::util::CounterError;

/// Wherever the counts end up being shown
pub trait MetricsDisplay {
    fn display_word_count(&mut self, word_count: usize);

    fn display_char_count(&mut self, char_count: usize);
}

/// Recomputes the counts whenever the text or the options change and pushes them to a
/// [`MetricsDisplay`]. Holds no text of its own.
#[derive(Debug, Default)]
pub struct WordCounter {
    include_spaces: bool,

    // last pushed result, only kept around for logging and tests
    metrics: TextMetrics,
}

impl WordCounter {
    #[cfg(test)]
    pub fn new(include_spaces: bool) -> Self {
        Self {
            include_spaces,
            metrics: TextMetrics::default(),
        }
    }

    pub fn include_spaces(&self) -> bool {
        self.include_spaces
    }

    #[cfg(test)]
    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    pub fn on_text_changed(&mut self, text: &str, display: &mut dyn MetricsDisplay) {
        self.update(text, display);
    }

    pub fn on_option_toggled(
        &mut self,
        include_spaces: bool,
        text: &str,
        display: &mut dyn MetricsDisplay,
    ) {
        log::debug!("include spaces: {include_spaces}");
        self.include_spaces = include_spaces;
        self.update(text, display);
    }

    pub fn on_file_loaded(&mut self, text: &str, display: &mut dyn MetricsDisplay) {
        self.update(text, display);
        log::info!(
            "loaded file with {} words, {} characters",
            self.metrics.word_count,
            self.metrics.char_count
        );
    }

    /// Empty the buffer and zero out the counts
    pub fn new_document(&mut self, document: &mut Document, display: &mut dyn MetricsDisplay) {
        document.clear();
        self.metrics = TextMetrics::default();
        self.push(display);
    }

    /// Load `path` into `document`. If anything goes wrong, neither the buffer nor the counts
    /// are touched.
    pub fn open_file(
        &mut self,
        path: &Path,
        document: &mut Document,
        display: &mut dyn MetricsDisplay,
    ) -> Result<(), CounterError> {
        let content = load_text_file(path)?;

        document.replace(content);
        self.on_file_loaded(document.as_str(), display);

        Ok(())
    }

    fn update(&mut self, text: &str, display: &mut dyn MetricsDisplay) {
        self.metrics = metrics::compute(text, self.include_spaces);
        self.push(display);
    }

    fn push(&self, display: &mut dyn MetricsDisplay) {
        display.display_word_count(self.metrics.word_count);
        display.display_char_count(self.metrics.char_count);
    }
}

#[cfg(test)]
pub(crate) mod test_display {
    use super::MetricsDisplay;

    /// Keeps every value it's given, so tests can check what was pushed and when
    #[derive(Debug, Default)]
    pub struct RecordingDisplay {
        pub word_counts: Vec<usize>,
        pub char_counts: Vec<usize>,
    }

    impl RecordingDisplay {
        pub fn last(&self) -> Option<(usize, usize)> {
            Some((*self.word_counts.last()?, *self.char_counts.last()?))
        }
    }

    impl MetricsDisplay for RecordingDisplay {
        fn display_word_count(&mut self, word_count: usize) {
            self.word_counts.push(word_count);
        }

        fn display_char_count(&mut self, char_count: usize) {
            self.char_counts.push(char_count);
        }
    }
}
