use crate::components::MetricsDisplay;

/// The "Words: N" / "Characters: N" labels at the bottom of the window
#[derive(Debug, Default)]
pub struct CountLabels {
    word_count: usize,
    char_count: usize,
}

impl MetricsDisplay for CountLabels {
    fn display_word_count(&mut self, word_count: usize) {
        self.word_count = word_count;
    }

    fn display_char_count(&mut self, char_count: usize) {
        self.char_count = char_count;
    }
}

impl CountLabels {
    pub fn word_text(&self) -> String {
        format!("Words: {}", self.word_count)
    }

    pub fn char_text(&self) -> String {
        format!("Characters: {}", self.char_count)
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.label(self.word_text());
            ui.label(self.char_text());
        });
    }
}

#[test]
fn test_label_text() {
    let mut labels = CountLabels::default();
    assert_eq!(labels.word_text(), "Words: 0");
    assert_eq!(labels.char_text(), "Characters: 0");

    labels.display_word_count(3);
    labels.display_char_count(11);
    assert_eq!(labels.word_text(), "Words: 3");
    assert_eq!(labels.char_text(), "Characters: 11");
}
