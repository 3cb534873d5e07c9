use egui::{Response, Widget};

use crate::components::Document;

/// Plain multiline editor over a [`Document`]
pub struct BaseTextEditor<'a> {
    document: &'a mut Document,
}

impl Widget for BaseTextEditor<'_> {
    fn ui(self, ui: &mut egui::Ui) -> Response {
        ui.add(
            egui::TextEdit::multiline(self.document)
                .desired_width(f32::INFINITY)
                .min_size(egui::Vec2 { x: 50.0, y: 100.0 })
                .lock_focus(true)
                .id_salt("document"),
        )
    }
}

impl<'a> BaseTextEditor<'a> {
    pub fn new(document: &'a mut Document) -> Self {
        Self { document }
    }
}
