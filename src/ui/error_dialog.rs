use egui::{Id, Modal, RichText};

use crate::util::CounterError;

/// A blocking "Error" popup. Nothing behind it can be clicked until it's dismissed.
#[derive(Debug)]
pub struct ErrorDialog {
    message: String,
}

impl ErrorDialog {
    pub fn new(err: &CounterError) -> Self {
        Self {
            message: err.user_message(),
        }
    }

    /// Returns true once the user has dismissed the dialog
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;

        let response = Modal::new(Id::new("error dialog")).show(ctx, |ui| {
            ui.set_max_width(320.0);

            ui.heading("Error");
            ui.add_space(8.0);
            ui.label(RichText::new(&self.message));
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        dismissed || response.should_close()
    }
}
