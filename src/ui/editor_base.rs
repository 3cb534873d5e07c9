use std::path::{Path, PathBuf};

use egui::{FontFamily, FontId, Key, KeyboardShortcut, Modifiers, ScrollArea, TextStyle};

use crate::components::{Document, WordCounter};
use crate::ui::{
    BaseTextEditor, BrowserOutcome, CountLabels, ErrorDialog, FileBrowser, Settings,
};
use crate::util::{CounterError, ErrorKind};

const NEW_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);

pub struct WordCounterApp {
    document: Document,
    counter: WordCounter,
    labels: CountLabels,

    // document version the labels were last computed for
    counted_version: usize,

    file_browser: Option<FileBrowser>,
    error_dialog: Option<ErrorDialog>,

    settings: Settings,
    settings_path: Option<PathBuf>,
}

impl eframe::App for WordCounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.error_dialog.is_none() {
            self.handle_shortcuts(ctx);
            self.handle_dropped_files(ctx);
        }

        self.panels(ctx);

        if let Some(file_browser) = self.file_browser.as_mut() {
            match file_browser.ui(ctx) {
                Some(BrowserOutcome::Open(path)) => {
                    self.settings
                        .set_show_all_files(file_browser.show_all_files());
                    self.file_browser = None;
                    self.open_path(&path);
                }
                Some(BrowserOutcome::Cancel) => {
                    self.settings
                        .set_show_all_files(file_browser.show_all_files());
                    self.file_browser = None;
                }
                None => {}
            }
        }

        if let Some(error_dialog) = &self.error_dialog
            && error_dialog.show(ctx)
        {
            self.error_dialog = None;
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_settings();
    }
}

fn configure_text_styles(ctx: &egui::Context, font_size: f32) {
    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(font_size, FontFamily::Proportional));
    });
}

impl WordCounterApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        configure_text_styles(&cc.egui_ctx, settings.font_size());

        Self {
            document: Document::new(),
            counter: WordCounter::default(),
            labels: CountLabels::default(),
            counted_version: 0,
            file_browser: None,
            error_dialog: None,
            settings,
            settings_path,
        }
    }

    pub fn panels(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| self.menu_ui(ui));
        });

        egui::TopBottomPanel::bottom("counts").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.labels.ui(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut include_spaces = self.counter.include_spaces();
                    if ui.checkbox(&mut include_spaces, "Include Spaces").changed() {
                        self.counter.on_option_toggled(
                            include_spaces,
                            self.document.as_str(),
                            &mut self.labels,
                        );
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("text")
                .auto_shrink(egui::Vec2b { x: false, y: false })
                .show(ui, |ui| {
                    ui.add_sized(ui.available_size(), BaseTextEditor::new(&mut self.document));
                });
        });

        // Typing, pasting and deleting all go through the document, so one check covers them
        if self.document.version() != self.counted_version {
            self.counted_version = self.document.version();
            self.counter
                .on_text_changed(self.document.as_str(), &mut self.labels);
        }
    }

    fn menu_ui(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("File", |ui| {
            if ui
                .add(egui::Button::new("New").shortcut_text(ui.ctx().format_shortcut(&NEW_SHORTCUT)))
                .clicked()
            {
                self.new_document();
                ui.close_menu();
            }
            if ui
                .add(
                    egui::Button::new("Open…")
                        .shortcut_text(ui.ctx().format_shortcut(&OPEN_SHORTCUT)),
                )
                .clicked()
            {
                self.show_open_dialog();
                ui.close_menu();
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&NEW_SHORTCUT)) {
            self.new_document();
        } else if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            self.show_open_dialog();
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Option<PathBuf> =
            ctx.input(|i| i.raw.dropped_files.iter().find_map(|file| file.path.clone()));

        if let Some(path) = dropped {
            log::debug!("file dropped: {path:?}");
            self.open_path(&path);
        }
    }

    fn new_document(&mut self) {
        log::debug!("new document");
        self.counter
            .new_document(&mut self.document, &mut self.labels);
        self.counted_version = self.document.version();
    }

    fn show_open_dialog(&mut self) {
        let start_dir = self
            .settings
            .last_directory()
            .filter(|dir| dir.is_dir())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        self.file_browser = Some(FileBrowser::new(
            start_dir,
            self.settings.show_all_files(),
        ));
    }

    /// Open `path` into the editor, or show an error dialog explaining why it couldn't be
    fn open_path(&mut self, path: &Path) {
        match self.try_open(path) {
            Ok(()) => {
                if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    self.settings.set_last_directory(dir);
                }
            }
            Err(err) => {
                match err.kind() {
                    ErrorKind::InvalidFileType => log::warn!("could not open {path:?}: {err}"),
                    _ => log::error!("could not open {path:?}: {err}"),
                }
                self.error_dialog = Some(ErrorDialog::new(&err));
            }
        }
    }

    fn try_open(&mut self, path: &Path) -> Result<(), CounterError> {
        self.counter
            .open_file(path, &mut self.document, &mut self.labels)?;
        self.counted_version = self.document.version();
        Ok(())
    }

    fn save_settings(&self) {
        let Some(settings_path) = self.settings_path.as_deref() else {
            return;
        };

        if !self.settings.modified() {
            return;
        }

        if let Err(err) = self.settings.save_to_file(settings_path) {
            log::error!("failed to save settings to {settings_path:?}: {err}");
        }
    }
}
