mod base_text_editor;
mod count_labels;
mod editor_base;
mod error_dialog;
mod file_browser;
mod settings;

pub use base_text_editor::BaseTextEditor;
pub use count_labels::CountLabels;
pub use editor_base::WordCounterApp;
pub use error_dialog::ErrorDialog;
pub use file_browser::{BrowserOutcome, FileBrowser};
pub use settings::Settings;
