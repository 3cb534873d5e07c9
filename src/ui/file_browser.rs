use std::path::{Path, PathBuf};

use egui::{Color32, RichText};

use crate::components::text_file::is_txt_path;
use crate::util::CounterError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

/// What the user did with the dialog this frame
#[derive(Debug, PartialEq, Eq)]
pub enum BrowserOutcome {
    Open(PathBuf),
    Cancel,
}

/// In-app "open file" window. Lists `.txt` files (and directories) unless told to show
/// everything; the caller still validates whatever path comes out of it.
#[derive(Debug)]
pub struct FileBrowser {
    current_dir: PathBuf,
    entries: Vec<BrowserEntry>,
    selected: Option<usize>,
    show_all_files: bool,
    path_input: String,
    read_error: Option<String>,
}

impl FileBrowser {
    pub fn new(start_dir: PathBuf, show_all_files: bool) -> Self {
        let mut browser = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            selected: None,
            show_all_files,
            path_input: String::new(),
            read_error: None,
        };
        browser.refresh();
        browser
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[BrowserEntry] {
        &self.entries
    }

    pub fn show_all_files(&self) -> bool {
        self.show_all_files
    }

    pub fn set_show_all_files(&mut self, show_all_files: bool) {
        self.show_all_files = show_all_files;
        self.refresh();
    }

    pub fn navigate_to(&mut self, dir: PathBuf) {
        self.current_dir = dir;
        self.refresh();
    }

    pub fn navigate_up(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            let parent = parent.to_path_buf();
            self.navigate_to(parent);
        }
    }

    /// Re-read the current directory
    pub fn refresh(&mut self) {
        self.selected = None;
        match read_entries(&self.current_dir, self.show_all_files) {
            Ok(entries) => {
                self.entries = entries;
                self.read_error = None;
            }
            Err(err) => {
                log::warn!("could not list {:?}: {err}", self.current_dir);
                self.entries.clear();
                self.read_error = Some(err.to_string());
            }
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<BrowserOutcome> {
        let mut outcome = None;
        let mut open = true;

        egui::Window::new("Open Text File")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Up").clicked() {
                        self.navigate_up();
                    }
                    ui.label(self.current_dir().to_string_lossy().to_string());
                });

                ui.separator();

                let mut navigate = None;

                egui::ScrollArea::vertical()
                    .max_height(220.0)
                    .auto_shrink(egui::Vec2b { x: false, y: true })
                    .show(ui, |ui| {
                        for (idx, entry) in self.entries.iter().enumerate() {
                            let label = if entry.is_directory {
                                format!("{}/", entry.name)
                            } else {
                                entry.name.clone()
                            };

                            let response =
                                ui.selectable_label(self.selected == Some(idx), label);

                            if response.clicked() {
                                self.selected = Some(idx);
                                if !entry.is_directory {
                                    self.path_input = entry.path.to_string_lossy().to_string();
                                }
                            }
                            if response.double_clicked() {
                                if entry.is_directory {
                                    navigate = Some(entry.path.clone());
                                } else {
                                    outcome = Some(BrowserOutcome::Open(entry.path.clone()));
                                }
                            }
                        }
                    });

                if let Some(dir) = navigate {
                    self.navigate_to(dir);
                }

                if let Some(err) = &self.read_error {
                    ui.label(RichText::new(err).color(Color32::RED));
                }

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("File:");
                    ui.text_edit_singleline(&mut self.path_input);
                });

                let mut show_all_files = self.show_all_files;
                if ui
                    .checkbox(&mut show_all_files, "Show all files")
                    .on_hover_text("Text Files (*.txt) only when unchecked")
                    .changed()
                {
                    self.set_show_all_files(show_all_files);
                }

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        outcome = Some(BrowserOutcome::Cancel);
                    }
                    if ui.button("Open").clicked()
                        && let Some(path) = self.chosen_path()
                    {
                        if path.is_dir() {
                            self.navigate_to(path);
                        } else {
                            outcome = Some(BrowserOutcome::Open(path));
                        }
                    }
                });
            });

        if !open {
            outcome = Some(BrowserOutcome::Cancel);
        }

        outcome
    }

    /// The typed path, resolved against the current directory if it's relative
    fn chosen_path(&self) -> Option<PathBuf> {
        let typed = self.path_input.trim();
        if !typed.is_empty() {
            return Some(self.current_dir.join(typed));
        }

        self.selected
            .and_then(|idx| self.entries.get(idx))
            .map(|entry| entry.path.clone())
    }
}

/// Directories first, then files, each sorted by name. Hidden entries are skipped.
fn read_entries(dir: &Path, show_all_files: bool) -> Result<Vec<BrowserEntry>, CounterError> {
    let mut entries = Vec::new();

    for dir_entry in std::fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let path = dir_entry.path();
        let is_directory = path.is_dir();

        if !is_directory && !show_all_files && !is_txt_path(&path) {
            continue;
        }

        entries.push(BrowserEntry {
            name,
            path,
            is_directory,
        });
    }

    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    Ok(entries)
}

#[cfg(test)]
mod test {
    use super::*;

    fn setup() -> tempfile::TempDir {
        let base_dir = tempfile::TempDir::new().unwrap();
        let base = base_dir.path();

        std::fs::write(base.join("b.txt"), "b").unwrap();
        std::fs::write(base.join("A.TXT"), "a").unwrap();
        std::fs::write(base.join("notes.md"), "md").unwrap();
        std::fs::write(base.join(".hidden.txt"), "hidden").unwrap();
        std::fs::create_dir(base.join("zdir")).unwrap();
        std::fs::create_dir(base.join("adir")).unwrap();
        std::fs::write(base.join("adir").join("inner.txt"), "inner").unwrap();

        base_dir
    }

    fn names(browser: &FileBrowser) -> Vec<&str> {
        browser
            .entries()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    #[test]
    fn test_filters_to_text_files() {
        let base_dir = setup();
        let browser = FileBrowser::new(base_dir.path().to_path_buf(), false);

        assert_eq!(names(&browser), vec!["adir", "zdir", "A.TXT", "b.txt"]);
    }

    #[test]
    fn test_show_all_files() {
        let base_dir = setup();
        let mut browser = FileBrowser::new(base_dir.path().to_path_buf(), false);

        browser.set_show_all_files(true);
        assert!(browser.show_all_files());
        assert_eq!(
            names(&browser),
            vec!["adir", "zdir", "A.TXT", "b.txt", "notes.md"]
        );
    }

    #[test]
    fn test_navigation() {
        let base_dir = setup();
        let mut browser = FileBrowser::new(base_dir.path().to_path_buf(), false);

        browser.navigate_to(base_dir.path().join("adir"));
        assert_eq!(names(&browser), vec!["inner.txt"]);

        browser.navigate_up();
        assert_eq!(browser.current_dir(), base_dir.path());
        assert_eq!(browser.entries().len(), 4);
    }

    #[test]
    fn test_missing_directory() {
        let base_dir = setup();
        let browser = FileBrowser::new(base_dir.path().join("gone"), true);

        assert!(browser.entries().is_empty());
        assert!(browser.read_error.is_some());
    }

    #[test]
    fn test_chosen_path() {
        let base_dir = setup();
        let mut browser = FileBrowser::new(base_dir.path().to_path_buf(), false);
        assert_eq!(browser.chosen_path(), None);

        browser.selected = Some(3);
        assert_eq!(browser.chosen_path(), Some(base_dir.path().join("b.txt")));

        // typed paths win over the selection
        browser.path_input = "adir/inner.txt".to_string();
        assert_eq!(
            browser.chosen_path(),
            Some(base_dir.path().join("adir").join("inner.txt"))
        );

        let absolute = base_dir.path().join("notes.md");
        browser.path_input = absolute.to_string_lossy().to_string();
        assert_eq!(browser.chosen_path(), Some(absolute));
    }
}
