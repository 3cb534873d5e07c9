use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use directories::ProjectDirs;
use toml_edit::{DocumentMut, value};

use crate::util::{CounterError, write_with_temp_file};

#[derive(Debug)]
struct SettingsData {
    /// size of the text font
    font_size: f32,

    /// where the open dialog starts, updated after every successful open
    last_directory: Option<PathBuf>,

    /// list every file in the open dialog, not just `.txt` files
    show_all_files: bool,

    modified: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            last_directory: None,
            show_all_files: false,
            modified: false,
        }
    }
}

/// User settings, shared between the app and its dialogs. Unknown keys in the file are kept
/// when writing it back out.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    data: Rc<RefCell<SettingsData>>,
    table: Rc<RefCell<DocumentMut>>,
}

impl Settings {
    pub fn load(&mut self, table: &DocumentMut) {
        let mut modified = false;

        let mut data = self.data.borrow_mut();

        match table.get("font_size") {
            Some(font_size_item) => {
                if let Some(font_size) = font_size_item.as_float() {
                    data.font_size = font_size as f32;
                } else if let Some(font_size) = font_size_item.as_integer() {
                    data.font_size = font_size as f32;
                } else {
                    log::warn!("ignoring invalid font_size: {font_size_item}");
                    modified = true;
                }
            }
            None => modified = true,
        }

        match table.get("show_all_files").and_then(|val| val.as_bool()) {
            Some(show_all_files) => data.show_all_files = show_all_files,
            None => modified = true,
        }

        if let Some(last_directory) = table
            .get("last_directory")
            .and_then(|location| location.as_str())
        {
            data.last_directory = Some(PathBuf::from(last_directory));
        }

        data.modified = modified;
        *self.table.borrow_mut() = table.clone();
    }

    pub fn save(&self, table: &mut DocumentMut) {
        let mut data = self.data.borrow_mut();
        log::debug!("saving settings: {data:?}");
        table.insert("font_size", value(data.font_size as f64));
        table.insert("show_all_files", value(data.show_all_files));

        if let Some(last_directory) = data.last_directory.as_ref().and_then(|dir| dir.to_str()) {
            table.insert("last_directory", value(last_directory));
        }

        data.modified = false;
    }

    /// Read settings from `path`, falling back to defaults if the file doesn't exist yet
    pub fn load_from_file(path: &Path) -> Result<Self, CounterError> {
        let mut settings = Self::default();

        if path.exists() {
            let table = std::fs::read_to_string(path)?.parse::<DocumentMut>()?;
            settings.load(&table);
        } else {
            log::info!("no settings file at {path:?}, using defaults");
            settings.load(&DocumentMut::new());
        }

        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), CounterError> {
        let mut table = self.table.borrow_mut();
        self.save(&mut table);

        write_with_temp_file(path, table.to_string().as_bytes())
    }

    pub fn get_path(project_dirs: &ProjectDirs) -> PathBuf {
        project_dirs.config_dir().join("settings.toml")
    }

    /// The platform default location, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "word-counter").map(|project_dirs| Self::get_path(&project_dirs))
    }

    pub fn font_size(&self) -> f32 {
        self.data.borrow().font_size
    }

    pub fn last_directory(&self) -> Option<PathBuf> {
        self.data.borrow().last_directory.clone()
    }

    pub fn set_last_directory(&mut self, last_directory: &Path) {
        let mut data = self.data.borrow_mut();
        if data.last_directory.as_deref() != Some(last_directory) {
            data.last_directory = Some(last_directory.to_path_buf());
            data.modified = true;
        }
    }

    pub fn show_all_files(&self) -> bool {
        self.data.borrow().show_all_files
    }

    pub fn set_show_all_files(&mut self, show_all_files: bool) {
        let mut data = self.data.borrow_mut();
        if data.show_all_files != show_all_files {
            data.show_all_files = show_all_files;
            data.modified = true;
        }
    }

    pub fn modified(&self) -> bool {
        self.data.borrow().modified
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_values() {
        let table = "font_size = 24\nshow_all_files = true\nlast_directory = \"/home/me/docs\"\n"
            .parse::<DocumentMut>()
            .unwrap();

        let mut settings = Settings::default();
        settings.load(&table);

        assert_eq!(settings.font_size(), 24.0);
        assert!(settings.show_all_files());
        assert_eq!(
            settings.last_directory(),
            Some(PathBuf::from("/home/me/docs"))
        );
        assert!(!settings.modified());
    }

    #[test]
    fn test_load_defaults() {
        let table = "font_size = \"huge\"\n".parse::<DocumentMut>().unwrap();

        let mut settings = Settings::default();
        settings.load(&table);

        assert_eq!(settings.font_size(), 18.0);
        assert!(!settings.show_all_files());
        assert_eq!(settings.last_directory(), None);
        assert!(settings.modified());
    }

    #[test]
    fn test_round_trip_keeps_unknown_keys() -> Result<(), CounterError> {
        let base_dir = tempfile::TempDir::new()?;
        let path = base_dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "# my settings\ntheme = \"dark\"\nfont_size = 14.5\nshow_all_files = false\n",
        )?;

        let mut settings = Settings::load_from_file(&path)?;
        assert_eq!(settings.font_size(), 14.5);
        assert!(!settings.modified());

        settings.set_show_all_files(true);
        settings.set_last_directory(base_dir.path());
        assert!(settings.modified());

        settings.save_to_file(&path)?;
        assert!(!settings.modified());

        let written = std::fs::read_to_string(&path)?;
        assert!(written.contains("# my settings"));
        assert!(written.contains("theme = \"dark\""));

        let reloaded = Settings::load_from_file(&path)?;
        assert!(reloaded.show_all_files());
        assert_eq!(reloaded.last_directory().as_deref(), Some(base_dir.path()));
        assert_eq!(reloaded.font_size(), 14.5);

        Ok(())
    }

    #[test]
    fn test_missing_file_and_bad_file() {
        let base_dir = tempfile::TempDir::new().unwrap();

        let settings = Settings::load_from_file(&base_dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings.font_size(), 18.0);
        assert!(settings.modified());

        let bad_path = base_dir.path().join("bad.toml");
        std::fs::write(&bad_path, "font_size = = 3").unwrap();
        let err = Settings::load_from_file(&bad_path).unwrap_err();
        assert_eq!(err.kind(), crate::util::ErrorKind::Settings);
    }
}
