use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::util::{CounterError, ErrorKind};

pub const TEXT_EXTENSION: &str = "txt";

/// Whether `path` has a `.txt` extension (any case)
pub fn is_txt_path(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(TEXT_EXTENSION))
}

/// Read a plain text file. Every line (including the last one) ends up followed by a `\n`;
/// `\r\n` and lone `\r` line endings are normalized away. Bytes that aren't valid UTF-8 are
/// replaced with U+FFFD rather than failing the load.
pub fn load_text_file(path: &Path) -> Result<String, CounterError> {
    if !is_txt_path(path) {
        log::warn!("refusing to open {path:?}, not a .{TEXT_EXTENSION} file");
        return Err(CounterError::new(
            ErrorKind::InvalidFileType,
            format!("{path:?} is not a .{TEXT_EXTENSION} file"),
        ));
    }

    read_lines(path).map_err(|err| {
        log::error!("failed to read {path:?}: {err}");
        err
    })
}

fn read_lines(path: &Path) -> Result<String, CounterError> {
    let reader = BufReader::new(File::open(path)?);

    let mut content = String::new();
    for segment in reader.split(b'\n') {
        let segment = segment?;
        let segment = segment.strip_suffix(b"\r").unwrap_or(&segment);

        // anything left over is an old-style mac line ending
        for line in segment.split(|byte| *byte == b'\r') {
            content.push_str(&String::from_utf8_lossy(line));
            content.push('\n');
        }
    }

    log::debug!("loaded {} bytes from {path:?}", content.len());

    Ok(content)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_txt_path() {
        assert!(is_txt_path(Path::new("notes.txt")));
        assert!(is_txt_path(Path::new("/some/dir/NOTES.TXT")));
        assert!(is_txt_path(Path::new("archive.tar.Txt")));

        assert!(!is_txt_path(Path::new("notes.md")));
        assert!(!is_txt_path(Path::new("notes.txt.bak")));
        // a file named just `txt` or `.txt` has no extension at all, so neither counts
        assert!(!is_txt_path(Path::new("txt")));
        assert!(!is_txt_path(Path::new(".txt")));
        assert!(!is_txt_path(Path::new("notes")));
        assert!(!is_txt_path(&PathBuf::new()));
    }

    #[test]
    fn test_load_appends_newlines() -> Result<(), CounterError> {
        let base_dir = tempfile::TempDir::new()?;

        let path = base_dir.path().join("a.txt");
        std::fs::write(&path, "one two three")?;
        assert_eq!(load_text_file(&path)?, "one two three\n");

        std::fs::write(&path, "one\r\ntwo\n\nthree\n")?;
        assert_eq!(load_text_file(&path)?, "one\ntwo\n\nthree\n");

        std::fs::write(&path, "old\rmac\r\rending\r")?;
        assert_eq!(load_text_file(&path)?, "old\nmac\n\nending\n");

        std::fs::write(&path, "")?;
        assert_eq!(load_text_file(&path)?, "");

        Ok(())
    }

    #[test]
    fn test_load_rejects_other_extensions() {
        let base_dir = tempfile::TempDir::new().unwrap();
        let path = base_dir.path().join("notes.md");
        std::fs::write(&path, "# heading").unwrap();

        let err = load_text_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFileType);
    }

    #[test]
    fn test_load_io_errors() {
        let base_dir = tempfile::TempDir::new().unwrap();

        let missing = base_dir.path().join("missing.txt");
        assert_eq!(load_text_file(&missing).unwrap_err().kind(), ErrorKind::Io);

        let dir_path = base_dir.path().join("folder.txt");
        std::fs::create_dir(&dir_path).unwrap();
        assert_eq!(load_text_file(&dir_path).unwrap_err().kind(), ErrorKind::Io);
    }

    #[test]
    fn test_load_invalid_utf8_is_replaced() -> Result<(), CounterError> {
        let base_dir = tempfile::TempDir::new()?;

        let latin1 = base_dir.path().join("latin1.txt");
        std::fs::write(&latin1, b"caf\xe9 au lait\r\n")?;
        assert_eq!(load_text_file(&latin1)?, "caf\u{FFFD} au lait\n");

        let binary = base_dir.path().join("binary.txt");
        std::fs::write(&binary, [0x66, 0x6f, 0xff, 0xfe, 0x0a])?;
        assert_eq!(load_text_file(&binary)?, "fo\u{FFFD}\u{FFFD}\n");

        Ok(())
    }
}
