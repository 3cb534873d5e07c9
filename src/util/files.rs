use std::io::Write;
use std::path::Path;

use crate::counter_error;
use crate::util::CounterError;

/// Write `contents` to `path` by way of a temporary file in the same directory, so a crash
/// halfway through never leaves a truncated file behind
pub fn write_with_temp_file(path: &Path, contents: &[u8]) -> Result<(), CounterError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
    temp_file.write_all(contents)?;
    temp_file.flush()?;

    temp_file
        .persist(path)
        .map_err(|err| counter_error!("failed to move temp file to {path:?}: {}", err.error))?;

    Ok(())
}

#[test]
fn test_write_with_temp_file() {
    let base_dir = tempfile::TempDir::new().unwrap();
    let path = base_dir.path().join("nested").join("settings.toml");

    write_with_temp_file(&path, b"font_size = 20.0\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "font_size = 20.0\n");

    // overwriting replaces the whole file
    write_with_temp_file(&path, b"x = 1\n").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x = 1\n");

    // only the target file is left behind
    assert_eq!(
        std::fs::read_dir(base_dir.path().join("nested"))
            .unwrap()
            .count(),
        1
    );
}
