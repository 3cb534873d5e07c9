use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The chosen file is not a `.txt` file
    InvalidFileType,
    Io,
    Settings,
    Other,
}

#[derive(Debug)]
pub struct CounterError {
    kind: ErrorKind,
    msg: String,
}

impl CounterError {
    pub fn new<S: Into<String>>(kind: ErrorKind, msg: S) -> Self {
        Self {
            kind,
            msg: msg.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Text shown to the user in the error dialog
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::InvalidFileType => "Invalid file type. Please select a TXT file.".to_string(),
            ErrorKind::Io => format!("Error opening file.\n\n{}", self.msg),
            ErrorKind::Settings | ErrorKind::Other => self.msg.clone(),
        }
    }
}

// std::io::Error and toml_edit::TomlError convert into CounterError with the ? operator
// for anything else, build one with counter_error!

#[macro_export]
macro_rules! counter_error {
    ($($arg:tt)*) => {{

        $crate::util::CounterError::new($crate::util::ErrorKind::Other, format!("[{} line {}] {}", file!(), line!(),
            format!($($arg)*)
        ))
    }};
}

impl From<std::io::Error> for CounterError {
    fn from(err: std::io::Error) -> Self {
        CounterError::new(ErrorKind::Io, format!("I/O error: {err}"))
    }
}

impl From<toml_edit::TomlError> for CounterError {
    fn from(err: toml_edit::TomlError) -> Self {
        CounterError::new(ErrorKind::Settings, format!("invalid settings file: {err}"))
    }
}

impl Display for CounterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.msg)
    }
}

impl Error for CounterError {}

#[test]
fn test_user_message() {
    let err = CounterError::new(ErrorKind::InvalidFileType, "notes.md is not a txt file");
    assert_eq!(
        err.user_message(),
        "Invalid file type. Please select a TXT file."
    );

    let err: CounterError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.user_message().starts_with("Error opening file."));
    assert!(err.user_message().contains("gone"));
}
