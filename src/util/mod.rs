mod error;
mod files;

pub use error::{CounterError, ErrorKind};
pub use files::write_with_temp_file;
