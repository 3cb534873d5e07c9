pub mod counter;
pub mod document;
pub mod metrics;
pub mod text_file;


pub use counter::{MetricsDisplay, WordCounter};
pub use document::Document;
