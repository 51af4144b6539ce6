pub mod config;
pub mod core;

pub use crate::config::{FileConfig, FileReaderError};
pub use crate::core::file_handler::FileReader;
pub use crate::core::listing::list_files;
