mod error;
mod file;

pub use error::FileReaderError;
pub use file::FileConfig;
