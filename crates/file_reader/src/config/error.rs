use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileReaderError {
	#[error("File not found: {}", path.display())]
	NotFound { path: PathBuf },

	#[error("Expected a regular file but found something else at {}", path.display())]
	NotAFile { path: PathBuf },

	#[error("Expected a directory at {}", path.display())]
	NotADirectory { path: PathBuf },

	#[error("Failed to read {}: {source}", path.display())]
	Read { path: PathBuf, source: io::Error },

	#[error("Content of {} is not valid UTF-8", path.display())]
	InvalidUtf8 { path: PathBuf },
}

impl FileReaderError {
	pub fn read_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
		let path = path.into();
		match source.kind() {
			io::ErrorKind::NotFound => FileReaderError::NotFound { path },
			io::ErrorKind::InvalidData => FileReaderError::InvalidUtf8 { path },
			_ => FileReaderError::Read { path, source },
		}
	}

	pub fn path(&self) -> &PathBuf {
		match self {
			FileReaderError::NotFound { path }
			| FileReaderError::NotAFile { path }
			| FileReaderError::NotADirectory { path }
			| FileReaderError::Read { path, .. }
			| FileReaderError::InvalidUtf8 { path } => path,
		}
	}
}
