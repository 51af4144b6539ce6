use crate::config::FileReaderError;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on a single input file whose content is read as UTF-8 text.
#[derive(Debug, Clone)]
pub struct FileReader {
	path: PathBuf,
}

impl FileReader {
	pub fn new(path: impl AsRef<Path>) -> Result<Self, FileReaderError> {
		let path = path.as_ref().to_path_buf();
		let metadata = fs::metadata(&path).map_err(|e| FileReaderError::read_error(&path, e))?;
		if !metadata.is_file() {
			return Err(FileReaderError::NotAFile { path });
		}
		Ok(Self { path })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn read_content(&self) -> Result<String, FileReaderError> {
		tracing::debug!(path = %self.path.display(), "reading file");
		fs::read_to_string(&self.path).map_err(|e| FileReaderError::read_error(&self.path, e))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs::File;
	use std::io::Write;

	#[test]
	fn reads_utf8_content() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("page.html");
		fs::write(&path, "<h2>Côte d'Ivoire Open</h2>").unwrap();

		let reader = FileReader::new(&path).unwrap();
		assert_eq!(reader.path(), path.as_path());
		assert_eq!(reader.read_content().unwrap(), "<h2>Côte d'Ivoire Open</h2>");
	}

	#[test]
	fn missing_file_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let err = FileReader::new(dir.path().join("nope.html")).unwrap_err();
		assert!(matches!(err, FileReaderError::NotFound { .. }));
	}

	#[test]
	fn directory_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let err = FileReader::new(dir.path()).unwrap_err();
		assert!(matches!(err, FileReaderError::NotAFile { .. }));
	}

	#[test]
	fn invalid_utf8_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("latin1.html");
		let mut file = File::create(&path).unwrap();
		file.write_all(&[0x3c, 0x68, 0x32, 0x3e, 0xff, 0xfe]).unwrap();

		let err = FileReader::new(&path).unwrap().read_content().unwrap_err();
		assert!(matches!(err, FileReaderError::InvalidUtf8 { .. }));
		assert_eq!(err.path(), &path);
	}
}
