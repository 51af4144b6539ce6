use crate::config::FileReaderError;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists every regular file directly inside `dir`, sorted by path.
/// Subdirectories are skipped; symlinks are followed.
pub fn list_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, FileReaderError> {
	let dir = dir.as_ref();
	let metadata = fs::metadata(dir).map_err(|e| FileReaderError::read_error(dir, e))?;
	if !metadata.is_dir() {
		return Err(FileReaderError::NotADirectory { path: dir.to_path_buf() });
	}

	let mut files = Vec::new();
	for entry in fs::read_dir(dir).map_err(|e| FileReaderError::read_error(dir, e))? {
		let path = entry.map_err(|e| FileReaderError::read_error(dir, e))?.path();
		if path.is_file() {
			files.push(path);
		}
	}
	files.sort();

	tracing::debug!(dir = %dir.display(), count = files.len(), "listed input files");
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lists_only_regular_files_in_order() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.html"), "").unwrap();
		fs::write(dir.path().join("a.html"), "").unwrap();
		fs::write(dir.path().join("notes.txt"), "").unwrap();
		fs::create_dir(dir.path().join("nested")).unwrap();

		let files = list_files(dir.path()).unwrap();
		let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
		assert_eq!(names, vec!["a.html", "b.html", "notes.txt"]);
	}

	#[test]
	fn file_path_is_not_a_directory() {
		let dir = tempfile::tempdir().unwrap();
		let file = dir.path().join("a.html");
		fs::write(&file, "").unwrap();

		assert!(matches!(list_files(&file), Err(FileReaderError::NotADirectory { .. })));
	}

	#[test]
	fn missing_directory_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(list_files(dir.path().join("gone")), Err(FileReaderError::NotFound { .. })));
	}
}
