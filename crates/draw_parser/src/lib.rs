pub mod diagnostics;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod query_selectors;
pub mod schema;

use file_reader::{FileReader, FileReaderError};
use scraper::Html;
use std::path::Path;

/// Reads a page from disk and parses it. Parsing is lenient and never fails;
/// only reading the file can.
pub fn read_html_file(file_path: impl AsRef<Path>) -> Result<Html, FileReaderError> {
	let reader = FileReader::new(file_path)?;
	let html_content = reader.read_content()?;
	Ok(Html::parse_document(&html_content))
}
