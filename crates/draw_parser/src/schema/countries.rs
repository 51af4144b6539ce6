use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{ExtractionError, ParseError};
use file_reader::FileReader;
use std::collections::HashMap;
use std::path::Path;

const SEPARATOR: &str = " - ";

/// Bidirectional lookup between full country names, as they appear in the
/// markup, and the short codes used as grid axis labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryTable {
	full_to_abbr: HashMap<String, String>,
	abbr_to_full: HashMap<String, String>,
}

impl CountryTable {
	/// Parses `"Full Name - ABBR"` lines. Blank lines are ignored; a repeated
	/// name or code replaces the earlier entry and is reported to `sink`.
	pub fn parse(text: &str, sink: &dyn DiagnosticSink) -> Result<Self, ParseError> {
		let mut table = CountryTable::default();

		for (i, raw) in text.lines().enumerate() {
			let line = raw.trim();
			if line.is_empty() {
				continue;
			}

			let parts: Vec<&str> = line.split(SEPARATOR).collect();
			let [full, abbr] = parts.as_slice() else {
				return Err(ParseError::malformed_country_line_error(i + 1, line));
			};

			for key in table.insert(full, abbr) {
				sink.report(Diagnostic::DuplicateCountryKey { line_no: i + 1, key });
			}
		}

		Ok(table)
	}

	pub fn from_file(path: impl AsRef<Path>, sink: &dyn DiagnosticSink) -> Result<Self, ExtractionError> {
		let content = FileReader::new(path)?.read_content()?;
		let table = Self::parse(&content, sink)?;
		tracing::debug!(entries = table.len(), "loaded country table");
		Ok(table)
	}

	/// Inserts one mapping and returns the keys that were overwritten.
	fn insert(&mut self, full: &str, abbr: &str) -> Vec<String> {
		let mut replaced = Vec::new();
		if self.full_to_abbr.insert(full.to_string(), abbr.to_string()).is_some() {
			replaced.push(full.to_string());
		}
		if self.abbr_to_full.insert(abbr.to_string(), full.to_string()).is_some() {
			replaced.push(abbr.to_string());
		}
		replaced
	}

	pub fn abbreviation(&self, full_name: &str) -> Option<&str> {
		self.full_to_abbr.get(full_name).map(String::as_str)
	}

	pub fn full_name(&self, abbreviation: &str) -> Option<&str> {
		self.abbr_to_full.get(abbreviation).map(String::as_str)
	}

	pub fn is_abbreviation(&self, label: &str) -> bool {
		self.abbr_to_full.contains_key(label)
	}

	/// Accepts either a known code or a full name and returns the code.
	pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
		if self.is_abbreviation(name) {
			return Some(name);
		}
		self.abbreviation(name)
	}

	pub fn len(&self) -> usize {
		self.full_to_abbr.len()
	}

	pub fn is_empty(&self) -> bool {
		self.full_to_abbr.is_empty()
	}
}

impl<F, A> FromIterator<(F, A)> for CountryTable
where
	F: AsRef<str>,
	A: AsRef<str>,
{
	fn from_iter<T: IntoIterator<Item = (F, A)>>(iter: T) -> Self {
		let mut table = CountryTable::default();
		for (full, abbr) in iter {
			table.insert(full.as_ref(), abbr.as_ref());
		}
		table
	}
}
