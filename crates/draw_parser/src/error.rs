use file_reader::FileReaderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
	#[error("Country table line {line_no} is not of the form \"Full Name - ABBR\": {line:?}")]
	MalformedCountryLine { line_no: usize, line: String },

	#[error("Missing expected element in the HTML: {element}")]
	MissingElement { element: String },

	#[error("Invalid CSS selector: {selector}")]
	InvalidSelector { selector: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum StructureError {
	#[error("Expected two tokens around \" - \" in {segment:?}, found {found}")]
	TokenCount { segment: String, found: usize },

	#[error("Game table for draw {draw:?} is missing team row {row}")]
	MissingTeamRow { draw: String, row: usize },

	#[error("Scoreboard rows for draw {draw:?} differ in length: {first} vs {second}")]
	RaggedScoreboard { draw: String, first: usize, second: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
	#[error("Country {country:?} is not on the grid's country axis")]
	UnknownCountry { country: String },

	#[error("Draw {draw:?} is not on the grid's draw axis")]
	UnknownDraw { draw: String },

	#[error("No abbreviation known for team {team:?}")]
	UnknownTeam { team: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
	#[error("Score grid {name:?} has not been primed")]
	NotPrimed { name: String },

	#[error("Score grid {name:?} was already primed")]
	AlreadyPrimed { name: String },

	#[error(transparent)]
	Lookup(#[from] LookupError),
}

/// Everything that can make a single document unusable.
#[derive(Debug, Error)]
pub enum ExtractionError {
	#[error(transparent)]
	Parse(#[from] ParseError),

	#[error(transparent)]
	Structure(#[from] StructureError),

	#[error(transparent)]
	Lookup(#[from] LookupError),

	#[error(transparent)]
	Grid(#[from] GridError),

	#[error(transparent)]
	Io(#[from] FileReaderError),
}

#[derive(Debug, Error)]
pub enum ExportError {
	#[error("Failed to write {}: {source}", path.display())]
	Io { path: PathBuf, source: io::Error },

	#[error("CSV error for {}: {source}", path.display())]
	Csv { path: PathBuf, source: csv::Error },

	#[error("Malformed CSV in {}: {reason}", path.display())]
	Malformed { path: PathBuf, reason: String },
}

impl ParseError {
	pub fn missing_element_error(element: &str) -> Self {
		ParseError::MissingElement { element: element.to_string() }
	}

	pub fn malformed_country_line_error(line_no: usize, line: &str) -> Self {
		ParseError::MalformedCountryLine {
			line_no,
			line: line.to_string(),
		}
	}
}

impl StructureError {
	pub fn token_count_error(segment: &str, found: usize) -> Self {
		StructureError::TokenCount {
			segment: segment.to_string(),
			found,
		}
	}
}

impl LookupError {
	pub fn unknown_country(country: &str) -> Self {
		LookupError::UnknownCountry { country: country.to_string() }
	}

	pub fn unknown_draw(draw: &str) -> Self {
		LookupError::UnknownDraw { draw: draw.to_string() }
	}

	pub fn unknown_team(team: &str) -> Self {
		LookupError::UnknownTeam { team: team.to_string() }
	}
}

impl ExportError {
	pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
		ExportError::Io { path: path.into(), source }
	}

	pub fn csv_error(path: impl Into<PathBuf>, source: csv::Error) -> Self {
		ExportError::Csv { path: path.into(), source }
	}
}
