use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{GridError, LookupError};
use crate::schema::countries::CountryTable;
use crate::schema::models::{DrawScores, MatchScore};
use std::fmt;

/// Marker written to CSV for a country pair with no recorded result.
pub const ABSENT_MARKER: &str = "-1";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell {
	Present(String),
	#[default]
	Absent,
}

impl Cell {
	pub fn is_absent(&self) -> bool {
		matches!(self, Cell::Absent)
	}

	/// Reads a cell back from its CSV form.
	pub fn from_field(field: &str) -> Self {
		if field == ABSENT_MARKER {
			Cell::Absent
		} else {
			Cell::Present(field.to_string())
		}
	}
}

impl fmt::Display for Cell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Cell::Present(score) => f.write_str(score),
			Cell::Absent => f.write_str(ABSENT_MARKER),
		}
	}
}

/// Results of one tournament, as a dense country × country × draw tensor
/// and as per-draw scoreboard bundles.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGrid {
	name: String,
	countries: Vec<String>,
	draws: Vec<String>,
	// Laid out draw-major so each draw's country × country slice is contiguous.
	cells: Vec<Cell>,
	draw_scores: Vec<DrawScores>,
	primed: bool,
}

impl ScoreGrid {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			countries: Vec::new(),
			draws: Vec::new(),
			cells: Vec::new(),
			draw_scores: Vec::new(),
			primed: false,
		}
	}

	/// Fixes the axes and fills every cell with `Cell::Absent`.
	///
	/// `countries` are full names; each one is mapped to its abbreviation
	/// through `table`. Names without an abbreviation are reported to `sink`
	/// and left off the axis, and a code seen twice keeps its first position.
	pub fn prime(&mut self, countries: &[String], draws: &[String], table: &CountryTable, sink: &dyn DiagnosticSink) -> Result<(), GridError> {
		if self.primed {
			return Err(GridError::AlreadyPrimed { name: self.name.clone() });
		}

		let mut axis: Vec<String> = Vec::with_capacity(countries.len());
		for name in countries {
			match table.abbreviation(name) {
				Some(abbr) if axis.iter().any(|c| c == abbr) => {
					tracing::debug!(grid = %self.name, country = %name, "duplicate participant ignored");
				}
				Some(abbr) => axis.push(abbr.to_string()),
				None => sink.report(Diagnostic::UnresolvedCountry {
					tournament: self.name.clone(),
					name: name.clone(),
				}),
			}
		}

		let n = axis.len();
		self.cells = vec![Cell::Absent; n * n * draws.len()];
		self.countries = axis;
		self.draws = draws.to_vec();
		self.draw_scores.clear();
		self.primed = true;
		Ok(())
	}

	/// Records `value` as the score of `country_one` against `country_two`.
	/// All three keys must already be on their axes; nothing is written
	/// otherwise.
	pub fn add_entry(&mut self, country_one: &str, country_two: &str, draw: &str, value: impl Into<String>) -> Result<(), GridError> {
		let idx = self.cell_index(country_one, country_two, draw)?;
		self.cells[idx] = Cell::Present(value.into());
		Ok(())
	}

	/// Appends a scoreboard bundle. Bundles are not checked against the axes.
	pub fn add_draw_entry(&mut self, scores: Vec<MatchScore>, draw: &str, tournament: &str) {
		self.draw_scores.push(DrawScores {
			draw: draw.to_string(),
			tournament: tournament.to_string(),
			scores,
		});
	}

	pub fn get(&self, country_one: &str, country_two: &str, draw: &str) -> Option<&Cell> {
		let idx = self.cell_index(country_one, country_two, draw).ok()?;
		self.cells.get(idx)
	}

	fn cell_index(&self, country_one: &str, country_two: &str, draw: &str) -> Result<usize, GridError> {
		if !self.primed {
			return Err(GridError::NotPrimed { name: self.name.clone() });
		}
		let i = self.country_index(country_one).ok_or_else(|| LookupError::unknown_country(country_one))?;
		let j = self.country_index(country_two).ok_or_else(|| LookupError::unknown_country(country_two))?;
		let k = self.draws.iter().position(|d| d == draw).ok_or_else(|| LookupError::unknown_draw(draw))?;

		let n = self.countries.len();
		Ok((k * n + i) * n + j)
	}

	fn country_index(&self, country: &str) -> Option<usize> {
		self.countries.iter().position(|c| c == country)
	}

	/// Rows of the country × country slice at draw position `draw_index`,
	/// each paired with its row label.
	pub fn slice(&self, draw_index: usize) -> Option<Vec<(&str, &[Cell])>> {
		if draw_index >= self.draws.len() {
			return None;
		}
		let n = self.countries.len();
		let start = draw_index * n * n;
		let rows = self
			.countries
			.iter()
			.enumerate()
			.map(|(i, label)| (label.as_str(), &self.cells[start + i * n..start + (i + 1) * n]))
			.collect();
		Some(rows)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn countries(&self) -> &[String] {
		&self.countries
	}

	pub fn draws(&self) -> &[String] {
		&self.draws
	}

	pub fn draw_scores(&self) -> &[DrawScores] {
		&self.draw_scores
	}

	pub fn shape(&self) -> (usize, usize, usize) {
		(self.countries.len(), self.countries.len(), self.draws.len())
	}

	pub fn filled_cells(&self) -> usize {
		self.cells.iter().filter(|c| !c.is_absent()).count()
	}
}
