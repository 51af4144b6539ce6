use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{ExtractionError, ParseError};
use crate::export::ExportMode;
use crate::query_selectors::{extract_draw_information, extract_draw_information_ii, extract_meta_data, RowLayout, TournamentSelectors};
use crate::read_html_file;
use crate::schema::{CountryTable, ScoreGrid};
use scraper::Html;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
	/// One score per country pair and draw, from the draw tables.
	Totals,
	/// Full per-end scoreboards, from the results display.
	Scores,
}

impl ExtractionMode {
	pub fn export_mode(&self) -> ExportMode {
		match self {
			ExtractionMode::Totals => ExportMode::Normal,
			ExtractionMode::Scores => ExportMode::Scores,
		}
	}
}

#[derive(Debug)]
pub struct DocumentFailure {
	pub path: PathBuf,
	pub error: ExtractionError,
}

/// Outcome of a whole run: a grid for every document that parsed, and the
/// reason for every one that did not.
#[derive(Debug, Default)]
pub struct BatchReport {
	pub grids: Vec<ScoreGrid>,
	pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
	pub fn grid_names(&self) -> Vec<&str> {
		self.grids.iter().map(ScoreGrid::name).collect()
	}

	/// Documents that produced no grid. The reasons were already reported
	/// to the sink when each one failed.
	pub fn failed_paths(&self) -> Vec<&Path> {
		self.failures.iter().map(|f| f.path.as_path()).collect()
	}

	pub fn is_clean(&self) -> bool {
		self.failures.is_empty()
	}
}

/// Turns parsed tournament pages into primed and populated score grids.
pub struct GridBuilder<'a> {
	table: &'a CountryTable,
	selectors: TournamentSelectors,
	layout: RowLayout,
	sink: &'a dyn DiagnosticSink,
}

impl<'a> GridBuilder<'a> {
	pub fn new(table: &'a CountryTable, sink: &'a dyn DiagnosticSink) -> Result<Self, ParseError> {
		Ok(Self {
			table,
			selectors: TournamentSelectors::new()?,
			layout: RowLayout::default(),
			sink,
		})
	}

	/// Reads the metadata and allocates the grid for it.
	fn primed_grid(&self, document: &Html) -> Result<ScoreGrid, ExtractionError> {
		let meta = extract_meta_data(document, self.table, &self.selectors)?;
		let mut grid = ScoreGrid::new(&meta.name);
		grid.prime(&meta.countries, &meta.draws, self.table, self.sink)?;
		Ok(grid)
	}

	/// Dense grid filled from the draw tables. Team names in the draw cells
	/// may be either full names or codes.
	pub fn build_totals_grid(&self, document: &Html) -> Result<ScoreGrid, ExtractionError> {
		let mut grid = self.primed_grid(document)?;

		for record in extract_draw_information(document, &self.selectors, &self.layout)? {
			let c1 = self.table.resolve(&record.country_one).unwrap_or(&record.country_one);
			let c2 = self.table.resolve(&record.country_two).unwrap_or(&record.country_two);
			grid.add_entry(c1, c2, &record.draw, record.value.as_str())?;
		}

		Ok(grid)
	}

	/// Grid whose record list holds one bundle per results section.
	pub fn build_scores_grid(&self, document: &Html) -> Result<ScoreGrid, ExtractionError> {
		let mut grid = self.primed_grid(document)?;
		let name = grid.name().to_string();

		for section in extract_draw_information_ii(document, self.table, &self.selectors, self.sink)? {
			grid.add_draw_entry(section.scores, &section.draw, &name);
		}

		Ok(grid)
	}

	pub fn build_file(&self, path: &Path, mode: ExtractionMode) -> Result<ScoreGrid, ExtractionError> {
		let document = read_html_file(path)?;
		match mode {
			ExtractionMode::Totals => self.build_totals_grid(&document),
			ExtractionMode::Scores => self.build_scores_grid(&document),
		}
	}

	/// Builds every file in turn. A failing document is recorded in the
	/// report and the run moves on to the next one.
	pub fn build_all(&self, html_files: &[PathBuf], mode: ExtractionMode) -> BatchReport {
		tracing::info!(files = html_files.len(), ?mode, "constructing data grids");

		let mut report = BatchReport::default();
		for path in html_files {
			match self.build_file(path, mode) {
				Ok(grid) => {
					self.sink.report(Diagnostic::GridBuilt {
						name: grid.name().to_string(),
						path: path.clone(),
					});
					report.grids.push(grid);
				}
				Err(error) => {
					self.sink.report(Diagnostic::DocumentSkipped {
						path: path.clone(),
						reason: error.to_string(),
					});
					report.failures.push(DocumentFailure { path: path.clone(), error });
				}
			}
		}
		report
	}
}

/// Loads the country table and builds dense grids from every file.
pub fn construct_data_grids(html_files: &[PathBuf], country_file: &Path, sink: &dyn DiagnosticSink) -> Result<BatchReport, ExtractionError> {
	let table = CountryTable::from_file(country_file, sink)?;
	Ok(GridBuilder::new(&table, sink)?.build_all(html_files, ExtractionMode::Totals))
}

/// Loads the country table and builds scoreboard grids from every file.
pub fn construct_data_grids_ii(html_files: &[PathBuf], country_file: &Path, sink: &dyn DiagnosticSink) -> Result<BatchReport, ExtractionError> {
	let table = CountryTable::from_file(country_file, sink)?;
	Ok(GridBuilder::new(&table, sink)?.build_all(html_files, ExtractionMode::Scores))
}
