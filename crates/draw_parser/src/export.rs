//! CSV output for score grids.
//!
//! Dense grids become one `draw_<draw>.csv` matrix per draw under a folder
//! named after the tournament. Scoreboard bundles become one
//! `<country_one>_<country_two>.csv` file per match under
//! `<tournament>/<draw>/`.

use crate::error::ExportError;
use crate::schema::{Cell, MatchScore, ScoreGrid};
use csv::{ReaderBuilder, Writer};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
	/// Dense country × country matrices, one per draw.
	#[default]
	Normal,
	/// Per-match scoreboards.
	Scores,
}

/// Exports every grid under `folder` in the given mode and returns the names
/// of the tournaments written.
pub fn save_data_grids(folder: &Path, grids: &[ScoreGrid], mode: ExportMode) -> Result<Vec<String>, ExportError> {
	tracing::info!(count = grids.len(), folder = %folder.display(), "saving datagrids");

	let mut saved = Vec::with_capacity(grids.len());
	for grid in grids {
		tracing::info!("saving grid: {}", grid.name());
		let files = match mode {
			ExportMode::Normal => export_dense(grid, folder, None)?,
			ExportMode::Scores => export_draw_scores(grid, folder)?,
		};
		tracing::debug!(grid = %grid.name(), files = files.len(), filled = grid.filled_cells(), "grid saved");
		saved.push(grid.name().to_string());
	}
	Ok(saved)
}

/// Writes one matrix per draw to `<folder>/<file_name>/draw_<draw>.csv`,
/// where `file_name` defaults to the grid's name.
///
/// A draw listed more than once is written once, from its first position,
/// which is the only one entries are ever recorded at.
pub fn export_dense(grid: &ScoreGrid, folder: &Path, file_name: Option<&str>) -> Result<Vec<PathBuf>, ExportError> {
	let parent = folder.join(path_component(file_name.unwrap_or(grid.name())));
	let mut written = Vec::with_capacity(grid.draws().len());

	for (k, draw) in grid.draws().iter().enumerate() {
		if grid.draws()[..k].contains(draw) {
			continue;
		}
		let Some(rows) = grid.slice(k) else { continue };
		create_dir(&parent)?;

		let path = parent.join(format!("draw_{}.csv", path_component(draw)));
		let mut wtr = Writer::from_path(&path).map_err(|e| ExportError::csv_error(&path, e))?;

		let header = std::iter::once("").chain(grid.countries().iter().map(String::as_str));
		wtr.write_record(header).map_err(|e| ExportError::csv_error(&path, e))?;

		for (label, cells) in rows {
			let mut record = vec![label.to_string()];
			record.extend(cells.iter().map(Cell::to_string));
			wtr.write_record(&record).map_err(|e| ExportError::csv_error(&path, e))?;
		}

		wtr.flush().map_err(|e| ExportError::io_error(&path, e))?;
		written.push(path);
	}

	Ok(written)
}

/// Writes every match scoreboard to
/// `<folder>/<tournament>/<draw>/<country_one>_<country_two>.csv`.
pub fn export_draw_scores(grid: &ScoreGrid, folder: &Path) -> Result<Vec<PathBuf>, ExportError> {
	let mut written = Vec::new();

	for score_box in grid.draw_scores() {
		let parent = folder.join(path_component(&score_box.tournament)).join(path_component(&score_box.draw));
		create_dir(&parent)?;

		for score in &score_box.scores {
			let path = parent.join(format!("{}_{}.csv", path_component(&score.country_one), path_component(&score.country_two)));
			write_scoreboard(score, &path)?;
			written.push(path);
		}
	}

	Ok(written)
}

fn write_scoreboard(score: &MatchScore, path: &Path) -> Result<(), ExportError> {
	let board = &score.scoreboard;
	let mut wtr = Writer::from_path(path).map_err(|e| ExportError::csv_error(path, e))?;

	let mut header = vec![String::new()];
	header.extend((0..board.width()).map(|i| i.to_string()));
	wtr.write_record(&header).map_err(|e| ExportError::csv_error(path, e))?;

	for (label, row) in [&score.country_one, &score.country_two].into_iter().zip(board.rows()) {
		let record = std::iter::once(label.as_str()).chain(row.iter().map(String::as_str));
		wtr.write_record(record).map_err(|e| ExportError::csv_error(path, e))?;
	}

	wtr.flush().map_err(|e| ExportError::io_error(path, e))
}

/// Makes a label from the markup safe to use as a single path segment.
/// Separators become `_`, and a name made only of dots has them replaced.
fn path_component(label: &str) -> String {
	let segment: String = label.chars().map(|c| if matches!(c, '/' | '\\') { '_' } else { c }).collect();
	if segment.chars().all(|c| c == '.') {
		segment.replace('.', "_")
	} else {
		segment
	}
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
	fs::create_dir_all(path).map_err(|e| ExportError::io_error(path, e))
}

/// A dense draw matrix read back from CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseSlice {
	pub columns: Vec<String>,
	pub rows: Vec<(String, Vec<Cell>)>,
}

pub fn read_dense_slice(path: &Path) -> Result<DenseSlice, ExportError> {
	let mut rdr = ReaderBuilder::new().has_headers(false).from_path(path).map_err(|e| ExportError::csv_error(path, e))?;
	let mut records = rdr.records();

	let header = match records.next() {
		Some(record) => record.map_err(|e| ExportError::csv_error(path, e))?,
		None => {
			return Err(ExportError::Malformed {
				path: path.to_path_buf(),
				reason: "missing header row".to_string(),
			})
		}
	};
	let columns: Vec<String> = header.iter().skip(1).map(str::to_string).collect();

	let mut rows = Vec::new();
	for record in records {
		let record = record.map_err(|e| ExportError::csv_error(path, e))?;
		let mut fields = record.iter();
		let label = fields.next().unwrap_or_default().to_string();
		let cells: Vec<Cell> = fields.map(Cell::from_field).collect();
		if cells.len() != columns.len() {
			return Err(ExportError::Malformed {
				path: path.to_path_buf(),
				reason: format!("row {label:?} has {} cells, expected {}", cells.len(), columns.len()),
			});
		}
		rows.push((label, cells));
	}

	Ok(DenseSlice { columns, rows })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostics::CollectingSink;
	use crate::schema::{CountryTable, Scoreboard};

	fn strings(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	fn dense_grid() -> ScoreGrid {
		let table: CountryTable = [("Kenya", "KEN"), ("Uganda", "UGA"), ("Tanzania", "TAN")].into_iter().collect();
		let mut grid = ScoreGrid::new("test_cup");
		grid.prime(&strings(&["Kenya", "Uganda", "Tanzania"]), &strings(&["round_1", "final"]), &table, &CollectingSink::new())
			.unwrap();
		grid.add_entry("KEN", "UGA", "round_1", "6").unwrap();
		grid.add_entry("UGA", "KEN", "round_1", "3").unwrap();
		grid.add_entry("TAN", "UGA", "final", "5").unwrap();
		grid
	}

	fn match_score(c1: &str, c2: &str) -> MatchScore {
		MatchScore {
			country_one: c1.into(),
			country_two: c2.into(),
			scoreboard: Scoreboard::try_new("draw", strings(&["1", "0", "1"]), strings(&["0", "0", "0"])).unwrap(),
			game_time: String::new(),
		}
	}

	#[test]
	fn test_dense_export_layout() {
		let dir = tempfile::tempdir().unwrap();
		let grid = dense_grid();
		let files = export_dense(&grid, dir.path(), None).unwrap();

		assert_eq!(files, vec![dir.path().join("test_cup/draw_round_1.csv"), dir.path().join("test_cup/draw_final.csv")]);
		let content = fs::read_to_string(&files[0]).unwrap();
		assert_eq!(content, ",KEN,UGA,TAN\nKEN,-1,6,-1\nUGA,3,-1,-1\nTAN,-1,-1,-1\n");
	}

	#[test]
	fn test_dense_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let grid = dense_grid();
		let files = export_dense(&grid, dir.path(), None).unwrap();

		for (k, path) in files.iter().enumerate() {
			let slice = read_dense_slice(path).unwrap();
			assert_eq!(slice.columns, grid.countries());
			let expected: Vec<(String, Vec<Cell>)> = grid.slice(k).unwrap().into_iter().map(|(label, cells)| (label.to_string(), cells.to_vec())).collect();
			assert_eq!(slice.rows, expected);
		}
	}

	#[test]
	fn test_dense_export_with_override_name() {
		let dir = tempfile::tempdir().unwrap();
		let files = export_dense(&dense_grid(), dir.path(), Some("renamed")).unwrap();
		assert!(files.iter().all(|p| p.starts_with(dir.path().join("renamed"))));
	}

	#[test]
	fn test_score_export_paths_are_not_nested() {
		let dir = tempfile::tempdir().unwrap();
		let mut grid = ScoreGrid::new("test_cup");
		grid.add_draw_entry(vec![match_score("KEN", "UGA"), match_score("TAN", "KEN")], "draw_1", "test_cup");
		grid.add_draw_entry(vec![match_score("UGA", "TAN")], "draw_1", "test_cup");
		grid.add_draw_entry(vec![match_score("KEN", "TAN")], "final", "test_cup");

		let files = export_draw_scores(&grid, dir.path()).unwrap();
		let root = dir.path().join("test_cup");
		assert_eq!(
			files,
			vec![
				root.join("draw_1/KEN_UGA.csv"),
				root.join("draw_1/TAN_KEN.csv"),
				root.join("draw_1/UGA_TAN.csv"),
				root.join("final/KEN_TAN.csv"),
			]
		);
		assert!(!root.join("draw_1/draw_1").exists());
		assert!(!root.join("draw_1/final").exists());

		let content = fs::read_to_string(root.join("final/KEN_TAN.csv")).unwrap();
		assert_eq!(content, ",0,1,2\nKEN,1,0,1\nTAN,0,0,0\n");
	}

	#[test]
	fn test_save_data_grids_dispatches_on_mode() {
		let dir = tempfile::tempdir().unwrap();
		let mut scores = ScoreGrid::new("league");
		scores.add_draw_entry(vec![match_score("KEN", "UGA")], "draw_1", "league");

		let dense = save_data_grids(&dir.path().join("dense"), &[dense_grid()], ExportMode::Normal).unwrap();
		let boards = save_data_grids(&dir.path().join("boards"), &[scores], ExportMode::Scores).unwrap();

		assert_eq!(dense, vec!["test_cup"]);
		assert_eq!(boards, vec!["league"]);
		assert!(dir.path().join("dense/test_cup/draw_final.csv").is_file());
		assert!(dir.path().join("boards/league/draw_1/KEN_UGA.csv").is_file());
	}

	#[test]
	fn test_repeated_draw_keeps_recorded_scores() {
		let dir = tempfile::tempdir().unwrap();
		let table: CountryTable = [("Kenya", "KEN"), ("Uganda", "UGA")].into_iter().collect();
		let mut grid = ScoreGrid::new("cup");
		grid.prime(&strings(&["Kenya", "Uganda"]), &strings(&["round_1", "final", "round_1"]), &table, &CollectingSink::new())
			.unwrap();
		grid.add_entry("KEN", "UGA", "round_1", "6").unwrap();

		let files = export_dense(&grid, dir.path(), None).unwrap();

		assert_eq!(files, vec![dir.path().join("cup/draw_round_1.csv"), dir.path().join("cup/draw_final.csv")]);
		let content = fs::read_to_string(&files[0]).unwrap();
		assert_eq!(content, ",KEN,UGA\nKEN,-1,6\nUGA,-1,-1\n");
	}

	#[test]
	fn test_markup_names_stay_inside_output_folder() {
		let dir = tempfile::tempdir().unwrap();
		let out = dir.path().join("out");
		let table: CountryTable = [("Kenya", "KEN"), ("Uganda", "UGA")].into_iter().collect();
		let mut grid = ScoreGrid::new("../escape");
		grid.prime(&strings(&["Kenya", "Uganda"]), &strings(&["a/b"]), &table, &CollectingSink::new()).unwrap();
		grid.add_draw_entry(vec![match_score("KEN", "UGA")], "..", "..");

		let dense = export_dense(&grid, &out, None).unwrap();
		let boards = export_draw_scores(&grid, &out).unwrap();

		assert_eq!(dense, vec![out.join(".._escape").join("draw_a_b.csv")]);
		assert_eq!(boards, vec![out.join("__").join("__").join("KEN_UGA.csv")]);
		assert!(!dir.path().join("escape").exists());
	}

	#[test]
	fn test_path_component() {
		let cases = vec![("test_cup", "test_cup"), ("a/b", "a_b"), ("a\\b", "a_b"), ("..", "__"), (".", "_"), ("v1.2", "v1.2")];
		for (label, expected) in cases {
			assert_eq!(path_component(label), expected, "{label:?}");
		}
	}

	#[test]
	fn test_read_rejects_ragged_rows() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.csv");
		fs::write(&path, ",KEN,UGA\nKEN,-1\n").unwrap();

		let err = read_dense_slice(&path).unwrap_err();
		assert!(matches!(err, ExportError::Csv { .. } | ExportError::Malformed { .. }));
	}

	#[test]
	fn test_export_into_unwritable_location_fails() {
		let dir = tempfile::tempdir().unwrap();
		let blocker = dir.path().join("blocker");
		fs::write(&blocker, "").unwrap();

		let err = export_dense(&dense_grid(), &blocker, None).unwrap_err();
		assert!(matches!(err, ExportError::Io { .. }));
	}
}
