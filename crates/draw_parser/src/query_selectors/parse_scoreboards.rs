use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{ExtractionError, LookupError, StructureError};
use crate::query_selectors::{first_match, stripped_text, DrawSelectors, TournamentSelectors};
use crate::schema::{normalize_label, CountryTable, MatchScore, Scoreboard};
use scraper::{ElementRef, Html};

/// Scoreboards of one results section, named after its draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSection {
	pub draw: String,
	pub scores: Vec<MatchScore>,
}

/// Reads the full per-end scoreboards from the results display.
///
/// Every nested `col-md-12` block is one section and every game table in it
/// one match. A section takes the draw name of its last table; sections
/// without tables are reported and left out.
pub fn extract_draw_information_ii(
	document: &Html,
	table: &CountryTable,
	selectors: &TournamentSelectors,
	sink: &dyn DiagnosticSink,
) -> Result<Vec<DrawSection>, ExtractionError> {
	let display = first_match(document.root_element(), &selectors.result_display, DrawSelectors::ResultDisplay)?;
	let outer = first_match(display, &selectors.column, DrawSelectors::Column)?;

	let mut data = Vec::new();
	for (index, section) in outer.select(&selectors.column).filter(|s| s.id() != outer.id()).enumerate() {
		let mut draw = None;
		let mut scores = Vec::new();

		for game in section.select(&selectors.game_table) {
			let (name, score) = parse_game_table(game, table, selectors)?;
			draw = Some(name);
			scores.push(score);
		}

		match draw {
			Some(draw) => data.push(DrawSection { draw, scores }),
			None => sink.report(Diagnostic::EmptySection { index }),
		}
	}

	Ok(data)
}

fn parse_game_table(game: ElementRef<'_>, table: &CountryTable, selectors: &TournamentSelectors) -> Result<(String, MatchScore), ExtractionError> {
	let header = first_match(game, &selectors.game_header, DrawSelectors::GameHeader)?;
	let draw = normalize_label(&stripped_text(header));

	let rows: Vec<ElementRef<'_>> = game.select(&selectors.game_row).collect();
	let team_row = |row: usize| rows.get(row).copied().ok_or_else(|| StructureError::MissingTeamRow { draw: draw.clone(), row });
	let (first, second) = (team_row(0)?, team_row(1)?);

	let (c1, first_scores) = parse_team_row(first, selectors)?;
	let (c2, second_scores) = parse_team_row(second, selectors)?;

	let scoreboard = Scoreboard::try_new(&draw, first_scores, second_scores)?;
	let country_one = table.abbreviation(&c1).ok_or_else(|| LookupError::unknown_team(&c1))?;
	let country_two = table.abbreviation(&c2).ok_or_else(|| LookupError::unknown_team(&c2))?;

	let score = MatchScore {
		country_one: country_one.to_string(),
		country_two: country_two.to_string(),
		scoreboard,
		game_time: String::new(),
	};
	Ok((draw, score))
}

/// Team name plus every per-end score followed by the total.
fn parse_team_row(row: ElementRef<'_>, selectors: &TournamentSelectors) -> Result<(String, Vec<String>), ExtractionError> {
	let team = stripped_text(first_match(row, &selectors.game_team, DrawSelectors::GameTeam)?);
	let total = first_match(row, &selectors.game_total, DrawSelectors::GameTotal)?;

	let mut scores: Vec<String> = row.select(&selectors.game_end).map(stripped_text).collect();
	scores.push(stripped_text(total));
	Ok((team, scores))
}
