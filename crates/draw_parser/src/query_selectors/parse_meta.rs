use crate::error::{ExtractionError, ParseError};
use crate::query_selectors::{first_match, stripped_text, DrawSelectors, TournamentSelectors};
use crate::schema::{normalize_label, CountryTable, TournamentMeta};
use scraper::Html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
	Draw,
	Country,
}

/// Decides whether a results link points at a draw or at a country.
///
/// Country links are labelled with their abbreviation, so any label that is
/// a known code is a country and everything else is a draw. This relies on
/// the markup never labelling a draw with a country code.
pub fn classify_link(label: &str, table: &CountryTable) -> LinkKind {
	if table.is_abbreviation(label) {
		LinkKind::Country
	} else {
		LinkKind::Draw
	}
}

/// Pulls the tournament name, participant list and draw list out of a page.
pub fn extract_meta_data(document: &Html, table: &CountryTable, selectors: &TournamentSelectors) -> Result<TournamentMeta, ExtractionError> {
	let root = document.root_element();

	// teams, in page order
	let teams = first_match(root, &selectors.teams_section, DrawSelectors::TeamsSection)?;
	let countries = teams
		.select(&selectors.team_block)
		.map(|block| first_match(block, &selectors.team_name, DrawSelectors::TeamName).map(stripped_text))
		.collect::<Result<Vec<_>, _>>()?;

	// draws
	let results = first_match(root, &selectors.results_section, DrawSelectors::ResultsSection)?;
	let column = first_match(results, &selectors.column, DrawSelectors::Column)?;
	let paragraph = first_match(column, &selectors.paragraph, DrawSelectors::Paragraph)?;
	let draws = paragraph
		.select(&selectors.link)
		.map(stripped_text)
		.filter(|label| classify_link(label, table) == LinkKind::Draw)
		.map(|label| normalize_label(&label))
		.collect();

	let heading = document
		.select(&selectors.heading)
		.next()
		.map(stripped_text)
		.filter(|h| !h.is_empty())
		.ok_or_else(|| ParseError::missing_element_error(DrawSelectors::Heading.selector()))?;

	Ok(TournamentMeta {
		name: normalize_label(&heading),
		countries,
		draws,
	})
}
