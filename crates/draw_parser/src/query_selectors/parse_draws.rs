use crate::error::{ExtractionError, StructureError};
use crate::query_selectors::{first_match, DrawSelectors, TournamentSelectors};
use crate::schema::{normalize_label, MatchRecord};
use scraper::{ElementRef, Html};

const PAIR_SEPARATOR: &str = " - ";

/// Line offsets of the fields inside a draw cell's text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
	pub draw_line: usize,
	pub teams_line: usize,
	pub score_line: usize,
}

impl Default for RowLayout {
	fn default() -> Self {
		RowLayout {
			draw_line: 0,
			teams_line: 2,
			score_line: 4,
		}
	}
}

impl RowLayout {
	pub fn min_lines(&self) -> usize {
		self.draw_line.max(self.teams_line).max(self.score_line) + 1
	}
}

/// Reads every draw cell into mirrored match records.
///
/// A cell's text nodes are joined with newlines and split back into lines;
/// cells shorter than the layout are headers or spacers and are skipped.
pub fn extract_draw_information(document: &Html, selectors: &TournamentSelectors, layout: &RowLayout) -> Result<Vec<MatchRecord>, ExtractionError> {
	let section = first_match(document.root_element(), &selectors.draw_section, DrawSelectors::DrawSection)?;

	let mut data = Vec::new();
	for table in section.select(&selectors.draw_table) {
		for cell in table.select(&selectors.draw_cell) {
			if let Some(pair) = parse_draw_cell(cell, layout)? {
				data.extend(pair);
			}
		}
	}

	tracing::debug!(records = data.len(), "extracted draw records");
	Ok(data)
}

fn parse_draw_cell(cell: ElementRef<'_>, layout: &RowLayout) -> Result<Option<[MatchRecord; 2]>, StructureError> {
	let content = cell.text().collect::<Vec<_>>().join("\n");
	let lines: Vec<&str> = content.trim().split('\n').collect();
	if lines.len() < layout.min_lines() {
		return Ok(None);
	}

	let draw = normalize_label(strip_enclosing(lines[layout.draw_line].trim()));
	let teams = split_pair(lines[layout.teams_line])?;
	let scores = split_pair(lines[layout.score_line])?;

	Ok(Some(MatchRecord::mirrored_pair(teams, &draw, scores)))
}

/// Drops the first and last character, e.g. the brackets of `[Round 1]`.
fn strip_enclosing(label: &str) -> &str {
	let mut chars = label.chars();
	chars.next();
	chars.next_back();
	chars.as_str()
}

/// Splits `"A - B"` into its two trimmed halves.
pub fn split_pair(segment: &str) -> Result<(&str, &str), StructureError> {
	let segment = segment.trim();
	let parts: Vec<&str> = segment.split(PAIR_SEPARATOR).map(str::trim).collect();
	match parts.as_slice() {
		[first, second] => Ok((*first, *second)),
		_ => Err(StructureError::token_count_error(segment, parts.len())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page(cells: &[&str]) -> String {
		let cells: String = cells.iter().map(|c| format!(r#"<td class="col-md-2">{c}</td>"#)).collect();
		format!(
			r#"<html><body><div id="infodraw">
				<table class="table"><tbody>
					<tr><td class="col-md-2">Header</td></tr>
					<tr>{cells}</tr>
				</tbody></table>
			</div></body></html>"#
		)
	}

	fn extract(html: &str) -> Result<Vec<MatchRecord>, ExtractionError> {
		let document = Html::parse_document(html);
		extract_draw_information(&document, &TournamentSelectors::new().unwrap(), &RowLayout::default())
	}

	#[test]
	fn test_row_produces_mirrored_pair() {
		let records = extract(&page(&["<b>[Round 1]</b> <span>Kenya - Uganda</span> <span>6 - 3</span>"])).unwrap();

		assert_eq!(
			records,
			vec![
				MatchRecord {
					country_one: "Kenya".into(),
					country_two: "Uganda".into(),
					draw: "round_1".into(),
					value: "6".into(),
				},
				MatchRecord {
					country_one: "Uganda".into(),
					country_two: "Kenya".into(),
					draw: "round_1".into(),
					value: "3".into(),
				},
			]
		);
	}

	#[test]
	fn test_every_row_is_mirrored() {
		let records = extract(&page(&[
			"<b>[Round 1]</b> <span>KEN - UGA</span> <span>6 - 3</span>",
			"<b>[Round 2]</b> <span>UGA - TAN</span> <span>10 - 11</span>",
		]))
		.unwrap();

		assert_eq!(records.len(), 4);
		for pair in records.chunks(2) {
			assert_eq!(pair[0].country_one, pair[1].country_two);
			assert_eq!(pair[0].country_two, pair[1].country_one);
			assert_eq!(pair[0].draw, pair[1].draw);
		}
		assert_eq!((records[2].value.as_str(), records[3].value.as_str()), ("10", "11"));
	}

	#[test]
	fn test_short_cells_are_skipped() {
		let records = extract(&page(&["<b>[Round 1]</b> <span>Kenya - Uganda</span>", ""])).unwrap();
		assert!(records.is_empty());
	}

	#[test]
	fn test_bad_pairs_are_structure_errors() {
		let cases = vec![
			("<b>[Round 1]</b> <span>Kenya vs Uganda</span> <span>6 - 3</span>", "Kenya vs Uganda", 1),
			("<b>[Round 1]</b> <span>Kenya - Uganda</span> <span>6 - 3 - 1</span>", "6 - 3 - 1", 3),
		];

		for (cell, segment, found) in cases {
			match extract(&page(&[cell])) {
				Err(ExtractionError::Structure(err)) => assert_eq!(err, StructureError::token_count_error(segment, found)),
				other => panic!("expected structure error for {cell:?}, got {other:?}"),
			}
		}
	}

	#[test]
	fn test_custom_layout() {
		let document = Html::parse_document(&page(&["<b>[Final]</b><span>KEN - UGA</span><span>2 - 1</span>"]));
		let layout = RowLayout {
			draw_line: 0,
			teams_line: 1,
			score_line: 2,
		};
		let records = extract_draw_information(&document, &TournamentSelectors::new().unwrap(), &layout).unwrap();
		assert_eq!(records[0].draw, "final");
		assert_eq!(records[1].value, "1");
	}

	#[test]
	fn test_missing_draw_section() {
		assert!(matches!(extract("<html><body></body></html>"), Err(ExtractionError::Parse(_))));
	}

	#[test]
	fn test_split_pair() {
		assert_eq!(split_pair(" 6 - 3 "), Ok(("6", "3")));
		assert_eq!(split_pair("South Africa - Kenya"), Ok(("South Africa", "Kenya")));
		assert!(split_pair("6-3").is_err());
	}
}
