pub mod config {
	use crate::error::ParseError;
	use scraper::{ElementRef, Selector};

	#[derive(Debug, Clone, Copy)]
	pub enum DrawSelectors {
		Heading,
		TeamsSection,
		TeamBlock,
		TeamName,
		ResultsSection,
		Column,
		Paragraph,
		Link,
		DrawSection,
		DrawTable,
		DrawCell,
		ResultDisplay,
		GameTable,
		GameHeader,
		GameRow,
		GameTeam,
		GameEnd,
		GameTotal,
	}

	impl DrawSelectors {
		pub fn selector(&self) -> &'static str {
			match self {
				DrawSelectors::Heading => "body h2",
				DrawSelectors::TeamsSection => "div#infoteams",
				DrawSelectors::TeamBlock => "div.col-md-6",
				DrawSelectors::TeamName => "h5",
				DrawSelectors::ResultsSection => "div#inforesults",
				DrawSelectors::Column => "div.col-md-12",
				DrawSelectors::Paragraph => "p",
				DrawSelectors::Link => "a",
				DrawSelectors::DrawSection => "div#infodraw",
				DrawSelectors::DrawTable => "table.table",
				DrawSelectors::DrawCell => "td.col-md-2",
				DrawSelectors::ResultDisplay => "div#resultdisplay",
				DrawSelectors::GameTable => "table.game-table",
				DrawSelectors::GameHeader => "thead th.game-header",
				DrawSelectors::GameRow => "tbody tr",
				DrawSelectors::GameTeam => "td.game-team",
				DrawSelectors::GameEnd => "td.game-end10",
				DrawSelectors::GameTotal => "td.game-total",
			}
		}

		pub fn parse(&self) -> Result<Selector, ParseError> {
			Selector::parse(self.selector()).map_err(|_| ParseError::InvalidSelector {
				selector: self.selector().to_string(),
			})
		}
	}

	/// Every selector the extractors use, compiled once per run.
	#[derive(Debug)]
	pub struct TournamentSelectors {
		pub heading: Selector,
		pub teams_section: Selector,
		pub team_block: Selector,
		pub team_name: Selector,
		pub results_section: Selector,
		pub column: Selector,
		pub paragraph: Selector,
		pub link: Selector,
		pub draw_section: Selector,
		pub draw_table: Selector,
		pub draw_cell: Selector,
		pub result_display: Selector,
		pub game_table: Selector,
		pub game_header: Selector,
		pub game_row: Selector,
		pub game_team: Selector,
		pub game_end: Selector,
		pub game_total: Selector,
	}

	impl TournamentSelectors {
		pub fn new() -> Result<Self, ParseError> {
			Ok(TournamentSelectors {
				heading: DrawSelectors::Heading.parse()?,
				teams_section: DrawSelectors::TeamsSection.parse()?,
				team_block: DrawSelectors::TeamBlock.parse()?,
				team_name: DrawSelectors::TeamName.parse()?,
				results_section: DrawSelectors::ResultsSection.parse()?,
				column: DrawSelectors::Column.parse()?,
				paragraph: DrawSelectors::Paragraph.parse()?,
				link: DrawSelectors::Link.parse()?,
				draw_section: DrawSelectors::DrawSection.parse()?,
				draw_table: DrawSelectors::DrawTable.parse()?,
				draw_cell: DrawSelectors::DrawCell.parse()?,
				result_display: DrawSelectors::ResultDisplay.parse()?,
				game_table: DrawSelectors::GameTable.parse()?,
				game_header: DrawSelectors::GameHeader.parse()?,
				game_row: DrawSelectors::GameRow.parse()?,
				game_team: DrawSelectors::GameTeam.parse()?,
				game_end: DrawSelectors::GameEnd.parse()?,
				game_total: DrawSelectors::GameTotal.parse()?,
			})
		}
	}

	/// Text of every descendant text node, each trimmed, empty ones dropped.
	pub fn stripped_text(element: ElementRef<'_>) -> String {
		element.text().map(str::trim).filter(|t| !t.is_empty()).collect()
	}

	/// First descendant of `scope` matching `selector`, or a `MissingElement`
	/// error naming it.
	pub fn first_match<'a>(scope: ElementRef<'a>, selector: &Selector, which: DrawSelectors) -> Result<ElementRef<'a>, ParseError> {
		scope
			.select(selector)
			.find(|el| el.id() != scope.id())
			.ok_or_else(|| ParseError::missing_element_error(which.selector()))
	}
}
