use crate::error::StructureError;

/// Lowercases a heading or link label and replaces spaces with underscores,
/// e.g. `"Test Cup"` becomes `test_cup`.
pub fn normalize_label(label: &str) -> String {
	label.trim().to_lowercase().replace(' ', "_")
}

/// What one tournament page says about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentMeta {
	pub name: String,
	/// Full country names in page order.
	pub countries: Vec<String>,
	/// Normalized draw names in page order, not deduplicated.
	pub draws: Vec<String>,
}

/// One side of a head-to-head result: `value` is the score of `country_one`
/// against `country_two` in `draw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
	pub country_one: String,
	pub country_two: String,
	pub draw: String,
	pub value: String,
}

impl MatchRecord {
	/// Builds both sides of one result row, `(c1, c2, s1)` then `(c2, c1, s2)`.
	pub fn mirrored_pair(teams: (&str, &str), draw: &str, scores: (&str, &str)) -> [MatchRecord; 2] {
		let (c1, c2) = teams;
		let (s1, s2) = scores;
		[
			MatchRecord {
				country_one: c1.to_string(),
				country_two: c2.to_string(),
				draw: draw.to_string(),
				value: s1.to_string(),
			},
			MatchRecord {
				country_one: c2.to_string(),
				country_two: c1.to_string(),
				draw: draw.to_string(),
				value: s2.to_string(),
			},
		]
	}
}

/// Per-unit scores plus the total, one row per team. Both rows always have
/// the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
	rows: [Vec<String>; 2],
}

impl Scoreboard {
	pub fn try_new(draw: &str, first: Vec<String>, second: Vec<String>) -> Result<Self, StructureError> {
		if first.len() != second.len() {
			return Err(StructureError::RaggedScoreboard {
				draw: draw.to_string(),
				first: first.len(),
				second: second.len(),
			});
		}
		Ok(Self { rows: [first, second] })
	}

	pub fn width(&self) -> usize {
		self.rows[0].len()
	}

	pub fn rows(&self) -> &[Vec<String>; 2] {
		&self.rows
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchScore {
	pub country_one: String,
	pub country_two: String,
	pub scoreboard: Scoreboard,
	/// Not present in the current markup; always empty.
	pub game_time: String,
}

/// All game scoreboards of one results section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawScores {
	pub draw: String,
	pub tournament: String,
	pub scores: Vec<MatchScore>,
}
