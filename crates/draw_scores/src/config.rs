use clap::{Parser, Subcommand};
use draw_parser::pipeline::ExtractionMode;
use file_reader::FileConfig;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(name = "draw_scores")]
#[command(about = "Extracts tournament draw results from HTML pages into CSV score grids", long_about = None)]
pub struct Config {
	#[command(flatten)]
	pub files: FileConfig,

	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log level
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
	/// One final score per country pair and draw
	Totals {
		/// Overrides <output-root>/total_scores
		#[arg(long)]
		output_dir: Option<PathBuf>,
	},
	/// Full per-end scoreboards for every match
	Scores {
		/// Overrides <output-root>/scores
		#[arg(long)]
		output_dir: Option<PathBuf>,
	},
}

impl Commands {
	pub const fn mode(&self) -> ExtractionMode {
		match self {
			Self::Totals { .. } => ExtractionMode::Totals,
			Self::Scores { .. } => ExtractionMode::Scores,
		}
	}

	pub fn output_dir(&self, output_root: &Path) -> PathBuf {
		match self {
			Self::Totals { output_dir: Some(dir) } | Self::Scores { output_dir: Some(dir) } => dir.clone(),
			Self::Totals { output_dir: None } => output_root.join("total_scores"),
			Self::Scores { output_dir: None } => output_root.join("scores"),
		}
	}
}
