mod config;

use crate::config::Config;
use anyhow::Context;
use clap::Parser;
use draw_parser::diagnostics::TracingSink;
use draw_parser::export::save_data_grids;
use draw_parser::pipeline::{construct_data_grids, construct_data_grids_ii, BatchReport, ExtractionMode};
use file_reader::list_files;
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config)?;

	let report = run(&config)?;
	tracing::info!(grids = ?report.grid_names(), skipped = ?report.failed_paths(), "Completed");
	println!("Completed");
	Ok(())
}

/// Builds every grid for the chosen mode and writes them out. Documents that
/// fail to parse are left in the report; only configuration, country table
/// and export problems abort the run.
fn run(config: &Config) -> anyhow::Result<BatchReport> {
	let mode = config.command.mode();
	let sink = TracingSink;

	let html_files: Vec<PathBuf> = list_files(&config.files.pages_dir).context("could not list tournament pages")?;
	let report = match mode {
		ExtractionMode::Totals => construct_data_grids(&html_files, &config.files.countries_file, &sink),
		ExtractionMode::Scores => construct_data_grids_ii(&html_files, &config.files.countries_file, &sink),
	}
	.context("could not load the country table")?;

	let folder = config.command.output_dir(&config.files.output_root);
	let saved = save_data_grids(&folder, &report.grids, mode.export_mode()).with_context(|| format!("could not save grids under {}", folder.display()))?;
	tracing::info!(?saved, folder = %folder.display(), "grids saved");

	Ok(report)
}

pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
	use std::str::FromStr;
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::from_str(config.rust_log.as_deref().unwrap_or("info")).context("invalid RUST_LOG directive")?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(tracing_subscriber::fmt::layer().event_format(tracing_subscriber::fmt::format().pretty()).with_filter(filter))
		})
		.try_init()
		.context("tracing subscriber already installed")
}
