use clap::Args;
use std::path::PathBuf;

/// Input and output locations shared by every extraction mode.
#[derive(Args, Clone, Debug)]
pub struct FileConfig {
	/// Country table, one "Full Name - ABBR" per line
	#[arg(long, env = "COUNTRIES_FILE", default_value = "data/countries.txt")]
	pub countries_file: PathBuf,
	/// Directory of tournament HTML pages
	#[arg(long, env = "PAGES_DIR", default_value = "data/web_pages")]
	pub pages_dir: PathBuf,
	/// Root folder the CSV output is written under
	#[arg(long, env = "OUTPUT_ROOT", default_value = "output")]
	pub output_root: PathBuf,
}
