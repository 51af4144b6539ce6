//! Non-fatal events raised while building score grids.
//!
//! Components take a `&dyn DiagnosticSink` instead of writing to a global
//! logger, so a caller decides where the events go. The binary forwards them
//! to `tracing`; tests collect them.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
	/// A later country table line replaced an earlier mapping.
	DuplicateCountryKey { line_no: usize, key: String },
	/// A participant has no abbreviation and was left off the grid.
	UnresolvedCountry { tournament: String, name: String },
	/// A results section held no game tables.
	EmptySection { index: usize },
	/// A document failed and produced no grid.
	DocumentSkipped { path: PathBuf, reason: String },
	/// A document produced a grid.
	GridBuilt { name: String, path: PathBuf },
}

impl Diagnostic {
	pub fn is_warning(&self) -> bool {
		matches!(
			self,
			Diagnostic::DuplicateCountryKey { .. } | Diagnostic::UnresolvedCountry { .. } | Diagnostic::DocumentSkipped { .. }
		)
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::DuplicateCountryKey { line_no, key } => {
				write!(f, "country table line {line_no} overwrites existing entry for {key:?}")
			}
			Diagnostic::UnresolvedCountry { tournament, name } => {
				write!(f, "abbreviation not found for country <{name}> in {tournament}, scores will not be registered")
			}
			Diagnostic::EmptySection { index } => write!(f, "results section {index} has no game tables"),
			Diagnostic::DocumentSkipped { path, reason } => write!(f, "skipped {}: {reason}", path.display()),
			Diagnostic::GridBuilt { name, path } => write!(f, "Grid: {name} ({})", path.display()),
		}
	}
}

pub trait DiagnosticSink {
	fn report(&self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
	F: Fn(Diagnostic),
{
	fn report(&self, diagnostic: Diagnostic) {
		self(diagnostic);
	}
}

/// Forwards every diagnostic to the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn report(&self, diagnostic: Diagnostic) {
		match &diagnostic {
			Diagnostic::DocumentSkipped { path, reason } => {
				tracing::error!(path = %path.display(), %reason, "document skipped");
			}
			Diagnostic::GridBuilt { name, .. } => tracing::info!(grid = %name, "{diagnostic}"),
			Diagnostic::EmptySection { .. } => tracing::debug!("{diagnostic}"),
			Diagnostic::DuplicateCountryKey { .. } | Diagnostic::UnresolvedCountry { .. } => tracing::warn!("{diagnostic}"),
		}
	}
}

/// Keeps diagnostics in memory, in the order they were reported.
#[derive(Debug, Default)]
pub struct CollectingSink {
	events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn diagnostics(&self) -> Vec<Diagnostic> {
		self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}

	pub fn warnings(&self) -> Vec<Diagnostic> {
		self.diagnostics().into_iter().filter(Diagnostic::is_warning).collect()
	}
}

impl DiagnosticSink for CollectingSink {
	fn report(&self, diagnostic: Diagnostic) {
		self.events.lock().unwrap_or_else(PoisonError::into_inner).push(diagnostic);
	}
}
