//! Result types for a compile run.

use crate::{Catalog, CompileError};
use std::path::PathBuf;
use std::time::Duration;

/// Generated sources for one asset, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAsset {
    /// Component name.
    pub name: String,
    /// Contents of `<Name>.tsx`.
    pub component: String,
    /// Contents of the per-component `index.ts`.
    pub index: String,
}

/// An asset skipped because its markup did not compile.
#[derive(Debug)]
pub struct AssetFailure {
    /// Component name of the asset.
    pub name: String,
    /// Why it failed.
    pub error: CompileError,
}

/// Outcome of a compile run.
#[derive(Debug)]
pub struct CompileReport {
    /// Catalog the run was built from.
    pub catalog: Catalog,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
    /// Assets skipped with `continue_on_error`.
    pub failures: Vec<AssetFailure>,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl CompileReport {
    /// Number of cataloged assets.
    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    /// Number of assets whose component was written.
    pub fn succeeded(&self) -> usize {
        self.total() - self.failed()
    }

    /// Number of skipped assets.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Whether any asset was skipped.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
