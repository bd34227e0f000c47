#![deny(missing_docs)]
//! svgx command-line compiler: discovers SVG sources, writes the catalog
//! manifest and one React component module per icon.

/// Result types for a compile run.
pub mod batch;
/// Source discovery and the catalog manifest.
pub mod catalog;
/// Batch compile driver.
pub mod compiler;
/// Run configuration.
pub mod config;
mod error;

pub use batch::{AssetFailure, CompileReport, RenderedAsset};
pub use catalog::{Asset, Catalog, discover};
pub use compiler::{compile, compile_with, render_asset, render_catalog};
pub use config::CompilerConfig;
pub use error::CompileError;
