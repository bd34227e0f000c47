use std::path::PathBuf;
use svgx_core::SvgxError;
use thiserror::Error;

/// Errors that abort (or, for `Asset`, skip part of) a compile run.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Filesystem error while reading sources or writing output.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The source glob could not be compiled.
    #[error("Invalid glob pattern {pattern}: {source}")]
    Pattern {
        /// Pattern as built from the config
        pattern: String,
        /// Underlying error
        #[source]
        source: glob::PatternError,
    },
    /// A discovered path has no usable file name.
    #[error("Invalid source path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Two sources derive the same component name.
    #[error("Duplicate icon data {category}/{name}, {filename} (already defined by {existing})")]
    DuplicateName {
        /// Category of the offending file
        category: String,
        /// Derived component name
        name: String,
        /// File name of the offending file
        filename: String,
        /// Relative path of the asset that claimed the name first
        existing: String,
    },
    /// Manifest or config (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Config file content is unusable.
    #[error("Invalid config {}: {message}", .path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// What is wrong with it
        message: String,
    },
    /// One asset's markup could not be compiled.
    #[error("Failed to compile {filepath}: {source}")]
    Asset {
        /// Relative path of the asset
        filepath: String,
        /// Underlying markup error
        #[source]
        source: SvgxError,
    },
}

impl CompileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
