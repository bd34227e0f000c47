//! Compiler configuration: defaults, JSON config files and derived paths.

use crate::CompileError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one compile run.
///
/// Relative `source_dir` and `out_dir` are resolved against `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    /// Project root; manifest paths are written relative to it.
    pub root: PathBuf,
    /// Directory holding the SVG sources.
    pub source_dir: PathBuf,
    /// Glob pattern, relative to `source_dir`.
    pub pattern: String,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Manifest file name inside `out_dir`.
    pub manifest: String,
    /// View box of the generated outer `<svg>`.
    pub view_box: String,
    /// Run the built-in markup cleaner before parsing.
    pub clean: bool,
    /// Skip assets that fail to compile instead of aborting.
    pub continue_on_error: bool,
    /// Maximum number of render threads. Defaults to the number of CPU cores.
    pub jobs: Option<usize>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_dir: PathBuf::from("source"),
            pattern: "**/*.svg".to_string(),
            out_dir: PathBuf::from("dist"),
            manifest: "db.json".to_string(),
            view_box: svgx_react::codegen::DEFAULT_VIEW_BOX.to_string(),
            clean: true,
            continue_on_error: false,
            jobs: None,
        }
    }
}

impl CompilerConfig {
    /// Reads a JSON config file. Missing keys take their default values.
    pub fn from_json_file(path: &Path) -> Result<Self, CompileError> {
        let text = fs::read_to_string(path).map_err(|source| CompileError::io(path, source))?;
        let config: Self = serde_json::from_str(&text).map_err(|err| CompileError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        if config.jobs == Some(0) {
            return Err(CompileError::Config {
                path: path.to_path_buf(),
                message: "jobs must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    /// Absolute or root-relative directory holding the sources.
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    /// Glob matched against the filesystem to discover sources.
    ///
    /// The source directory is escaped so only `pattern` carries wildcards.
    pub fn source_glob(&self) -> String {
        let base = glob::Pattern::escape(&self.source_path().to_string_lossy());
        format!("{}/{}", base.trim_end_matches('/'), self.pattern)
    }

    /// Directory receiving generated files.
    pub fn out_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }

    /// Location of the catalog manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.out_path().join(&self.manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_conventional_layout() {
        let config = CompilerConfig::default();
        assert_eq!(config.source_path(), Path::new("./source"));
        assert_eq!(config.manifest_path(), Path::new("./dist/db.json"));
        assert_eq!(config.source_glob(), "./source/**/*.svg");
        assert!(config.clean);
        assert!(!config.continue_on_error);
    }

    #[test]
    fn absolute_out_dir_ignores_root() {
        let config = CompilerConfig {
            root: PathBuf::from("/project"),
            out_dir: PathBuf::from("/tmp/out"),
            ..CompilerConfig::default()
        };
        assert_eq!(config.out_path(), Path::new("/tmp/out"));
    }

    #[test]
    fn source_glob_escapes_the_directory() {
        let config = CompilerConfig {
            root: PathBuf::from("/work/[icons]"),
            ..CompilerConfig::default()
        };
        assert_eq!(config.source_glob(), "/work/[[]icons[]]/source/**/*.svg");
    }

    #[test]
    fn json_file_fills_missing_keys_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svgx.json");
        fs::write(&path, r#"{ "sourceDir": "icons", "continueOnError": true, "jobs": 2 }"#).unwrap();

        let config = CompilerConfig::from_json_file(&path).unwrap();
        assert_eq!(config.source_dir, PathBuf::from("icons"));
        assert!(config.continue_on_error);
        assert_eq!(config.jobs, Some(2));
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.pattern, "**/*.svg");
    }

    #[test]
    fn json_file_rejects_unknown_types_and_zero_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svgx.json");

        fs::write(&path, r#"{ "clean": "yes" }"#).unwrap();
        assert!(matches!(
            CompilerConfig::from_json_file(&path),
            Err(CompileError::Config { .. })
        ));

        fs::write(&path, r#"{ "jobs": 0 }"#).unwrap();
        assert!(matches!(
            CompilerConfig::from_json_file(&path),
            Err(CompileError::Config { .. })
        ));
    }

    #[test]
    fn missing_json_file_is_an_io_error() {
        let err = CompilerConfig::from_json_file(Path::new("/nonexistent/svgx.json")).unwrap_err();
        assert!(matches!(err, CompileError::Io { .. }));
    }
}
