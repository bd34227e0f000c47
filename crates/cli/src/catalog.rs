//! Source discovery and the icon catalog with its JSON manifest.

use crate::{CompileError, CompilerConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use svgx_core::component_name;

/// One cataloged icon source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// File stem of the source.
    pub id: String,
    /// Component name, unique across the catalog.
    pub name: String,
    /// Name of the directory holding the source.
    pub category: String,
    /// File name with extension.
    pub filename: String,
    /// Source path relative to the project root, `/`-separated.
    pub filepath: String,
}

impl Asset {
    /// Derives the record for `path`, reporting `filepath` relative to `root`.
    pub fn from_path(root: &Path, path: &Path) -> Result<Self, CompileError> {
        let invalid = || CompileError::InvalidPath(path.to_path_buf());
        let filename = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
        let id = path.file_stem().and_then(|n| n.to_str()).ok_or_else(invalid)?;
        let category = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        Ok(Self {
            id: id.to_string(),
            name: component_name(id),
            category: category.to_string(),
            filename: filename.to_string(),
            filepath: relative_filepath(root, path),
        })
    }

    /// Location of the source file on disk.
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.filepath)
    }
}

fn relative_filepath(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Lists files matching the configured source glob.
///
/// Files are ordered by their full path string, so `a.svg` sorts before the
/// contents of a sibling directory `a/`.
pub fn discover(config: &CompilerConfig) -> Result<Vec<PathBuf>, CompileError> {
    let pattern = config.source_glob();
    let entries = glob::glob(&pattern).map_err(|source| CompileError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| {
            let path = err.path().to_path_buf();
            CompileError::io(path, err.into_error())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by_cached_key(|path| path.to_string_lossy().into_owned());
    log::debug!("Discovered {} source files under {pattern}", files.len());
    Ok(files)
}

/// Ordered set of assets with unique component names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    assets: Vec<Asset>,
}

impl Catalog {
    /// Builds the catalog in the order `files` are given.
    ///
    /// Fails on the first file whose component name was already claimed by a
    /// different path, whatever its category.
    pub fn build<I, P>(root: &Path, files: I) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut assets = Vec::new();
        for file in files {
            let asset = Asset::from_path(root, file.as_ref())?;
            if let Some(existing) = seen.get(&asset.name) {
                if *existing != asset.filepath {
                    return Err(CompileError::DuplicateName {
                        category: asset.category,
                        name: asset.name,
                        filename: asset.filename,
                        existing: existing.clone(),
                    });
                }
                continue;
            }
            seen.insert(asset.name.clone(), asset.filepath.clone());
            assets.push(asset);
        }
        Ok(Self { assets })
    }

    /// Assets in discovery order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Number of assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Manifest JSON: an array of asset records, 2-space indented.
    pub fn to_json(&self) -> Result<String, CompileError> {
        Ok(serde_json::to_string_pretty(&self.assets)?)
    }

    /// Reads a manifest back into a catalog.
    pub fn from_json(json: &str) -> Result<Self, CompileError> {
        let assets: Vec<Asset> = serde_json::from_str(json)?;
        Ok(Self { assets })
    }

    /// Writes the manifest to `path`, replacing any previous one.
    pub fn write_manifest(&self, path: &Path) -> Result<(), CompileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CompileError::io(parent, source))?;
        }
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| CompileError::io(path, source))
    }
}
