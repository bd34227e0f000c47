//! Batch compiler: catalog, render in parallel, write in catalog order.

use crate::batch::{AssetFailure, CompileReport, RenderedAsset};
use crate::catalog::{Asset, Catalog, discover};
use crate::{CompileError, CompilerConfig};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use svgx_core::{Cleaner, Passthrough, SvgCleaner, compile_markup};
use svgx_react::codegen::{
    ComponentModuleOptions, generate_component_module, module_index, package_index,
};

/// File name of the aggregate and per-component re-export modules.
pub const INDEX_FILE: &str = "index.ts";

/// Reads, compiles and templates one asset without touching the output tree.
pub fn render_asset(
    root: &Path,
    asset: &Asset,
    view_box: &str,
    cleaner: &dyn Cleaner,
) -> Result<RenderedAsset, CompileError> {
    let path = asset.source_path(root);
    let source = fs::read_to_string(&path).map_err(|source| CompileError::io(&path, source))?;
    let jsx = compile_markup(&source, cleaner).map_err(|err| CompileError::Asset {
        filepath: asset.filepath.clone(),
        source: err.in_file(asset.filepath.clone()),
    })?;

    let options = ComponentModuleOptions {
        view_box,
        ..ComponentModuleOptions::new(&asset.name, &jsx)
    };
    log::debug!("Rendered {} from {}", asset.name, asset.filepath);
    Ok(RenderedAsset {
        name: asset.name.clone(),
        component: generate_component_module(&options),
        index: module_index(&asset.name),
    })
}

/// Renders every asset of `catalog`, preserving catalog order in the result.
///
/// `jobs` caps the rayon pool size; `None` uses the global pool.
pub fn render_catalog(
    config: &CompilerConfig,
    catalog: &Catalog,
    cleaner: &dyn Cleaner,
) -> Vec<Result<RenderedAsset, CompileError>> {
    let pool = config.jobs.and_then(|jobs| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .ok()
    });

    let render = |asset: &Asset| render_asset(&config.root, asset, &config.view_box, cleaner);
    if let Some(pool) = pool {
        pool.install(|| catalog.assets().par_iter().map(render).collect())
    } else {
        catalog.assets().par_iter().map(render).collect()
    }
}

/// Runs a full compile with the cleaner chosen by `config.clean`.
pub fn compile(config: &CompilerConfig) -> Result<CompileReport, CompileError> {
    if config.clean {
        compile_with(config, &SvgCleaner)
    } else {
        compile_with(config, &Passthrough)
    }
}

/// Runs a full compile: discover, catalog, write manifest, render, write outputs.
///
/// Without `continue_on_error` the first failing asset aborts the run after
/// the assets before it were written; the aggregate index is then not written.
/// `continue_on_error` only skips markup failures: I/O errors always abort.
pub fn compile_with(
    config: &CompilerConfig,
    cleaner: &dyn Cleaner,
) -> Result<CompileReport, CompileError> {
    let start = Instant::now();

    let files = discover(config)?;
    let catalog = Catalog::build(&config.root, &files)?;
    log::info!("Cataloged {} icons", catalog.len());

    let manifest = config.manifest_path();
    catalog.write_manifest(&manifest)?;
    let mut written = vec![manifest];

    let rendered = render_catalog(config, &catalog, cleaner);

    let out = config.out_path();
    let mut failures = Vec::new();
    let mut names = Vec::with_capacity(rendered.len());
    for (asset, result) in catalog.assets().iter().zip(rendered) {
        match result {
            Ok(rendered) => {
                written.extend(write_asset(&out, &rendered)?);
                names.push(rendered.name);
            }
            Err(error @ CompileError::Asset { .. }) if config.continue_on_error => {
                log::warn!("Skipping {}: {error}", asset.filepath);
                failures.push(AssetFailure {
                    name: asset.name.clone(),
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }

    let index = out.join(INDEX_FILE);
    fs::write(&index, package_index(&names)).map_err(|source| CompileError::io(&index, source))?;
    written.push(index);

    let report = CompileReport {
        catalog,
        written,
        failures,
        elapsed: start.elapsed(),
    };
    log::info!(
        "Compiled {}/{} icons into {} in {:.1}ms",
        report.succeeded(),
        report.total(),
        out.display(),
        report.elapsed.as_secs_f64() * 1000.0
    );
    Ok(report)
}

/// Writes `<out>/<Name>/<Name>.tsx` and `<out>/<Name>/index.ts`.
fn write_asset(out: &Path, rendered: &RenderedAsset) -> Result<[PathBuf; 2], CompileError> {
    let dir = out.join(&rendered.name);
    fs::create_dir_all(&dir).map_err(|source| CompileError::io(&dir, source))?;

    let component = dir.join(format!("{}.tsx", rendered.name));
    fs::write(&component, &rendered.component)
        .map_err(|source| CompileError::io(&component, source))?;

    let index = dir.join(INDEX_FILE);
    fs::write(&index, &rendered.index).map_err(|source| CompileError::io(&index, source))?;

    Ok([component, index])
}
