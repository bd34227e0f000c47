use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use svgx_cli::{CompileError, CompileReport, CompilerConfig, compile};

#[derive(Parser)]
#[command(name = "svgx")]
#[command(author, version, about = "Compile SVG icons into React components", long_about = None)]
struct Cli {
    /// Project root; sources and output are resolved against it
    #[arg(long)]
    root: Option<PathBuf>,
    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Source directory (default: source)
    #[arg(long = "source")]
    source_dir: Option<PathBuf>,
    /// Glob pattern inside the source directory (default: **/*.svg)
    #[arg(long)]
    pattern: Option<String>,
    /// Output directory (default: dist)
    #[arg(short, long = "out")]
    out_dir: Option<PathBuf>,
    /// View box of the generated outer svg (default: 0 0 24 24)
    #[arg(long)]
    view_box: Option<String>,
    /// Compile the markup as-is, without the built-in cleaner
    #[arg(long)]
    no_clean: bool,
    /// Skip icons that fail to compile and report them at the end
    #[arg(long)]
    continue_on_error: bool,
    /// Maximum number of render threads
    #[arg(short, long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    jobs: Option<usize>,
    /// Log per-icon progress
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<CompilerConfig, CompileError> {
        let mut config = match &self.config {
            Some(path) => CompilerConfig::from_json_file(path)?,
            None => CompilerConfig::default(),
        };
        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(source_dir) = self.source_dir {
            config.source_dir = source_dir;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if let Some(out_dir) = self.out_dir {
            config.out_dir = out_dir;
        }
        if let Some(view_box) = self.view_box {
            config.view_box = view_box;
        }
        if self.no_clean {
            config.clean = false;
        }
        if self.continue_on_error {
            config.continue_on_error = true;
        }
        if self.jobs.is_some() {
            config.jobs = self.jobs;
        }
        Ok(config)
    }
}

fn report_failures(report: &CompileReport) {
    eprintln!(
        "{} of {} icons failed to compile:",
        report.failed(),
        report.total()
    );
    for failure in &report.failures {
        eprintln!("  {}: {}", failure.name, failure.error);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = cli.into_config().and_then(|config| compile(&config));
    match result {
        Ok(report) if report.has_failures() => {
            report_failures(&report);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn flags_override_config_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svgx.json");
        fs::write(
            &path,
            r#"{ "sourceDir": "icons", "outDir": "out", "pattern": "*.svg", "jobs": 8 }"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "svgx",
            "--config",
            path.to_str().unwrap(),
            "--out",
            "build",
            "--no-clean",
            "--continue-on-error",
            "-j",
            "3",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.source_dir, PathBuf::from("icons"));
        assert_eq!(config.pattern, "*.svg");
        assert_eq!(config.out_dir, PathBuf::from("build"));
        assert!(!config.clean);
        assert!(config.continue_on_error);
        assert_eq!(config.jobs, Some(3));
    }

    #[test]
    fn without_flags_defaults_apply() {
        let config = Cli::try_parse_from(["svgx"]).unwrap().into_config().unwrap();
        assert_eq!(config, CompilerConfig::default());
    }

    #[test]
    fn zero_jobs_is_rejected() {
        assert!(Cli::try_parse_from(["svgx", "--jobs", "0"]).is_err());
    }
}
