use std::path::PathBuf;

use clap::Parser;

use omni_scanner::{ScanConfig, ScanError};

#[derive(Debug, Parser)]
#[command(name = "omni-context")]
#[command(version)]
#[command(
    about = "Index a context directory: Python signatures, prose titles and text previews as JSON."
)]
pub(crate) struct Cli {
    /// Directory to scan (default: <exe dir>/../../context_files)
    #[arg(long, value_name = "DIR")]
    pub(crate) root: Option<PathBuf>,

    /// Scan a single file and print its entry
    #[arg(long, value_name = "FILE", conflicts_with = "root")]
    pub(crate) file: Option<PathBuf>,

    /// Load scan settings from a TOML file
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Only disclose functions defined at module level
    #[arg(long)]
    pub(crate) top_level_only: bool,

    /// Also disclose `async def` functions
    #[arg(long)]
    pub(crate) include_async: bool,

    /// Scan files on the rayon thread pool
    #[arg(long)]
    pub(crate) parallel: bool,
}

impl Cli {
    /// Resolve the effective config: TOML file first, then switches.
    ///
    /// Switches only ever turn an option on.
    pub(crate) fn scan_config(&self) -> Result<ScanConfig, ScanError> {
        let config = match &self.config {
            Some(path) => ScanConfig::load(path)?,
            None => ScanConfig::default(),
        };
        let top_level_only = config.top_level_only || self.top_level_only;
        let include_async = config.include_async || self.include_async;
        let parallel = config.parallel || self.parallel;
        Ok(config
            .with_top_level_only(top_level_only)
            .with_include_async(include_async)
            .with_parallel(parallel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["omni-context"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.file.is_none());
        assert_eq!(cli.scan_config().unwrap(), ScanConfig::default());
    }

    #[test]
    fn test_root_and_file_conflict() {
        let result = Cli::try_parse_from(["omni-context", "--root", "a", "--file", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_switches_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scan.toml");
        fs::write(&path, "include_async = true\nsummary_chars = 10\n").unwrap();

        let cli = Cli::try_parse_from([
            "omni-context",
            "--config",
            path.to_str().unwrap(),
            "--top-level-only",
        ])
        .unwrap();
        let config = cli.scan_config().unwrap();
        assert!(config.include_async);
        assert!(config.top_level_only);
        assert!(!config.parallel);
        assert_eq!(config.summary_chars, 10);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::try_parse_from(["omni-context", "--config", "/nonexistent/scan.toml"])
            .unwrap();
        assert!(matches!(cli.scan_config(), Err(ScanError::NotFound(_))));
    }
}
