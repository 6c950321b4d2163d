//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated environment: its own config file and resource locations.
///
/// # Example
/// ```no_run
/// use catview_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_catalog().with_sample_metadata();
/// let result = world.run(&["list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    catalog: String,
    metadata: String,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new environment. Resources point at files that do not
    /// exist yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();
        let catalog = base.join("catalogo_completo_actual.csv");
        let metadata = base.join("build_successful.txt");
        let config_path = base.join("config.toml");

        Self {
            catalog: catalog.display().to_string(),
            metadata: metadata.display().to_string(),
            config_path,
            temp_dir,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn catalog_location(&self) -> &str {
        &self.catalog
    }

    pub fn metadata_location(&self) -> &str {
        &self.metadata
    }

    /// Write `body` as the catalog CSV.
    pub fn with_catalog(self, body: &str) -> Self {
        std::fs::write(&self.catalog, body).expect("Failed to write catalog");
        self
    }

    pub fn with_sample_catalog(self) -> Self {
        self.with_catalog(&fixtures::sample_catalog())
    }

    /// Write `body` as the build metadata file.
    pub fn with_metadata(self, body: &str) -> Self {
        std::fs::write(&self.metadata, body).expect("Failed to write metadata");
        self
    }

    pub fn with_sample_metadata(self) -> Self {
        self.with_metadata(&fixtures::sample_metadata())
    }

    /// Write a config file; its resource locations are still overridden
    /// on the command line unless `run_with_config_only` is used.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this environment's config and
    /// resource locations.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--catalog")
            .arg(&self.catalog)
            .arg("--metadata")
            .arg(&self.metadata)
            .current_dir(self.temp_dir.path())
    }

    /// Execute the `catview` binary with this environment's settings.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("catview")
            .map_err(|e| anyhow::anyhow!("Failed to find catview binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);
        Self::execute(cmd)
    }

    /// Execute with only `--config`, so locations come from the file.
    #[allow(deprecated)]
    pub fn run_with_config_only(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("catview")
            .map_err(|e| anyhow::anyhow!("Failed to find catview binary: {}", e))?;
        cmd.arg("--config")
            .arg(&self.config_path)
            .current_dir(self.temp_dir.path())
            .args(args);
        Self::execute(cmd)
    }

    fn execute(mut cmd: Command) -> Result<CliResult> {
        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
