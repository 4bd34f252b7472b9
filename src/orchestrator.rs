//! Orchestrator for coordinating the release notes workflow
//!
//! This module provides:
//! - Workflow coordination: capture log → load pins → parse → link
//! - Captured-log input from a file or stdin instead of running the update
//! - Non-fatal warnings for missing pins and incomplete change blocks

use crate::cli::CliArgs;
use crate::domain::ReleaseNote;
use crate::error::{AppError, IoError, RunnerError};
use crate::parser::parse_update_log;
use crate::progress::Progress;
use crate::resolved::{PackageMap, RESOLVED_FILENAME};
use crate::runner::{SwiftPackageManager, UpdateRunner};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Manifest that marks a directory as a Swift package
const MANIFEST_FILENAME: &str = "Package.swift";

/// Orchestrator for coordinating the release notes workflow
pub struct Orchestrator<R: UpdateRunner> {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Runner used when no captured log is given
    runner: R,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// Release notes in log order
    pub notes: Vec<ReleaseNote>,
    /// Count announced by the update log
    pub announced: u64,
    /// Problems that did not stop the workflow
    pub warnings: Vec<OrchestratorWarning>,
}

impl OrchestratorResult {
    /// Returns true if no dependency changed
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Problems that are reported but do not fail the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorWarning {
    /// No Package.resolved next to the package manifest
    MissingResolved { path: PathBuf },
    /// Package.resolved could not be used
    InvalidResolved { message: String },
    /// The log announced a different number of changes than were parsed
    CountMismatch { announced: u64, parsed: usize },
}

impl fmt::Display for OrchestratorWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrchestratorWarning::MissingResolved { path } => {
                write!(f, "{} not found, release URLs unavailable", path.display())
            }
            OrchestratorWarning::InvalidResolved { message } => {
                write!(f, "ignoring pins: {}", message)
            }
            OrchestratorWarning::CountMismatch { announced, parsed } => write!(
                f,
                "log announced {} changed dependencies but {} were parsed",
                announced, parsed
            ),
        }
    }
}

impl Orchestrator<SwiftPackageManager> {
    /// Create a new orchestrator running the Swift package manager
    pub fn new(args: CliArgs) -> Self {
        let runner = SwiftPackageManager::new()
            .with_executable(args.swift.clone())
            .with_timeout(args.timeout);
        Self { args, runner }
    }
}

impl<R: UpdateRunner> Orchestrator<R> {
    /// Create an orchestrator with a custom runner (for testing)
    pub fn with_runner(args: CliArgs, runner: R) -> Self {
        Self { args, runner }
    }

    /// Run the workflow
    pub async fn run(&self) -> Result<OrchestratorResult, AppError> {
        self.run_with_progress(!self.args.quiet && self.args.runs_update())
            .await
    }

    /// Run the workflow with optional progress display
    pub async fn run_with_progress(
        &self,
        show_progress: bool,
    ) -> Result<OrchestratorResult, AppError> {
        let mut progress = Progress::new(show_progress);
        let mut warnings = Vec::new();

        let output = self.capture_log(&mut progress).await?;
        let packages = self.load_package_map(&mut warnings);

        let parsed = parse_update_log(&output)?;
        if !parsed.is_complete() {
            warnings.push(OrchestratorWarning::CountMismatch {
                announced: parsed.announced,
                parsed: parsed.updates.len(),
            });
        }

        Ok(OrchestratorResult {
            announced: parsed.announced,
            notes: packages.release_notes(parsed.updates),
            warnings,
        })
    }

    /// Get the update log text, from the captured input or by running the update
    async fn capture_log(&self, progress: &mut Progress) -> Result<String, AppError> {
        if let Some(path) = self.args.input_source() {
            return if self.args.reads_stdin() {
                read_stdin().await.map_err(AppError::from)
            } else {
                read_input(path).await.map_err(AppError::from)
            };
        }

        let package_dir = &self.args.path;
        if !package_dir.join(MANIFEST_FILENAME).exists() {
            return Err(RunnerError::not_a_package(package_dir).into());
        }

        progress.start_resolving(package_dir);
        let result = self.runner.run_update(package_dir).await;
        progress.finish();

        let output = result?;
        if !output.success {
            return Err(RunnerError::command_failed(output.command, output.stderr.trim()).into());
        }
        Ok(output.stdout)
    }

    /// Load Package.resolved, degrading to an empty map with a warning
    fn load_package_map(&self, warnings: &mut Vec<OrchestratorWarning>) -> PackageMap {
        match PackageMap::load(&self.args.path) {
            Ok(Some(map)) => map,
            Ok(None) => {
                warnings.push(OrchestratorWarning::MissingResolved {
                    path: self.args.path.join(RESOLVED_FILENAME),
                });
                PackageMap::new()
            }
            Err(e) => {
                warnings.push(OrchestratorWarning::InvalidResolved {
                    message: e.to_string(),
                });
                PackageMap::new()
            }
        }
    }
}

/// Read a captured log file
async fn read_input(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::input_not_found(path));
    }
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| IoError::generic(path, e))
}

/// Read a captured log from stdin
async fn read_stdin() -> Result<String, IoError> {
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .map_err(|e| IoError::generic("<stdin>", e))?;
    Ok(buffer)
}
