//! Package manager invocation
//!
//! This module provides:
//! - The `UpdateRunner` seam used by the orchestrator
//! - `SwiftPackageManager`, which runs `swift package update --dry-run`

use crate::error::RunnerError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

/// Default time allowed for dependency resolution
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Arguments passed to the package manager executable
const UPDATE_ARGS: [&str; 3] = ["package", "update", "--dry-run"];

/// Captured result of a dependency update run
#[derive(Debug, Clone)]
pub struct UpdateOutput {
    /// The command that was executed
    pub command: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl UpdateOutput {
    /// Create a successful run result
    pub fn success(command: String, stdout: String, stderr: String) -> Self {
        Self {
            command,
            success: true,
            stdout,
            stderr,
        }
    }

    /// Create a failed run result
    pub fn failure(command: String, stdout: String, stderr: String) -> Self {
        Self {
            command,
            success: false,
            stdout,
            stderr,
        }
    }
}

/// Trait for running a dependency update and capturing its output
#[async_trait]
pub trait UpdateRunner: Send + Sync {
    /// Run the dependency update for the package in `working_dir`
    async fn run_update(&self, working_dir: &Path) -> Result<UpdateOutput, RunnerError>;
}

/// Runner that invokes the Swift package manager
#[derive(Debug, Clone)]
pub struct SwiftPackageManager {
    /// Path or name of the `swift` executable
    executable: PathBuf,
    /// Time allowed before the process is killed
    timeout: Duration,
}

impl SwiftPackageManager {
    /// Create a runner using `swift` from PATH
    pub fn new() -> Self {
        Self {
            executable: PathBuf::from("swift"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a specific executable (builder pattern)
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Use a specific timeout (builder pattern)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Human-readable form of the command line
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.executable.display().to_string()];
        parts.extend(UPDATE_ARGS.iter().map(|arg| arg.to_string()));
        parts.join(" ")
    }
}

impl Default for SwiftPackageManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpdateRunner for SwiftPackageManager {
    async fn run_update(&self, working_dir: &Path) -> Result<UpdateOutput, RunnerError> {
        let command_str = self.command_line();

        let child = Command::new(&self.executable)
            .args(UPDATE_ARGS)
            .current_dir(working_dir)
            .kill_on_drop(true)
            .output();

        // Dropping the future on timeout kills the child
        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| RunnerError::timeout(&command_str, self.timeout.as_secs()))?
            .map_err(|e| RunnerError::spawn(&self.executable, &command_str, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(UpdateOutput::success(command_str, stdout, stderr))
        } else {
            Ok(UpdateOutput::failure(command_str, stdout, stderr))
        }
    }
}
