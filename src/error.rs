//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ParseError: The update log could not be understood
//! - RunnerError: Issues running the package manager
//! - ResolvedError: Issues reading Package.resolved (reported as a warning,
//!   never fatal)
//! - IoError: Issues reading a captured log

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Update log parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Package manager invocation errors
    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to parsing update output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No dependency count line anywhere in the output
    #[error("could not find a dependency change summary in the provided output")]
    NoCountLineFound {
        /// The complete output that was searched
        output: String,
    },

    /// Text that is not a semantic version
    #[error("invalid semantic version '{value}'")]
    InvalidVersion { value: String },
}

/// Errors related to running the package manager
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The target directory is not a Swift package
    #[error("no Package.swift found in {path}")]
    NotAPackage { path: PathBuf },

    /// The package manager executable could not be found
    #[error("executable not found: {executable}")]
    ExecutableNotFound { executable: PathBuf },

    /// The package manager could not be started
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package manager did not finish in time
    #[error("'{command}' timed out after {seconds}s")]
    Timeout { command: String, seconds: u64 },

    /// The package manager exited unsuccessfully
    #[error("'{command}' failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Errors related to reading Package.resolved
#[derive(Error, Debug)]
pub enum ResolvedError {
    /// Failed to read the file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// A file format version we do not understand
    #[error("unsupported Package.resolved version {version} in {path}")]
    UnsupportedVersion { path: PathBuf, version: u64 },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Captured log file not found
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Creates a new NoCountLineFound error
    pub fn no_count_line(output: impl Into<String>) -> Self {
        ParseError::NoCountLineFound {
            output: output.into(),
        }
    }

    /// Creates a new InvalidVersion error
    pub fn invalid_version(value: impl Into<String>) -> Self {
        ParseError::InvalidVersion {
            value: value.into(),
        }
    }

    /// Returns the unparsed output, if this error carries it
    pub fn output(&self) -> Option<&str> {
        match self {
            ParseError::NoCountLineFound { output } => Some(output),
            ParseError::InvalidVersion { .. } => None,
        }
    }
}

impl RunnerError {
    /// Creates a new NotAPackage error
    pub fn not_a_package(path: impl Into<PathBuf>) -> Self {
        RunnerError::NotAPackage { path: path.into() }
    }

    /// Creates a new Spawn error, mapping a missing executable to ExecutableNotFound
    pub fn spawn(
        executable: impl Into<PathBuf>,
        command: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            RunnerError::ExecutableNotFound {
                executable: executable.into(),
            }
        } else {
            RunnerError::Spawn {
                command: command.into(),
                source,
            }
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(command: impl Into<String>, seconds: u64) -> Self {
        RunnerError::Timeout {
            command: command.into(),
            seconds,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        RunnerError::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }
}

impl ResolvedError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResolvedError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ResolvedError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new UnsupportedVersion error
    pub fn unsupported_version(path: impl Into<PathBuf>, version: u64) -> Self {
        ResolvedError::UnsupportedVersion {
            path: path.into(),
            version,
        }
    }
}

impl IoError {
    /// Creates a new InputNotFound error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::InputNotFound { path: path.into() }
    }

    /// Creates a new Generic IO error
    pub fn generic(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Generic {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_no_count_line() {
        let err = ParseError::no_count_line("Updating https://example.com\n");
        let msg = format!("{}", err);
        assert!(msg.contains("could not find a dependency change summary"));
        assert_eq!(err.output(), Some("Updating https://example.com\n"));
    }

    #[test]
    fn test_parse_error_invalid_version() {
        let err = ParseError::invalid_version("main");
        assert_eq!(format!("{}", err), "invalid semantic version 'main'");
        assert_eq!(err.output(), None);
    }

    #[test]
    fn test_runner_error_not_a_package() {
        let err = RunnerError::not_a_package("/path/to/project");
        let msg = format!("{}", err);
        assert!(msg.contains("no Package.swift"));
        assert!(msg.contains("/path/to/project"));
    }

    #[test]
    fn test_runner_error_spawn_not_found() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = RunnerError::spawn("swift", "swift package update --dry-run", source);
        assert!(matches!(err, RunnerError::ExecutableNotFound { .. }));
        assert!(format!("{}", err).contains("executable not found: swift"));
    }

    #[test]
    fn test_runner_error_spawn_other() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = RunnerError::spawn("swift", "swift package update --dry-run", source);
        assert!(matches!(err, RunnerError::Spawn { .. }));
        assert!(format!("{}", err).contains("denied"));
    }

    #[test]
    fn test_runner_error_timeout() {
        let err = RunnerError::timeout("swift package update --dry-run", 300);
        let msg = format!("{}", err);
        assert!(msg.contains("timed out"));
        assert!(msg.contains("300s"));
    }

    #[test]
    fn test_runner_error_command_failed() {
        let err = RunnerError::command_failed("swift package update", "error: no such file");
        let msg = format!("{}", err);
        assert!(msg.contains("failed"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_resolved_error_json_parse() {
        let err = ResolvedError::json_parse_error("/path/Package.resolved", "expected value");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_resolved_error_unsupported_version() {
        let err = ResolvedError::unsupported_version("/path/Package.resolved", 9);
        assert!(format!("{}", err).contains("unsupported Package.resolved version 9"));
    }

    #[test]
    fn test_io_error_input_not_found() {
        let err = IoError::input_not_found("/missing.log");
        assert!(format!("{}", err).contains("input file not found"));
    }

    #[test]
    fn test_app_error_from_parse_error() {
        let app_err: AppError = ParseError::no_count_line("").into();
        assert!(format!("{}", app_err).contains("dependency change summary"));
    }

    #[test]
    fn test_app_error_from_runner_error() {
        let app_err: AppError = RunnerError::timeout("swift", 1).into();
        assert!(format!("{}", app_err).contains("timed out"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let app_err: AppError = IoError::input_not_found("/missing").into();
        assert!(format!("{}", app_err).contains("input file not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ParseError::invalid_version("x");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidVersion"));
    }
}
