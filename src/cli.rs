//! CLI argument parsing module for release-notes

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Parse duration string in format: N or Ns (seconds), Nm (minutes), Nh (hours)
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (num_str, unit) = if let Some(n) = s.strip_suffix('s') {
        (n, 's')
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 'm')
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 'h')
    } else {
        (s, 's')
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in duration: {}", num_str))?;
    if num == 0 {
        return Err("timeout must be greater than zero".to_string());
    }

    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        _ => unreachable!(),
    };
    let seconds = num
        .checked_mul(multiplier)
        .ok_or_else(|| format!("timeout too large: {}", s))?;

    Ok(Duration::from_secs(seconds))
}

/// Release notes links for Swift package dependency updates
#[derive(Parser, Debug, Clone)]
#[command(
    name = "release-notes",
    version,
    about = "Release notes links for Swift package dependency updates"
)]
pub struct CliArgs {
    /// Swift package directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Parse a captured `swift package update` log instead of running it ("-" reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Swift executable used to run the update
    #[arg(long, value_name = "PATH", default_value = "swift")]
    pub swift: PathBuf,

    /// Time allowed for the update (e.g., 90, 90s, 5m, 1h)
    #[arg(long, value_parser = parse_timeout, default_value = "300s")]
    pub timeout: Duration,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Output results as a Markdown list
    #[arg(long, conflicts_with = "json")]
    pub markdown: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// The captured log to read, if the update should not be run
    pub fn input_source(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Check if the captured log should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.input.as_deref() == Some(Path::new("-"))
    }

    /// Check if the package manager will be run
    pub fn runs_update(&self) -> bool {
        self.input.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["release-notes"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(args.input.is_none());
        assert_eq!(args.swift, PathBuf::from("swift"));
        assert_eq!(args.timeout, Duration::from_secs(300));
        assert!(!args.json);
        assert!(!args.markdown);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.no_color);
        assert!(args.runs_update());
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["release-notes", "/some/package"]);
        assert_eq!(args.path, PathBuf::from("/some/package"));
    }

    #[test]
    fn test_input_file() {
        let args = CliArgs::parse_from(["release-notes", "--input", "update.log"]);
        assert_eq!(args.input_source(), Some(Path::new("update.log")));
        assert!(!args.reads_stdin());
        assert!(!args.runs_update());

        let args = CliArgs::parse_from(["release-notes", "-i", "update.log"]);
        assert_eq!(args.input, Some(PathBuf::from("update.log")));
    }

    #[test]
    fn test_input_stdin() {
        let args = CliArgs::parse_from(["release-notes", "-i", "-"]);
        assert!(args.reads_stdin());
    }

    #[test]
    fn test_swift_executable() {
        let args = CliArgs::parse_from(["release-notes", "--swift", "/opt/swift/bin/swift"]);
        assert_eq!(args.swift, PathBuf::from("/opt/swift/bin/swift"));
    }

    #[test]
    fn test_timeout_units() {
        let args = CliArgs::parse_from(["release-notes", "--timeout", "90"]);
        assert_eq!(args.timeout, Duration::from_secs(90));

        let args = CliArgs::parse_from(["release-notes", "--timeout", "5m"]);
        assert_eq!(args.timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_output_flags() {
        let args = CliArgs::parse_from(["release-notes", "--json"]);
        assert!(args.json);

        let args = CliArgs::parse_from(["release-notes", "--markdown", "--no-color"]);
        assert!(args.markdown);
        assert!(args.no_color);
    }

    #[test]
    fn test_json_conflicts_with_markdown() {
        let result = CliArgs::try_parse_from(["release-notes", "--json", "--markdown"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["release-notes", "--quiet", "--verbose"]);
        assert!(result.is_err());

        let args = CliArgs::parse_from(["release-notes", "-q"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("45").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_timeout("45s").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_timeout("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_timeout("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_timeout_invalid() {
        assert!(parse_timeout("").is_err());
        assert!(parse_timeout("abc").is_err());
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("10x").is_err());
        assert!(parse_timeout("m").is_err());
    }

    #[test]
    fn test_parse_timeout_overflow() {
        assert!(parse_timeout("18446744073709551615h").is_err());
        assert!(parse_timeout("18446744073709551615m").is_err());
        assert_eq!(
            parse_timeout("18446744073709551615").unwrap(),
            Duration::from_secs(u64::MAX)
        );

        let result = CliArgs::try_parse_from(["release-notes", "--timeout", "18446744073709551615h"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "release-notes",
            "/path/to/package",
            "--input",
            "captured.log",
            "--verbose",
            "--markdown",
            "--timeout",
            "10m",
        ]);
        assert_eq!(args.path, PathBuf::from("/path/to/package"));
        assert_eq!(args.input, Some(PathBuf::from("captured.log")));
        assert!(args.verbose);
        assert!(args.markdown);
        assert_eq!(args.timeout, Duration::from_secs(600));
    }
}
