use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report produced
    Success = 0,
    /// Unused dependencies were found and `--fail-on-unused` was requested
    UnusedDependenciesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing manifest, command failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnusedDependenciesFound => write!(f, "Unused Dependencies Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency analysis.
///
/// Environment and external-process failures are fatal and carry a hint
/// for the user. Per-package and per-file failures never reach this type;
/// they are degraded where they happen.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please open a Flutter project folder or pass it with --path")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("No pubspec.yaml file found: {path}\n\n💡 Hint: Please ensure you are in a Flutter project directory.")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse pubspec.yaml: {path}\nDetails: {details}\n\n💡 Hint: Please verify that pubspec.yaml contains valid YAML")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Command `{command}` failed\nDetails: {details}\n\n💡 Hint: Make sure the Dart/Flutter SDK is installed and on your PATH")]
    CommandFailed { command: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("No option selected.")]
    NoOptionSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::UnusedDependenciesFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::UnusedDependenciesFound),
            "Unused Dependencies Found (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = AnalyzerError::ManifestNotFound {
            path: PathBuf::from("/work/app/pubspec.yaml"),
        };
        let display = format!("{}", error);
        assert!(display.contains("No pubspec.yaml file found"));
        assert!(display.contains("/work/app/pubspec.yaml"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_command_failed_display() {
        let error = AnalyzerError::CommandFailed {
            command: "dart pub outdated".to_string(),
            details: "Could not find a file named \"pubspec.yaml\"".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("`dart pub outdated` failed"));
        assert!(display.contains("Could not find a file named"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = AnalyzerError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("Directory does not exist"));
    }

    #[test]
    fn test_no_option_selected_display() {
        assert_eq!(
            AnalyzerError::NoOptionSelected.to_string(),
            "No option selected."
        );
    }
}
