// Shared CLI utilities for the interactive and report CLIs
pub mod filters;
pub mod formatting;
pub mod input;
pub mod menu;

pub use filters::prompt_segment_filters;
pub use formatting::{format_json, format_record, format_table};
pub use input::Input;
pub use menu::Menu;

use crate::segments::SegmentError;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ValidationError(String),
    NotFound(String),
    UserCancelled,
    IoError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            CliError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CliError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CliError::UserCancelled => write!(f, "Operation cancelled by user"),
            CliError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                CliError::UserCancelled
            }
            dialoguer::Error::IO(e) => CliError::IoError(e.to_string()),
        }
    }
}

impl From<SegmentError> for CliError {
    fn from(err: SegmentError) -> Self {
        match err {
            SegmentError::Validation(msg) => CliError::ValidationError(msg),
            SegmentError::NotFound(id) => CliError::NotFound(format!("Segment {}", id)),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Confirm a dangerous operation
pub fn confirm(message: &str) -> CliResult<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new().with_prompt(message).interact()?)
}

/// Print a success message
pub fn print_success(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✓ {}", message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("ℹ {}", message).bright_cyan());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("⚠ {}", message).yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✗ {}", message).red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_errors_map_to_cli_errors() {
        let err: CliError = SegmentError::NotFound("abc".into()).into();
        assert_eq!(err.to_string(), "Not found: Segment abc");

        let err: CliError = SegmentError::Validation("Segment name cannot be empty".into()).into();
        assert!(matches!(err, CliError::ValidationError(_)));
    }

    #[test]
    fn test_interrupted_prompt_is_cancellation() {
        let interrupted = std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c");
        let err: CliError = dialoguer::Error::IO(interrupted).into();
        assert!(matches!(err, CliError::UserCancelled));

        let broken = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CliError = dialoguer::Error::IO(broken).into();
        assert!(matches!(err, CliError::IoError(_)));
    }
}
