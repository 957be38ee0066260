use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Call to undefined function {name}()")]
    UnknownFunction { name: String },

    #[error("Call to undefined method {class}::{method}()")]
    UnknownMethod { class: String, method: String },

    #[error("{callable}() expects {expected} argument(s), {got} given")]
    ArityMismatch {
        callable: String,
        expected: usize,
        got: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Dispatch,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FixtureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FixtureError::IoError(_) => ErrorCategory::Output,
            FixtureError::ConfigReadError { .. }
            | FixtureError::ConfigParseError(_)
            | FixtureError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FixtureError::UnknownFunction { .. }
            | FixtureError::UnknownMethod { .. }
            | FixtureError::ArityMismatch { .. } => ErrorCategory::Dispatch,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A closed stdout (e.g. piped into `head`) is not worth a loud failure.
            FixtureError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            FixtureError::IoError(_) => ErrorSeverity::Critical,
            FixtureError::ConfigReadError { .. }
            | FixtureError::ConfigParseError(_)
            | FixtureError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            FixtureError::UnknownFunction { .. }
            | FixtureError::UnknownMethod { .. }
            | FixtureError::ArityMismatch { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FixtureError::IoError(_) => {
                "Check that standard output is writable and not closed early".to_string()
            }
            FixtureError::ConfigReadError { path, .. } => {
                format!("Make sure '{}' exists and is readable", path)
            }
            FixtureError::ConfigParseError(_) => {
                "Make sure the config file is valid TOML with [script] and [logging] tables"
                    .to_string()
            }
            FixtureError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            FixtureError::UnknownFunction { name } => {
                format!("Register '{}' in the function registry before calling it", name)
            }
            FixtureError::UnknownMethod { class, .. } => {
                format!("Check the methods exposed by {}", class)
            }
            FixtureError::ArityMismatch { callable, expected, .. } => {
                format!("Call {}() with exactly {} argument(s)", callable, expected)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Dispatch => format!("Script error: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_errors_are_high_severity() {
        let err = FixtureError::UnknownFunction {
            name: "nope".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Dispatch);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Call to undefined function nope()");
    }

    #[test]
    fn test_broken_pipe_is_low_severity() {
        let err = FixtureError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.severity(), ErrorSeverity::Low);

        let err = FixtureError::from(std::io::Error::from(std::io::ErrorKind::Other));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_config_read_error_is_configuration_problem() {
        let err = FixtureError::ConfigReadError {
            path: "/nope.toml".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("/nope.toml"));
        assert!(!err.recovery_suggestion().contains("standard output"));
    }

    #[test]
    fn test_user_friendly_message_mentions_field() {
        let err = FixtureError::InvalidConfigValueError {
            field: "iterations".to_string(),
            value: "5000000".to_string(),
            reason: "too many".to_string(),
        };
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
        assert!(err.recovery_suggestion().contains("iterations"));
    }
}
