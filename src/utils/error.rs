use thiserror::Error;

#[derive(Error, Debug)]
pub enum CakeError {
    #[error("Invalid value for '{field}': expected {expected}, found {found}")]
    InvalidFieldType {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("No output target matches selector '{selector}'")]
    SinkNotFound { selector: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CakeError {
    pub fn invalid_field(field: &str, expected: &str, found: impl Into<String>) -> Self {
        CakeError::InvalidFieldType {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CakeError::InvalidFieldType { .. } | CakeError::SerializationError(_) => {
                ErrorCategory::Input
            }
            CakeError::InvalidSelector { .. } | CakeError::SinkNotFound { .. } => {
                ErrorCategory::Output
            }
            CakeError::ConfigValidationError { .. }
            | CakeError::InvalidConfigValueError { .. }
            | CakeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CakeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CakeError::InvalidFieldType { field, expected, .. } => {
                format!("The cake field '{}' must be {}", field, expected)
            }
            CakeError::InvalidSelector { selector, .. } => {
                format!("'{}' is not a usable selector", selector)
            }
            CakeError::SinkNotFound { selector } => {
                format!("There is nowhere to print for '{}'", selector)
            }
            CakeError::ConfigValidationError { field, .. }
            | CakeError::InvalidConfigValueError { field, .. } => {
                format!("The configuration entry '{}' is invalid", field)
            }
            CakeError::MissingConfigError { field } => {
                format!("The configuration entry '{}' is required", field)
            }
            CakeError::IoError(e) => format!("A file could not be read or written: {}", e),
            CakeError::SerializationError(e) => format!("The input data is malformed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CakeError::InvalidFieldType { .. } => {
                "Use a string type, a non-negative whole number of layers and a list of ingredient names"
            }
            CakeError::InvalidSelector { .. } => {
                "Selectors look like '#output': a '#' followed by letters, digits, '-' or '_'"
            }
            CakeError::SinkNotFound { .. } => {
                "Add the element to the [page] table or drop the selector to print to the console"
            }
            CakeError::ConfigValidationError { .. }
            | CakeError::InvalidConfigValueError { .. }
            | CakeError::MissingConfigError { .. } => {
                "Check the TOML file against the documented [defaults], [page] and [output] tables"
            }
            CakeError::IoError(_) => "Check that the path exists and is writable",
            CakeError::SerializationError(_) => "Check that the data file is valid JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, CakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = CakeError::SinkNotFound {
            selector: "#missing".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = CakeError::invalid_field("layers", "a non-negative integer", "-1");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = CakeError::from(std::io::Error::other("disk full"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_exit_code_follows_severity() {
        let output = CakeError::InvalidSelector {
            selector: "output".to_string(),
            reason: "missing '#'".to_string(),
        };
        assert_eq!(output.exit_code(), 2);

        let config = CakeError::MissingConfigError {
            field: "output.html_path".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let io = CakeError::from(std::io::Error::other("disk full"));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = CakeError::invalid_field("ingredients", "a list of strings", "3");
        assert!(err.to_string().contains("ingredients"));
        assert!(err.user_friendly_message().contains("ingredients"));
    }
}
