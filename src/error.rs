//! Error types for staffroll

use thiserror::Error;

/// Main error type for staffroll
#[derive(Debug, Error)]
pub enum StaffrollError {
    #[error("Memory allocation failed")]
    AllocationFailure,

    #[error("Invalid position for insertion: {position} (list holds {len} records)")]
    InvalidPosition { position: i64, len: usize },

    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    #[error("Invalid integer: '{0}'")]
    InvalidInteger(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl StaffrollError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StaffrollError::Config(_) | StaffrollError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            StaffrollError::Config(msg) if msg.contains("max_records") => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use a positive number, e.g. max_records = 5\n\
                    • Remove the key to allow an unbounded list",
                    msg
                )
            }
            StaffrollError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the path given to --config\n\
                    • Valid keys: export_path, max_records, name_max_len",
                    msg
                )
            }
            StaffrollError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse config file: {}\n\n\
                    Example:\n\
                    export_path = \"employees_information.txt\"\n\
                    max_records = 5",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using StaffrollError
pub type Result<T> = std::result::Result<T, StaffrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_two() {
        assert_eq!(StaffrollError::Config("bad".to_string()).exit_code(), 2);
        assert_eq!(StaffrollError::AllocationFailure.exit_code(), 1);
        assert_eq!(StaffrollError::InputClosed.exit_code(), 1);
    }

    #[test]
    fn test_invalid_position_message() {
        let err = StaffrollError::InvalidPosition {
            position: 7,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid position for insertion: 7 (list holds 2 records)"
        );
    }

    #[test]
    fn test_config_suggestions_list_keys() {
        let err = StaffrollError::Config("Failed to read config file".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--config"));
        assert!(msg.contains("export_path, max_records, name_max_len"));
    }

    #[test]
    fn test_max_records_suggestion() {
        let err = StaffrollError::Config("max_records must be greater than zero".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("max_records = 5"));
        assert!(msg.contains("unbounded"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = StaffrollError::InvalidName("John3".to_string());
        assert_eq!(err.display_with_suggestions(), "Invalid name: 'John3'");
    }
}
