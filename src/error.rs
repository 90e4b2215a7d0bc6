use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("{field} cannot be empty")]
    Validation { field: String, message: String },

    #[error("Invalid board data: {0}")]
    InvalidBoard(String),

    #[error("Invalid storage key: {0}")]
    InvalidStorageKey(String),

    #[error("Storage quota exceeded writing '{key}': needed {needed} bytes, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl KanbanError {
    /// Builds a validation error for a blank required field
    pub fn blank(field: &str, message: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Returns true for errors the user caused and can fix by retrying
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_error_display() {
        let err = KanbanError::blank("List title", "Please enter a list title.");
        assert_eq!(err.to_string(), "List title cannot be empty");
        assert!(err.is_validation());
    }

    #[test]
    fn test_quota_error_is_not_validation() {
        let err = KanbanError::QuotaExceeded {
            key: "kanban-board".to_string(),
            needed: 10,
            available: 4,
        };
        assert!(!err.is_validation());
        assert!(err.to_string().contains("kanban-board"));
    }
}
