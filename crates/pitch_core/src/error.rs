use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No data for this request")]
    EmptyInput,

    #[error("Required columns not found in the data: {}", columns.join(", "))]
    MissingColumn { columns: Vec<String> },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Stable machine-readable code used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::EmptyInput => "EMPTY_INPUT",
            EngineError::MissingColumn { .. } => "MISSING_COLUMN",
            EngineError::InvalidConfig(_) => "INVALID_CONFIG",
            EngineError::Serialization(_) => "SERIALIZATION",
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::EmptyInput => true,
            EngineError::MissingColumn { .. } => true,
            EngineError::InvalidConfig(_) => false,
            EngineError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_lists_columns() {
        let err = EngineError::MissingColumn {
            columns: vec!["balls".to_string(), "type".to_string()],
        };
        assert_eq!(err.to_string(), "Required columns not found in the data: balls, type");
        assert_eq!(err.code(), "MISSING_COLUMN");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_empty_input_is_recoverable() {
        assert!(EngineError::EmptyInput.is_recoverable());
        assert!(!EngineError::InvalidConfig("x".into()).is_recoverable());
    }
}
