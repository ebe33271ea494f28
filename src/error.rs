use std::fmt;

/// Result type for qhive operations
pub type Result<T> = std::result::Result<T, QHiveError>;

/// Main error type for the qhive library
#[derive(Debug, Clone, PartialEq)]
pub enum QHiveError {
    /// A vector did not have the width expected at a layer or network boundary
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Sampling was requested from a buffer with no entries
    EmptyBuffer(String),

    /// Invalid action
    InvalidAction {
        action: usize,
        max_actions: usize,
    },

    /// IO errors (config files)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for QHiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QHiveError::DimensionMismatch { context, expected, actual } => {
                write!(f, "Dimension mismatch in {}: expected width {}, got {}", context, expected, actual)
            }
            QHiveError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            QHiveError::EmptyBuffer(msg) => write!(f, "Empty buffer: {}", msg),
            QHiveError::InvalidAction { action, max_actions } => {
                write!(f, "Invalid action {}: must be less than {}", action, max_actions)
            }
            QHiveError::IoError(msg) => write!(f, "IO error: {}", msg),
            QHiveError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for QHiveError {}

impl From<std::io::Error> for QHiveError {
    fn from(err: std::io::Error) -> Self {
        QHiveError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for QHiveError {
    fn from(err: serde_json::Error) -> Self {
        QHiveError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl QHiveError {
    pub fn dimension_mismatch<S: Into<String>>(context: S, expected: usize, actual: usize) -> Self {
        QHiveError::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        QHiveError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Fails with `DimensionMismatch` unless `actual == expected`.
    pub(crate) fn check_width(context: &str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::dimension_mismatch(context, expected, actual))
        }
    }
}
