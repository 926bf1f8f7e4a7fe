//! Error handling for Textab formatting
//!
//! This module provides a unified error type and result type for all
//! formatting operations.

use std::fmt;

/// Formatting error type
#[derive(Debug, Clone)]
pub enum FormatError {
    /// A cell value could not be rendered to text
    Conversion { message: String },
    /// The destination rejected the write
    SinkWrite { message: String },
    /// Closing the destination failed after the write completed
    SinkClose { message: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Conversion { message } => {
                write!(f, "Conversion error: {}", message)
            }
            FormatError::SinkWrite { message } => {
                write!(f, "Sink write error: {}", message)
            }
            FormatError::SinkClose { message } => {
                write!(f, "Sink close error: {}", message)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;

// Convenience constructors for errors
impl FormatError {
    pub fn conversion(message: impl Into<String>) -> Self {
        FormatError::Conversion {
            message: message.into(),
        }
    }

    pub fn sink_write(message: impl Into<String>) -> Self {
        FormatError::SinkWrite {
            message: message.into(),
        }
    }

    pub fn sink_close(message: impl Into<String>) -> Self {
        FormatError::SinkClose {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_display() {
        let err = FormatError::conversion("value refused to render");
        assert!(err.to_string().contains("Conversion error"));
        assert!(err.to_string().contains("value refused to render"));
    }

    #[test]
    fn test_sink_write_error_display() {
        let err = FormatError::sink_write("sink is closed");
        let msg = err.to_string();
        assert!(msg.contains("Sink write error"));
        assert!(msg.contains("sink is closed"));
    }

    #[test]
    fn test_sink_close_error_display() {
        let err = FormatError::sink_close("flush failed");
        let msg = err.to_string();
        assert!(msg.contains("Sink close error"));
        assert!(msg.contains("flush failed"));
    }
}
