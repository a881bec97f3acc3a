//! Error types for jstamp.

use thiserror::Error;

/// Top-level result type for jstamp operations.
pub type Result<T> = std::result::Result<T, JstampError>;

/// Top-level error type for jstamp.
///
/// A missing active note, a missing editor, and a missing daily note are
/// not errors: they are reported through
/// [`InsertOutcome`](crate::inserter::InsertOutcome) and
/// [`AppendOutcome`](crate::appender::AppendOutcome).
#[derive(Debug, Error)]
pub enum JstampError {
    #[error("vault error: {0}")]
    Vault(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("selection {start}..{end} is not valid for a buffer of {len} bytes")]
    Selection { start: usize, end: usize, len: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_messages() {
        let err = JstampError::Selection {
            start: 4,
            end: 2,
            len: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("4..2"));
        assert!(msg.contains("10 bytes"));

        let err = JstampError::Vault("not a directory".to_string());
        assert!(err.to_string().starts_with("vault error"));
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(std::io::Error::other("disk full"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, JstampError::Io(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
