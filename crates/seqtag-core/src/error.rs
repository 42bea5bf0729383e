use std::path::PathBuf;

use thiserror::Error;

use crate::schema::TagSchema;

/// Errors that can occur during schema normalization and symbol table operations.
#[derive(Debug, Error)]
pub enum SeqtagError {
    /// A tag is empty or its prefix is not part of the declared schema.
    #[error("malformed {schema} tag {tag:?} at position {position}")]
    MalformedTag {
        /// Schema the sequence was declared in.
        schema: TagSchema,
        /// Index of the offending tag in its sequence.
        position: usize,
        /// The offending tag.
        tag: String,
    },

    /// Two adjacent tags violate BIO well-formedness.
    #[error("invalid BIO transition {current:?} -> {next:?} at position {position}")]
    InvalidTransition {
        /// Index of `current` in its sequence.
        position: usize,
        /// The tag at `position`.
        current: String,
        /// The tag that follows it (`O` past the end of the sequence).
        next: String,
    },

    /// `enumerate_from` was called with a start outside `[1, size)`.
    #[error("enumerate start {start} is outside [1, {size})")]
    EnumerateOutOfRange {
        /// Requested start id.
        start: usize,
        /// Table size at the time of the call.
        size: usize,
    },

    /// Reverse lookup of an id the table never assigned.
    #[error("id {id} is out of range for a table of size {size}")]
    IdOutOfRange {
        /// Requested id.
        id: usize,
        /// Table size at the time of the call.
        size: usize,
    },

    /// A closed label table was asked for a label it does not hold.
    #[error("label table {table:?} is closed and has no entry for {symbol:?}")]
    UnknownLabel {
        /// Name of the label table.
        table: String,
        /// The missing label.
        symbol: String,
    },

    /// Filesystem error while reading or writing a persisted table.
    #[error("io error on {path:?}: {source}")]
    Io {
        /// Underlying IO error.
        source: std::io::Error,
        /// File being accessed.
        path: PathBuf,
    },

    /// A persisted table could not be encoded or decoded.
    #[error("json error on {path:?}: {source}")]
    Json {
        /// Underlying serde_json error.
        source: serde_json::Error,
        /// File being accessed.
        path: PathBuf,
    },

    /// A symbol table configuration cannot produce a consistent table.
    #[error("invalid symbol table configuration: {0}")]
    InvalidConfig(String),

    /// A persisted table decoded fine but its content is inconsistent.
    #[error("corrupt symbol table state: {0}")]
    CorruptState(String),
}

impl SeqtagError {
    /// Wrap an IO error together with the path it occurred on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// Wrap a JSON error together with the path it occurred on.
    pub fn json(source: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        Self::Json {
            source,
            path: path.into(),
        }
    }
}

/// Result type alias for seqtag core operations.
pub type Result<T> = std::result::Result<T, SeqtagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SeqtagError::MalformedTag {
            schema: TagSchema::Iobes,
            position: 3,
            tag: "X-PER".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed iobes tag \"X-PER\" at position 3"
        );

        let err = SeqtagError::EnumerateOutOfRange { start: 0, size: 4 };
        assert_eq!(err.to_string(), "enumerate start 0 is outside [1, 4)");

        let err = SeqtagError::UnknownLabel {
            table: "labels".into(),
            symbol: "B-MISC".into(),
        };
        assert!(err.to_string().contains("B-MISC"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqtagError>();
    }
}
