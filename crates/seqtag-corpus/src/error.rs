use std::path::PathBuf;

use seqtag_core::SeqtagError;
use thiserror::Error;

/// Errors that can occur while reading, writing or encoding a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Filesystem error, with the path involved when known.
    #[error("io error on {path:?}: {source}")]
    Io {
        /// Underlying IO error.
        source: std::io::Error,
        /// File or directory being accessed.
        path: Option<PathBuf>,
    },

    /// A non-blank line has no tab-separated tag column.
    #[error("line {line}: expected `token<TAB>tag`, found {content:?}")]
    MissingTag {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// A sentence failed schema conversion or BIO validation.
    #[error("sentence starting at line {line}: {source}")]
    InvalidSentence {
        /// 1-based line number of the sentence's first token.
        line: usize,
        /// The schema or validation error.
        source: SeqtagError,
    },

    /// A sentence was selected by an index the corpus does not have.
    #[error("sentence index {index} is out of range for {len} sentences")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of sentences available.
        len: usize,
    },

    /// Tokens and labels of a sentence have different lengths.
    #[error("sentence has {tokens} tokens but {labels} labels")]
    LengthMismatch {
        /// Number of tokens.
        tokens: usize,
        /// Number of labels.
        labels: usize,
    },

    /// Loader options that cannot keep any sentence.
    #[error("invalid loader configuration: {0}")]
    InvalidConfig(String),

    /// Symbol table error.
    #[error(transparent)]
    Alphabet(#[from] SeqtagError),
}

impl CorpusError {
    /// Wrap an IO error with an optional path.
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { source, path }
    }
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = CorpusError::MissingTag {
            line: 7,
            content: "lonely".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 7: expected `token<TAB>tag`, found \"lonely\""
        );

        let err = CorpusError::InvalidSentence {
            line: 3,
            source: SeqtagError::InvalidTransition {
                position: 0,
                current: "O".into(),
                next: "I-PER".into(),
            },
        };
        assert!(err.to_string().starts_with("sentence starting at line 3"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CorpusError>();
    }
}
