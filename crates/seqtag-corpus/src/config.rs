//! Corpus loader configuration.

use seqtag_core::TagSchema;

use crate::error::{CorpusError, Result};

/// What to do with a sentence whose labels fail conversion or validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidPolicy {
    /// Stop loading and return the error.
    #[default]
    Abort,
    /// Log a warning and drop the sentence.
    Skip,
}

/// Configuration for [`load_data`](crate::load_data).
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Shortest sentence kept, in tokens.
    pub min_len: usize,
    /// Longest sentence kept, in tokens.
    pub max_len: usize,
    /// Schema the labels are written in; `None` keeps them as-is.
    pub schema: Option<TagSchema>,
    /// Handling of sentences with malformed labels.
    pub on_invalid: InvalidPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: usize::MAX,
            schema: Some(TagSchema::Bio),
            on_invalid: InvalidPolicy::Abort,
        }
    }
}

impl LoaderConfig {
    /// Create a new loader configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive sentence length range.
    ///
    /// The bounds are stored as given; [`validate`](Self::validate) rejects
    /// an inverted range.
    pub fn with_length_range(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    /// Set the schema labels are converted from, or `None` to skip normalization.
    pub fn with_schema(mut self, schema: Option<TagSchema>) -> Self {
        self.schema = schema;
        self
    }

    /// Set the policy for sentences with malformed labels.
    pub fn with_invalid_policy(mut self, policy: InvalidPolicy) -> Self {
        self.on_invalid = policy;
        self
    }

    /// Check that the configuration can keep any sentence at all.
    pub fn validate(&self) -> Result<()> {
        if self.min_len > self.max_len {
            return Err(CorpusError::InvalidConfig(format!(
                "min_len {} is greater than max_len {}",
                self.min_len, self.max_len
            )));
        }
        Ok(())
    }

    /// Whether a sentence of `len` tokens is kept.
    pub fn accepts_len(&self, len: usize) -> bool {
        (self.min_len..=self.max_len).contains(&len)
    }
}
