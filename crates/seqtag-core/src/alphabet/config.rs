//! Symbol table configuration.

use crate::error::{Result, SeqtagError};

/// Reserved padding symbol, always id 0.
pub const PAD_TOKEN: &str = "</pad>";

/// Reserved unknown symbol, id 1 in input tables.
pub const UNKNOWN_TOKEN: &str = "</unk>";

/// What kind of field a table indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Tokens, characters and other open vocabularies. Reserves an unknown slot.
    Input,
    /// Output labels. No unknown slot; must be fully populated before closing.
    Label,
}

impl TableKind {
    pub fn is_label(&self) -> bool {
        matches!(self, TableKind::Label)
    }
}

/// How `symbol_of` treats an id the table never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    /// Fail with `IdOutOfRange`.
    #[default]
    Strict,
    /// Log a warning and answer with the first symbol after padding.
    Tolerant,
}

/// Configuration for a [`SymbolTable`](super::SymbolTable).
#[derive(Debug, Clone)]
pub struct AlphabetConfig {
    /// Padding symbol registered at id 0.
    pub pad_token: String,
    /// Unknown symbol registered at id 1 for input tables.
    pub unknown_token: String,
    /// Whether lookups of unseen symbols add them.
    pub growing: bool,
    /// Reverse lookup behavior for out-of-range ids.
    pub reverse_lookup: LookupPolicy,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self {
            pad_token: PAD_TOKEN.to_string(),
            unknown_token: UNKNOWN_TOKEN.to_string(),
            growing: true,
            reverse_lookup: LookupPolicy::Strict,
        }
    }
}

impl AlphabetConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding symbol.
    pub fn with_pad_token(mut self, token: impl Into<String>) -> Self {
        self.pad_token = token.into();
        self
    }

    /// Set the unknown symbol.
    pub fn with_unknown_token(mut self, token: impl Into<String>) -> Self {
        self.unknown_token = token.into();
        self
    }

    /// Set whether the table starts open for growth.
    pub fn with_growing(mut self, growing: bool) -> Self {
        self.growing = growing;
        self
    }

    /// Set the reverse lookup policy.
    pub fn with_reverse_lookup(mut self, policy: LookupPolicy) -> Self {
        self.reverse_lookup = policy;
        self
    }

    /// Check that a table of `kind` built from this configuration gets every reserved slot.
    pub fn validate(&self, kind: TableKind) -> Result<()> {
        if !kind.is_label() && self.pad_token == self.unknown_token {
            return Err(SeqtagError::InvalidConfig(format!(
                "padding and unknown symbols are both {:?}",
                self.pad_token
            )));
        }
        Ok(())
    }
}
