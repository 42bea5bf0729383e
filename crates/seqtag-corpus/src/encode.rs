//! Per-field alphabets turning sentences into id sequences.

use std::path::Path;

use serde::{Deserialize, Serialize};
use seqtag_core::alphabet::{AlphabetConfig, SymbolTable, TableKind};

use crate::error::{CorpusError, Result};
use crate::reader::Sentence;

/// A sentence as model input: token ids and label ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSentence {
    #[serde(rename = "tokens")]
    pub token_ids: Vec<usize>,
    #[serde(rename = "labels")]
    pub label_ids: Vec<usize>,
}

/// The word and label tables of a corpus.
#[derive(Debug, Clone)]
pub struct FieldAlphabets {
    pub words: SymbolTable,
    pub labels: SymbolTable,
}

impl FieldAlphabets {
    /// File stem of the word table.
    pub const WORDS: &'static str = "words";
    /// File stem of the label table.
    pub const LABELS: &'static str = "labels";

    pub fn new() -> Self {
        Self {
            words: SymbolTable::new(Self::WORDS, TableKind::Input),
            labels: SymbolTable::new(Self::LABELS, TableKind::Label),
        }
    }

    /// Build both tables from `config`; fails if the config is unusable for the word table.
    pub fn with_config(config: AlphabetConfig) -> Result<Self> {
        Ok(Self {
            words: SymbolTable::with_config(Self::WORDS, TableKind::Input, config.clone())?,
            labels: SymbolTable::with_config(Self::LABELS, TableKind::Label, config)?,
        })
    }

    /// Add every token and label of `sentences` while the tables are growing.
    ///
    /// Labels of a sentence are resolved before its tokens, so a sentence
    /// with a label the closed label table rejects adds no words.
    pub fn fit<'a, I>(&mut self, sentences: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        for sentence in sentences {
            for label in &sentence.labels {
                self.labels.id_of(label)?;
            }
            for token in &sentence.tokens {
                self.words.id_of(token)?;
            }
        }
        Ok(())
    }

    pub fn close(&mut self) {
        self.words.close();
        self.labels.close();
    }

    pub fn open(&mut self) {
        self.words.open();
        self.labels.open();
    }

    /// Map a sentence to ids. Grows the tables unless they are closed.
    ///
    /// Labels go first: an unknown label fails before any word is added.
    pub fn encode(&mut self, sentence: &Sentence) -> Result<EncodedSentence> {
        if sentence.tokens.len() != sentence.labels.len() {
            return Err(CorpusError::LengthMismatch {
                tokens: sentence.tokens.len(),
                labels: sentence.labels.len(),
            });
        }
        let label_ids = sentence
            .labels
            .iter()
            .map(|l| self.labels.id_of(l))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let token_ids = sentence
            .tokens
            .iter()
            .map(|t| self.words.id_of(t))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(EncodedSentence {
            token_ids,
            label_ids,
        })
    }

    /// Save both tables into `directory`, best effort.
    ///
    /// Returns whether both files were written.
    pub fn save(&self, directory: impl AsRef<Path>) -> bool {
        let directory = directory.as_ref();
        let words = self.words.save(directory, None).is_some();
        let labels = self.labels.save(directory, None).is_some();
        words && labels
    }

    /// Load both tables from `directory`.
    pub fn load(directory: impl AsRef<Path>, config: AlphabetConfig) -> Result<Self> {
        let directory = directory.as_ref();
        let mut alphabets = Self::with_config(config)?;
        alphabets.words.load(directory, None)?;
        alphabets.labels.load(directory, None)?;
        Ok(alphabets)
    }
}

impl Default for FieldAlphabets {
    fn default() -> Self {
        Self::new()
    }
}
