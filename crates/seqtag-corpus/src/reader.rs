//! Loading of tab-separated tagged corpora.
//!
//! One token per line; the last tab-separated column is the tag and the
//! preceding columns, rejoined with tabs, are the token text. A blank line
//! ends a sentence, and so does the end of input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use seqtag_core::schema::normalize;
use tracing::{info, warn};

use crate::config::{InvalidPolicy, LoaderConfig};
use crate::error::{CorpusError, Result};

/// A sentence: tokens with one label each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<String>,
    pub labels: Vec<String>,
}

impl Sentence {
    pub fn new(tokens: Vec<String>, labels: Vec<String>) -> Result<Self> {
        if tokens.len() != labels.len() {
            return Err(CorpusError::LengthMismatch {
                tokens: tokens.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { tokens, labels })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `(token, label)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .zip(&self.labels)
            .map(|(t, l)| (t.as_str(), l.as_str()))
    }
}

/// Counters collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Sentences kept.
    pub kept: usize,
    /// Sentences outside the configured length range.
    pub dropped_by_length: usize,
    /// Sentences with malformed labels dropped under [`InvalidPolicy::Skip`].
    pub skipped_invalid: usize,
}

/// Sentences loaded from one source.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub sentences: Vec<Sentence>,
    pub report: LoadReport,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

/// Accumulates the lines of the sentence being read.
struct SentenceBuffer<'c> {
    config: &'c LoaderConfig,
    tokens: Vec<String>,
    labels: Vec<String>,
    first_line: usize,
    corpus: Corpus,
}

impl<'c> SentenceBuffer<'c> {
    fn new(config: &'c LoaderConfig) -> Self {
        Self {
            config,
            tokens: Vec::new(),
            labels: Vec::new(),
            first_line: 0,
            corpus: Corpus::default(),
        }
    }

    fn push(&mut self, line: usize, token: &str, label: &str) {
        if self.tokens.is_empty() {
            self.first_line = line;
        }
        self.tokens.push(token.to_string());
        self.labels.push(label.to_string());
    }

    /// Close the current sentence, if any.
    fn finish(&mut self) -> Result<()> {
        if self.tokens.is_empty() {
            return Ok(());
        }
        let tokens = std::mem::take(&mut self.tokens);
        let labels = std::mem::take(&mut self.labels);

        if !self.config.accepts_len(tokens.len()) {
            self.corpus.report.dropped_by_length += 1;
            return Ok(());
        }

        let labels = match self.config.schema {
            None => labels,
            Some(schema) => match normalize(schema, &labels) {
                Ok(bio) => bio,
                Err(source) => match self.config.on_invalid {
                    InvalidPolicy::Abort => {
                        return Err(CorpusError::InvalidSentence {
                            line: self.first_line,
                            source,
                        });
                    }
                    InvalidPolicy::Skip => {
                        warn!(line = self.first_line, error = %source, "skipping sentence");
                        self.corpus.report.skipped_invalid += 1;
                        return Ok(());
                    }
                },
            },
        };

        self.corpus.sentences.push(Sentence { tokens, labels });
        self.corpus.report.kept += 1;
        Ok(())
    }
}

/// Read sentences from any buffered reader.
///
/// Only the line ending and trailing whitespace are stripped, so a token made
/// of spaces survives; a line with nothing but whitespace ends the sentence.
pub fn read_sentences<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Corpus> {
    config.validate()?;
    let mut buffer = SentenceBuffer::new(config);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CorpusError::io(e, None))?;
        let line_no = idx + 1;
        let line = line.trim_end();

        if line.trim_start().is_empty() {
            buffer.finish()?;
            continue;
        }

        let Some((token, label)) = line.rsplit_once('\t') else {
            return Err(CorpusError::MissingTag {
                line: line_no,
                content: line.to_string(),
            });
        };
        buffer.push(line_no, token, label);
    }

    // Don't forget the last sentence
    buffer.finish()?;

    Ok(buffer.corpus)
}

/// Load a corpus file.
pub fn load_data<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Corpus> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CorpusError::io(e, Some(path.to_path_buf())))?;

    let corpus = read_sentences(BufReader::new(file), config).map_err(|e| match e {
        CorpusError::Io { source, path: None } => CorpusError::io(source, Some(path.to_path_buf())),
        other => other,
    })?;

    info!(
        path = %path.display(),
        kept = corpus.report.kept,
        dropped_by_length = corpus.report.dropped_by_length,
        skipped_invalid = corpus.report.skipped_invalid,
        "loaded corpus"
    );
    Ok(corpus)
}
