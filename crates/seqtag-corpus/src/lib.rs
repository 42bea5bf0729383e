//! # Seqtag Corpus
//!
//! Reading and writing of tab-separated tagged corpora around the
//! `seqtag-core` normalizer and symbol tables: sentences are loaded,
//! normalized to BIO, filtered by length and encoded into ids.
//!
//! ```rust
//! use seqtag_corpus::{FieldAlphabets, LoaderConfig, read_sentences};
//! use seqtag_core::TagSchema;
//!
//! let text = "John\tS-PER\nsings\tO\n";
//! let config = LoaderConfig::new().with_schema(Some(TagSchema::Iobes));
//! let corpus = read_sentences(text.as_bytes(), &config).unwrap();
//! assert_eq!(corpus.sentences[0].labels, ["B-PER", "O"]);
//!
//! let mut alphabets = FieldAlphabets::new();
//! alphabets.fit(&corpus).unwrap();
//! alphabets.close();
//! let encoded = alphabets.encode(&corpus.sentences[0]).unwrap();
//! assert_eq!(encoded.token_ids, [2, 3]);
//! ```
pub mod config;
pub mod encode;
pub mod error;
pub mod reader;
pub mod writer;

pub use config::{InvalidPolicy, LoaderConfig};
pub use encode::{EncodedSentence, FieldAlphabets};
pub use error::{CorpusError, Result};
pub use reader::{Corpus, LoadReport, Sentence, load_data, read_sentences};
pub use writer::{prepare_folder, save_all, save_data, write_sentences};
