//! # Seqtag
//!
//! Umbrella crate for preparing sequence tagging corpora.
//!
//! - [`seqtag_core`]: schema normalization to BIO and persistent symbol tables.
//! - [`seqtag_corpus`]: tab-separated corpus loading, writing and encoding.
//!
//! ```rust
//! use seqtag::{TagSchema, convert_iob_to_bio, normalize};
//!
//! let bio = convert_iob_to_bio(&["I-ORG", "I-ORG", "I-PER"]).unwrap();
//! assert_eq!(bio, ["B-ORG", "I-ORG", "B-PER"]);
//! assert!(normalize(TagSchema::Bio, &bio).is_ok());
//! ```
pub use seqtag_core;
pub use seqtag_corpus;

pub use seqtag_core::{
    AlphabetConfig, AlphabetState, LookupPolicy, SeqtagError, SymbolTable, TableKind, TagSchema,
    convert_iob_to_bio, convert_iobes_to_bio, convert_sio_to_bio, normalize, validate_bio,
};
pub use seqtag_corpus::{
    Corpus, CorpusError, EncodedSentence, FieldAlphabets, InvalidPolicy, LoaderConfig, Sentence,
    load_data, prepare_folder, save_data,
};
