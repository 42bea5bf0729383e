//! # Seqtag Core
//!
//! Preprocessing core for sequence tagging corpora. Normalizes IOB1, IOBES
//! and SIO label sequences into validated BIO, and maps tokens and labels to
//! stable integer ids through persistent symbol tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqtag_core::alphabet::{SymbolTable, TableKind};
//! use seqtag_core::schema::{normalize, TagSchema};
//!
//! let labels = normalize(TagSchema::Iobes, &["S-PER", "O", "B-LOC", "E-LOC"]).unwrap();
//! assert_eq!(labels, ["B-PER", "O", "B-LOC", "I-LOC"]);
//!
//! let mut table = SymbolTable::new("labels", TableKind::Label);
//! let ids: Vec<usize> = labels.iter().map(|l| table.id_of(l).unwrap()).collect();
//! assert_eq!(ids, [1, 2, 3, 4]);
//! ```
pub mod alphabet;
pub mod error;
pub mod schema;

// Re-export primary API
pub use alphabet::{AlphabetConfig, AlphabetState, LookupPolicy, SymbolTable, TableKind};
pub use error::{Result, SeqtagError};
pub use schema::{
    TagSchema, convert_iob_to_bio, convert_iobes_to_bio, convert_sio_to_bio, normalize,
    validate_bio,
};
