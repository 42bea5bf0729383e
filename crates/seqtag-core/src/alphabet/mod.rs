//! # Alphabets
//!
//! Persistent symbol tables mapping tokens and labels to the dense integer
//! ids consumed by numeric models.

pub mod config;
pub mod persist;
pub mod table;

pub use config::{AlphabetConfig, LookupPolicy, PAD_TOKEN, TableKind, UNKNOWN_TOKEN};
pub use persist::AlphabetState;
pub use table::{PAD_ID, SymbolTable, UNKNOWN_ID};
