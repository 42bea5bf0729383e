//! # Tagging Schemas
//!
//! Normalizes IOB1, IOBES and SIO label sequences into canonical BIO (IOB2)
//! and validates BIO well-formedness. Everything here is a pure function.

pub mod convert;
pub mod tags;
pub mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use convert::{convert_iob_to_bio, convert_iobes_to_bio, convert_sio_to_bio};
pub use tags::{Tag, TagPrefix};
pub use validate::{is_valid_transition, validate_bio};

/// Tagging schemas a corpus can be annotated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSchema {
    /// BIO / IOB2, the canonical schema.
    #[default]
    Bio,
    /// IOB1.
    Iob,
    /// BIO plus `E` (end) and `S` (single).
    Iobes,
    /// BIO plus `S` (single).
    Sio,
}

impl TagSchema {
    /// Get all schemas in order.
    pub fn all() -> &'static [TagSchema] {
        &[TagSchema::Bio, TagSchema::Iob, TagSchema::Iobes, TagSchema::Sio]
    }

    /// Lowercase schema name.
    pub fn name(&self) -> &'static str {
        match self {
            TagSchema::Bio => "bio",
            TagSchema::Iob => "iob",
            TagSchema::Iobes => "iobes",
            TagSchema::Sio => "sio",
        }
    }

    /// Whether `prefix` is part of this schema's alphabet.
    pub fn accepts(&self, prefix: TagPrefix) -> bool {
        match self {
            TagSchema::Bio | TagSchema::Iob => matches!(
                prefix,
                TagPrefix::Begin | TagPrefix::Inside | TagPrefix::Outside
            ),
            TagSchema::Iobes => true,
            TagSchema::Sio => prefix != TagPrefix::End,
        }
    }

    /// Convert `labels` from this schema to BIO without validating the result.
    pub fn to_bio<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<String>> {
        match self {
            TagSchema::Bio => {
                tags::parse_all(TagSchema::Bio, labels)?;
                Ok(labels.iter().map(|l| l.as_ref().to_string()).collect())
            }
            TagSchema::Iob => convert_iob_to_bio(labels),
            TagSchema::Iobes => convert_iobes_to_bio(labels),
            TagSchema::Sio => convert_sio_to_bio(labels),
        }
    }
}

impl fmt::Display for TagSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagSchema {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bio" | "iob2" => Ok(TagSchema::Bio),
            "iob" | "iob1" => Ok(TagSchema::Iob),
            "iobes" => Ok(TagSchema::Iobes),
            "sio" => Ok(TagSchema::Sio),
            other => Err(format!(
                "unknown tag schema {other:?} (expected bio, iob, iobes or sio)"
            )),
        }
    }
}

/// Convert `labels` from `schema` to BIO and validate the result.
///
/// # Examples
/// ```
/// use seqtag_core::schema::{normalize, TagSchema};
///
/// let bio = normalize(TagSchema::Iobes, &["B-ORG", "E-ORG", "S-PER"]).unwrap();
/// assert_eq!(bio, ["B-ORG", "I-ORG", "B-PER"]);
/// ```
pub fn normalize<S: AsRef<str>>(schema: TagSchema, labels: &[S]) -> Result<Vec<String>> {
    let bio = schema.to_bio(labels)?;
    validate_bio(&bio)?;
    Ok(bio)
}
