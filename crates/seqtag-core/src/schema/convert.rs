//! Conversions from IOB1, IOBES and SIO into canonical BIO.

use crate::error::Result;
use crate::schema::TagSchema;
use crate::schema::tags::{Tag, TagPrefix, parse_all};

/// Convert an IOB1 sequence to BIO.
///
/// IOB1 only uses `B` to split two adjacent entities of the same type, so an
/// `I` tag opens a new entity whenever the previous tag is `O` or carries a
/// different type.
///
/// # Examples
/// ```
/// use seqtag_core::schema::convert_iob_to_bio;
///
/// let bio = convert_iob_to_bio(&["O", "I-PER", "I-PER", "I-LOC"]).unwrap();
/// assert_eq!(bio, ["O", "B-PER", "I-PER", "B-LOC"]);
/// ```
pub fn convert_iob_to_bio<S: AsRef<str>>(labels: &[S]) -> Result<Vec<String>> {
    let tags = parse_all(TagSchema::Iob, labels)?;
    let mut prev = Tag::OUTSIDE;

    let bio = tags
        .iter()
        .map(|tag| {
            let opens = tag.prefix == TagPrefix::Inside
                && (prev.prefix == TagPrefix::Outside || !prev.same_type(tag));
            prev = *tag;
            if opens {
                tag.with_prefix(TagPrefix::Begin)
            } else {
                tag.to_string()
            }
        })
        .collect();

    Ok(bio)
}

/// Convert an IOBES sequence to BIO: `S` becomes `B`, `E` becomes `I`.
///
/// # Examples
/// ```
/// use seqtag_core::schema::convert_iobes_to_bio;
///
/// let bio = convert_iobes_to_bio(&["S-PER", "O", "B-LOC", "E-LOC"]).unwrap();
/// assert_eq!(bio, ["B-PER", "O", "B-LOC", "I-LOC"]);
/// ```
pub fn convert_iobes_to_bio<S: AsRef<str>>(labels: &[S]) -> Result<Vec<String>> {
    let tags = parse_all(TagSchema::Iobes, labels)?;
    Ok(tags
        .iter()
        .map(|tag| match tag.prefix {
            TagPrefix::Single => tag.with_prefix(TagPrefix::Begin),
            TagPrefix::End => tag.with_prefix(TagPrefix::Inside),
            _ => tag.to_string(),
        })
        .collect())
}

/// Convert an SIO sequence to BIO: `S` becomes `B`.
pub fn convert_sio_to_bio<S: AsRef<str>>(labels: &[S]) -> Result<Vec<String>> {
    let tags = parse_all(TagSchema::Sio, labels)?;
    Ok(tags
        .iter()
        .map(|tag| match tag.prefix {
            TagPrefix::Single => tag.with_prefix(TagPrefix::Begin),
            _ => tag.to_string(),
        })
        .collect())
}
