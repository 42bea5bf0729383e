//! # Tag Prefixes and Parsed Tags
//!
//! A tag is a single prefix character followed by an entity type suffix,
//! e.g. `B-PER`, `E-LOC`, `O`. The prefix alphabet depends on the schema.

use std::fmt;

use crate::error::{Result, SeqtagError};
use crate::schema::TagSchema;

/// Prefix character of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagPrefix {
    /// `B`: first token of an entity.
    Begin,
    /// `I`: continuation of an entity.
    Inside,
    /// `O`: outside of any entity.
    Outside,
    /// `E`: last token of an entity (IOBES).
    End,
    /// `S`: single-token entity (IOBES, SIO).
    Single,
}

impl TagPrefix {
    /// Get the prefix from its character, if it is one of the five known code points.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(TagPrefix::Begin),
            'I' => Some(TagPrefix::Inside),
            'O' => Some(TagPrefix::Outside),
            'E' => Some(TagPrefix::End),
            'S' => Some(TagPrefix::Single),
            _ => None,
        }
    }

    /// The prefix character.
    pub fn as_char(&self) -> char {
        match self {
            TagPrefix::Begin => 'B',
            TagPrefix::Inside => 'I',
            TagPrefix::Outside => 'O',
            TagPrefix::End => 'E',
            TagPrefix::Single => 'S',
        }
    }
}

impl fmt::Display for TagPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A tag split into its prefix and entity type suffix.
///
/// The suffix is kept verbatim, separator included (`"-PER"` for `B-PER`),
/// so that re-prefixing a tag never changes its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag<'a> {
    pub prefix: TagPrefix,
    pub rest: &'a str,
}

impl<'a> Tag<'a> {
    /// The virtual `O` used before the first and after the last tag of a sequence.
    pub const OUTSIDE: Tag<'static> = Tag {
        prefix: TagPrefix::Outside,
        rest: "",
    };

    /// Split a tag string into prefix and suffix.
    ///
    /// Returns `None` for an empty string or an unknown prefix character.
    ///
    /// # Examples
    /// ```
    /// use seqtag_core::schema::{Tag, TagPrefix};
    ///
    /// let tag = Tag::parse("S-LOC").unwrap();
    /// assert_eq!(tag.prefix, TagPrefix::Single);
    /// assert_eq!(tag.rest, "-LOC");
    /// assert!(Tag::parse("X-LOC").is_none());
    /// ```
    pub fn parse(label: &'a str) -> Option<Self> {
        let first = label.chars().next()?;
        let prefix = TagPrefix::from_char(first)?;
        Some(Tag {
            prefix,
            rest: &label[first.len_utf8()..],
        })
    }

    /// Parse a tag and check its prefix against `schema`.
    pub fn parse_in(schema: TagSchema, position: usize, label: &'a str) -> Result<Self> {
        Tag::parse(label)
            .filter(|tag| schema.accepts(tag.prefix))
            .ok_or_else(|| SeqtagError::MalformedTag {
                schema,
                position,
                tag: label.to_string(),
            })
    }

    /// Whether both tags carry the same entity type.
    pub fn same_type(&self, other: &Tag<'_>) -> bool {
        self.rest == other.rest
    }

    /// Render this tag's suffix under another prefix.
    pub fn with_prefix(&self, prefix: TagPrefix) -> String {
        let mut out = String::with_capacity(self.rest.len() + 1);
        out.push(prefix.as_char());
        out.push_str(self.rest);
        out
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.rest)
    }
}

/// Parse every label of a sequence under `schema`, failing on the first malformed one.
pub(crate) fn parse_all<S: AsRef<str>>(schema: TagSchema, labels: &[S]) -> Result<Vec<Tag<'_>>> {
    labels
        .iter()
        .enumerate()
        .map(|(position, label)| Tag::parse_in(schema, position, label.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_char_roundtrip() {
        for c in ['B', 'I', 'O', 'E', 'S'] {
            assert_eq!(TagPrefix::from_char(c).unwrap().as_char(), c);
        }
        assert!(TagPrefix::from_char('b').is_none());
    }

    #[test]
    fn test_parse_keeps_suffix() {
        let tag = Tag::parse("I-ORG").unwrap();
        assert_eq!(tag.prefix, TagPrefix::Inside);
        assert_eq!(tag.rest, "-ORG");
        assert_eq!(tag.to_string(), "I-ORG");

        let outside = Tag::parse("O").unwrap();
        assert_eq!(outside, Tag::OUTSIDE);
    }

    #[test]
    fn test_parse_rejects_empty_and_unknown() {
        assert!(Tag::parse("").is_none());
        assert!(Tag::parse("Ü-PER").is_none());
    }

    #[test]
    fn test_parse_in_checks_schema() {
        assert!(Tag::parse_in(TagSchema::Iobes, 0, "E-PER").is_ok());
        let err = Tag::parse_in(TagSchema::Bio, 2, "E-PER").unwrap_err();
        assert!(matches!(
            err,
            SeqtagError::MalformedTag { position: 2, .. }
        ));
    }

    #[test]
    fn test_with_prefix() {
        let tag = Tag::parse("S-MISC").unwrap();
        assert_eq!(tag.with_prefix(TagPrefix::Begin), "B-MISC");
    }

    #[test]
    fn test_same_type() {
        let a = Tag::parse("B-PER").unwrap();
        let b = Tag::parse("I-PER").unwrap();
        let c = Tag::parse("I-LOC").unwrap();
        assert!(a.same_type(&b));
        assert!(!b.same_type(&c));
    }
}
