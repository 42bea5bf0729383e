//! BIO well-formedness checks.

use crate::error::{Result, SeqtagError};
use crate::schema::TagSchema;
use crate::schema::tags::{Tag, TagPrefix, parse_all};

/// Check if transitioning from `current` to `next` is valid in BIO.
///
/// `O` and `B` may follow anything; `I` may only continue a `B` or `I` of the
/// same type.
pub fn is_valid_transition(current: &Tag<'_>, next: &Tag<'_>) -> bool {
    match (current.prefix, next.prefix) {
        (_, TagPrefix::Outside | TagPrefix::Begin) => true,
        (TagPrefix::Begin | TagPrefix::Inside, TagPrefix::Inside) => current.same_type(next),
        _ => false,
    }
}

/// Validate a BIO sequence, treating the position past the end as `O`.
///
/// # Examples
/// ```
/// use seqtag_core::schema::validate_bio;
///
/// assert!(validate_bio(&["B-PER", "I-PER", "O"]).is_ok());
/// assert!(validate_bio(&["O", "I-PER"]).is_err());
/// ```
pub fn validate_bio<S: AsRef<str>>(labels: &[S]) -> Result<()> {
    let tags = parse_all(TagSchema::Bio, labels)?;

    for (position, current) in tags.iter().enumerate() {
        let next = tags.get(position + 1).copied().unwrap_or(Tag::OUTSIDE);
        if !is_valid_transition(current, &next) {
            return Err(SeqtagError::InvalidTransition {
                position,
                current: current.to_string(),
                next: next.to_string(),
            });
        }
    }

    Ok(())
}
