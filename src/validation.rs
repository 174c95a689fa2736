//! Field-level rules, checked before any write.

use crate::error::AppError;
use crate::model::Strength;

pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Parse a strength rating. Anything outside Weak/Average/Strong is rejected.
pub fn validate_strength(value: &str) -> Result<Strength, AppError> {
    value
        .parse()
        .map_err(|_| AppError::Validation("Invalid strength value".into()))
}

/// A power description must carry at least 20 characters.
pub fn validate_description(value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Description must be at least {} characters",
            MIN_DESCRIPTION_CHARS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_each_strength_variant() {
        assert_eq!(validate_strength("Weak").unwrap(), Strength::Weak);
        assert_eq!(validate_strength("Average").unwrap(), Strength::Average);
        assert_eq!(validate_strength("Strong").unwrap(), Strength::Strong);
    }

    #[test]
    fn rejects_unknown_and_miscased_strength() {
        for value in ["Mighty", "weak", "STRONG", ""] {
            let err = validate_strength(value).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{value:?}");
        }
    }

    #[test]
    fn description_boundary_is_twenty_characters() {
        assert!(validate_description(&"x".repeat(19)).is_err());
        assert!(validate_description(&"x".repeat(20)).is_ok());
    }

    #[test]
    fn description_counts_characters_not_bytes() {
        // 20 two-byte characters.
        assert!(validate_description(&"é".repeat(20)).is_ok());
    }
}
