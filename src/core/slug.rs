use regex::Regex;

use crate::error::Error;
use crate::Result;

/// Validate a theme slug.
///
/// Slugs may contain letters, numbers, underscores and hyphens, and must
/// start with a letter or underscore. The hyphen→underscore swap is a
/// throwaway copy for the pattern match only; the slug itself keeps its
/// hyphens.
pub fn validate(slug: &str) -> Result<&str> {
    let pattern =
        Regex::new(r"^[a-zA-Z_]\w+$").map_err(|e| Error::internal_unexpected(e.to_string()))?;

    if !pattern.is_match(&slug.replace('-', "_")) {
        return Err(Error::validation_invalid_argument(
            "slug",
            "Theme slugs can only contain letters, numbers, underscores and hyphens, \
             and can only start with a letter or underscore",
            Some(slug.to_string()),
        ));
    }

    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_simple_slug() {
        assert_eq!(validate("sample-theme").unwrap(), "sample-theme");
    }

    #[test]
    fn validate_accepts_underscores_and_digits() {
        assert!(validate("my_theme2").is_ok());
        assert!(validate("_private").is_ok());
    }

    #[test]
    fn validate_returns_slug_unchanged() {
        // The hyphen normalization is only a check, never a transform.
        assert_eq!(validate("a-b-c").unwrap(), "a-b-c");
    }

    #[test]
    fn validate_rejects_leading_digit() {
        assert!(validate("2theme").is_err());
    }

    #[test]
    fn validate_rejects_leading_hyphen() {
        assert!(validate("-theme").is_err());
    }

    #[test]
    fn validate_rejects_special_characters() {
        assert!(validate("my theme").is_err());
        assert!(validate("theme!").is_err());
        assert!(validate("../evil").is_err());
    }

    #[test]
    fn validate_rejects_single_character() {
        assert!(validate("a").is_err());
    }

    #[test]
    fn validate_rejects_empty() {
        assert!(validate("").is_err());
    }

    #[test]
    fn validate_error_carries_slug() {
        let err = validate("bad slug").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.details["id"], "bad slug");
    }
}
