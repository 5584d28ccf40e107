//! HTTP cache validation module
//!
//! Provides the cache tag (weak validator) derived from file metadata and
//! the conditional-request decision.

/// Compute the cache tag for a file from its metadata.
///
/// The tag is `hex(mtime_millis)-hex(size)`. Two file states collide only
/// when both mtime and size are identical, which is the accepted
/// weak-validator tradeoff.
///
/// # Examples
/// ```
/// use lanshare::http::cache::cache_tag;
/// assert_eq!(cache_tag(0x18c2_a4f3_0aa, 5), "18c2a4f30aa-5");
/// ```
pub fn cache_tag(mtime_millis: u128, size: u64) -> String {
    format!("{mtime_millis:x}-{size:x}")
}

/// Decide whether a request carrying the given `If-None-Match` header
/// should get a 304.
///
/// The comparison is byte-for-byte string equality only: no weak
/// comparators, no tag lists, no `*` wildcard.
pub fn matches_if_none_match(if_none_match: Option<&str>, tag: &str) -> bool {
    if_none_match == Some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_tag_format() {
        assert_eq!(cache_tag(255, 16), "ff-10");
        assert_eq!(cache_tag(0, 0), "0-0");
    }

    #[test]
    fn test_cache_tag_deterministic() {
        assert_eq!(
            cache_tag(1_700_000_000_123, 42),
            cache_tag(1_700_000_000_123, 42)
        );
    }

    #[test]
    fn test_cache_tag_differs_on_mtime_or_size() {
        let tag = cache_tag(1_700_000_000_123, 42);
        assert_ne!(tag, cache_tag(1_700_000_000_124, 42));
        assert_ne!(tag, cache_tag(1_700_000_000_123, 43));
    }

    #[test]
    fn test_exact_match_only() {
        let tag = "18c2a4f30aa-5";
        assert!(matches_if_none_match(Some("18c2a4f30aa-5"), tag));
        assert!(!matches_if_none_match(None, tag));
        assert!(!matches_if_none_match(Some("*"), tag));
        assert!(!matches_if_none_match(Some("\"18c2a4f30aa-5\""), tag));
        assert!(!matches_if_none_match(Some("other, 18c2a4f30aa-5"), tag));
    }
}
