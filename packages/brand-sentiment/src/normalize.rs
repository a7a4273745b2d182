//! Text cleaning applied before scoring.

use std::sync::LazyLock;

use regex::Regex;

// Mentions, then any char outside [A-Za-z0-9 \t], then `scheme://...` runs.
static RE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)").unwrap()
});

/// Strip @mentions, URLs and punctuation, then collapse whitespace.
///
/// Every match is replaced by a single space so that removed tokens never glue
/// neighbouring words together. Pure; empty input yields empty output.
pub fn normalize(text: &str) -> String {
    let cleaned = RE_NOISE.replace_all(text, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_mentions_urls_and_punctuation() {
        assert_eq!(
            normalize("Great news @acme! see http://x.co"),
            "Great news see"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  love\t\tthis \n product  "), "love this product");
    }

    #[test]
    fn test_non_ascii_removed() {
        assert_eq!(normalize("café ☕ rocks"), "caf rocks");
    }

    #[test]
    fn test_https_and_other_schemes() {
        assert_eq!(
            normalize("read https://acme.com/a?b=c and ftp://files.acme.com/x now"),
            "read and now"
        );
    }

    #[test]
    fn test_removed_tokens_do_not_join_words() {
        assert_eq!(normalize("good@acme bad"), "good bad");
        assert_eq!(normalize("well,done"), "well done");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(normalize("Q3 revenue up 12%"), "Q3 revenue up 12");
    }
}
