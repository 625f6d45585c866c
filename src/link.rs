// src/link.rs
// =============================================================================
// The Link type: one hyperlink discovered during a crawl, together with the
// validation rule that decides whether it is worth printing and following.
//
// A Link is built once by the scanner, printed once by the crawl loop, and
// optionally used as the seed of one deeper fetch. It is never stored or
// mutated after construction.
// =============================================================================

use std::fmt;

/// A hyperlink discovered on a crawled page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target of the anchor's href attribute, trimmed. May be relative or
    /// absolute; it is passed to the HTTP client as-is.
    pub url: String,
    /// Text content between the anchor's start and end tag, trimmed of
    /// surrounding whitespace only.
    pub text: String,
    /// Recursion level the link was found at (0 = found on the seed page).
    pub depth: usize,
}

impl Link {
    /// Builds a link, trimming surrounding whitespace from both the URL and
    /// the text. Internal whitespace is left untouched.
    pub fn new(url: &str, text: &str, depth: usize) -> Self {
        Self {
            url: url.trim().to_string(),
            text: text.trim().to_string(),
            depth,
        }
    }

    /// Whether the link should be reported and followed.
    ///
    /// A link is valid when it was found below the depth ceiling, has
    /// non-empty text and URL, and its URL does not contain "javascript"
    /// in any casing.
    pub fn is_valid(&self, max_depth: usize) -> bool {
        if self.depth >= max_depth {
            return false;
        }
        if self.text.is_empty() {
            return false;
        }
        if self.url.is_empty() {
            return false;
        }
        !self.url.to_lowercase().contains("javascript")
    }
}

// One output line per link: indented by one tab per depth level.
impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} ({}) - {}",
            "\t".repeat(self.depth),
            self.text,
            self.depth,
            self.url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_url_and_text() {
        let link = Link::new("  /x ", "  Hi  ", 0);
        assert_eq!(link.url, "/x");
        assert_eq!(link.text, "Hi");
    }

    #[test]
    fn new_preserves_internal_whitespace() {
        let link = Link::new("/x", "Hi  there", 0);
        assert_eq!(link.text, "Hi  there");
    }

    #[test]
    fn display_has_no_indent_at_depth_zero() {
        let link = Link::new("/x", "Hi", 0);
        assert_eq!(link.to_string(), "Hi (0) - /x");
    }

    #[test]
    fn display_indents_one_tab_per_depth_level() {
        let link = Link::new("/x", "Hi", 1);
        assert_eq!(link.to_string(), "\tHi (1) - /x");

        let link = Link::new("/y", "Deeper", 2);
        assert_eq!(link.to_string(), "\t\tDeeper (2) - /y");
    }

    #[test]
    fn well_formed_link_is_valid() {
        let link = Link::new("/x", "Hi", 0);
        assert!(link.is_valid(2));
    }

    #[test]
    fn link_just_below_depth_ceiling_is_valid() {
        let link = Link::new("/x", "Hi", 1);
        assert!(link.is_valid(2));
    }

    #[test]
    fn link_at_depth_ceiling_is_invalid() {
        let link = Link::new("/x", "Hi", 2);
        assert!(!link.is_valid(2));
    }

    #[test]
    fn empty_text_is_invalid() {
        let link = Link::new("/x", "", 0);
        assert!(!link.is_valid(2));
    }

    #[test]
    fn empty_url_is_invalid() {
        let link = Link::new("", "Hi", 0);
        assert!(!link.is_valid(2));
    }

    #[test]
    fn whitespace_only_text_is_invalid() {
        // Trimming happens at construction, so this collapses to empty.
        let link = Link::new("/x", "   ", 0);
        assert!(!link.is_valid(2));
    }

    #[test]
    fn javascript_url_is_invalid_in_any_casing() {
        assert!(!Link::new("javascript:void(0)", "Click", 0).is_valid(2));
        assert!(!Link::new("JavaScript:alert(1)", "Click", 0).is_valid(2));
        assert!(!Link::new("JAVASCRIPT:alert(1)", "Click", 0).is_valid(2));
    }

    #[test]
    fn javascript_anywhere_in_url_is_invalid() {
        let link = Link::new("/docs/javascript-guide", "Guide", 0);
        assert!(!link.is_valid(2));
    }
}
