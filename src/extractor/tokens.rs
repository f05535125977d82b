// file: src/extractor/tokens.rs
// description: numeric token harvesting over raw document text
// reference: https://docs.rs/regex

use crate::extractor::patterns::{WORD_RUN, is_valid_token};
use crate::models::TokenSet;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct TokenHarvester;

impl TokenHarvester {
    pub fn new() -> Self {
        Self
    }

    /// Collects every distinct token in `text`. Markup, script bodies and
    /// attribute values are scanned like any other characters.
    pub fn harvest(&self, text: &str) -> TokenSet {
        let mut tokens = TokenSet::new();
        let mut matches = 0usize;

        for run in WORD_RUN.find_iter(text) {
            if is_valid_token(run.as_str()) {
                matches += 1;
                tokens.insert(run.as_str());
            }
        }

        debug!("Harvested {} matches, {} distinct", matches, tokens.len());
        tokens
    }
}

pub fn harvest_tokens(text: &str) -> TokenSet {
    TokenHarvester::new().harvest(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn harvested(text: &str) -> Vec<String> {
        harvest_tokens(text).iter().cloned().collect()
    }

    #[test]
    fn test_duplicates_collapse() {
        let text = r#"<span id="groupTit">Test Group</span> contact 123456 or 123456 again"#;
        assert_eq!(harvested(text), vec!["123456"]);
    }

    #[test]
    fn test_leading_zero_excluded() {
        assert!(harvest_tokens("id 0012345").is_empty());
    }

    #[test]
    fn test_overlong_run_has_no_sub_match() {
        assert!(harvest_tokens("reach me at 12345678901234").is_empty());
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(harvested("1234 12345"), vec!["12345"]);
        assert_eq!(harvested("123456789012 1234567890123"), vec!["123456789012"]);
    }

    #[test]
    fn test_adjacent_word_chars_block_match() {
        assert!(harvest_tokens("qq123456").is_empty());
        assert!(harvest_tokens("123456abc").is_empty());
        assert!(harvest_tokens("_123456").is_empty());
        assert!(harvest_tokens("123456_").is_empty());
    }

    #[test]
    fn test_punctuation_and_edges_are_boundaries() {
        assert_eq!(harvested("12345"), vec!["12345"]);
        assert_eq!(harvested("(23456)"), vec!["23456"]);
        assert_eq!(harvested("a-34567-b"), vec!["34567"]);
        assert_eq!(harvested("x.45678,"), vec!["45678"]);
    }

    #[test]
    fn test_non_ascii_neighbours_are_boundaries() {
        assert_eq!(harvested("群号123456群"), vec!["123456"]);
        assert_eq!(harvested("🚨98765🚨"), vec!["98765"]);
    }

    #[test]
    fn test_attribute_and_script_content_scanned() {
        let html = r#"<a href="tencent://message/?uin=54321&amp;x=1"></a>
<script>var uin = "77777";</script><style>.c66666{}</style>"#;
        assert_eq!(harvested(html), vec!["54321", "77777"]);
    }

    #[test]
    fn test_harvest_is_idempotent() {
        let text = "10001 20002 10001 x30003 40004";
        assert_eq!(harvest_tokens(text), harvest_tokens(text));
    }
}
