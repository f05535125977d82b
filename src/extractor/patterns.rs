// file: src/extractor/patterns.rs
// description: compiled regex patterns for token extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Maximal runs of ASCII word characters. A token only counts when it spans
    // a whole run, which gives `\b` semantics with ASCII word boundaries.
    pub static ref WORD_RUN: Regex = Regex::new(
        r"[0-9A-Za-z_]+"
    ).expect("WORD_RUN regex is valid");

    pub static ref TOKEN: Regex = Regex::new(
        r"^[1-9][0-9]{4,11}$"
    ).expect("TOKEN regex is valid");
}

pub fn is_valid_token(candidate: &str) -> bool {
    TOKEN.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pattern_lengths() {
        assert!(!is_valid_token("1234"));
        assert!(is_valid_token("12345"));
        assert!(is_valid_token("123456789012"));
        assert!(!is_valid_token("1234567890123"));
    }

    #[test]
    fn test_token_pattern_rejects_leading_zero() {
        assert!(!is_valid_token("012345"));
        assert!(is_valid_token("102345"));
    }

    #[test]
    fn test_token_pattern_rejects_non_digits() {
        assert!(!is_valid_token("12345a"));
        assert!(!is_valid_token("١٢٣٤٥"));
        assert!(!is_valid_token(""));
    }

    #[test]
    fn test_word_run_stops_at_non_ascii() {
        let runs: Vec<&str> = WORD_RUN.find_iter("群号123456，qq_7").map(|m| m.as_str()).collect();
        assert_eq!(runs, vec!["123456", "qq_7"]);
    }
}
