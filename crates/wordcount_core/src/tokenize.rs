use std::sync::LazyLock;

use regex::Regex;

/// Word characters minus digits and underscores, anchored on a word boundary
/// at both ends.
///
/// Digits and underscores are still word characters for `\b`, so a run
/// touching one has no boundary there and never matches: `lake1` and `a_b`
/// yield nothing.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[^\d\W_]+\b").expect("valid regex"));

/// Splits already-lowercased text into words, borrowing from the input.
pub(crate) fn words(lowered: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(lowered).map(|m| m.as_str())
}

/// Lowercases `text` and returns its words in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    words(&lowered).map(ToOwned::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_symbols_are_delimiters() {
        assert_eq!(
            tokenize("Hello, world! #%$ it's--fine"),
            vec!["hello", "world", "it", "s", "fine"]
        );
    }

    #[test]
    fn digit_or_underscore_neighbours_suppress_the_token() {
        assert_eq!(tokenize("lake1 sun 2moon a_b sky"), vec!["sun", "sky"]);
        assert!(tokenize("42 1337").is_empty());
    }

    #[test]
    fn non_ascii_letters_form_words() {
        assert_eq!(tokenize("Café ÜBER straße"), vec!["café", "über", "straße"]);
    }
}
