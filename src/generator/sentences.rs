use crate::constants::SENTENCE_SPLIT_PATTERN;
use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Splits free text into sentences on `.`, `!` or `?` followed by whitespace.
///
/// The delimiter is consumed, so only the last sentence keeps its terminal
/// punctuation. Blank fragments are dropped.
pub(crate) fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    let re = SENTENCE_SPLIT_REGEX.get_or_init(|| {
        Regex::new(SENTENCE_SPLIT_PATTERN).expect("SENTENCE_SPLIT_PATTERN is a valid regex pattern")
    });
    re.split(text).filter(|s| !s.trim().is_empty())
}

/// Trims a sentence and appends a period unless it already ends in `.`, `!` or `?`.
pub(crate) fn terminate_sentence(sentence: &str) -> String {
    let trimmed = sentence.trim();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_terminal_punctuation_followed_by_space() {
        let parts: Vec<&str> = split_sentences("Uno. Dos! Tres? Cuatro.").collect();
        assert_eq!(parts, vec!["Uno", "Dos", "Tres", "Cuatro."]);
    }

    #[test]
    fn split_ignores_punctuation_without_space() {
        let parts: Vec<&str> = split_sentences("Importe de 1.500 euros. Fin").collect();
        assert_eq!(parts, vec!["Importe de 1.500 euros", "Fin"]);
    }

    #[test]
    fn split_drops_blank_fragments() {
        let parts: Vec<&str> = split_sentences("Hola.   ").collect();
        assert_eq!(parts, vec!["Hola"]);
        assert_eq!(split_sentences("").count(), 0);
    }

    #[test]
    fn terminate_adds_period_only_when_missing() {
        assert_eq!(terminate_sentence("  Tener sede en España "), "Tener sede en España.");
        assert_eq!(terminate_sentence("¿Es elegible?"), "¿Es elegible?");
        assert_eq!(terminate_sentence("Hecho."), "Hecho.");
    }
}
