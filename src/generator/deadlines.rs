use crate::constants::{
    ANNUAL_CALL_MESSAGE, CLOSED_CALL_MESSAGE, DATE_PATTERNS, OPEN_DEADLINE_MESSAGE,
    STANDING_CALL_MESSAGE,
};
use regex::Regex;
use std::sync::OnceLock;

use super::Advisor;

static DATE_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();

fn date_regexes() -> &'static [Regex] {
    DATE_REGEXES.get_or_init(|| {
        DATE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("DATE_PATTERNS are valid regex patterns"))
            .collect()
    })
}

/// Summarizes the application deadline of a program.
///
/// Returns an empty string when nothing deadline-related is found.
///
/// # Arguments
///
/// * `convening_text` - Free text about the application round (status, dates)
/// * `description` - Program description
pub fn extract_deadline_info(convening_text: &str, description: &str) -> String {
    if convening_text.trim().is_empty() && description.trim().is_empty() {
        return String::new();
    }

    let combined = format!("{convening_text} {description}").to_lowercase();
    if combined.contains("plazo") && combined.contains("abierto") {
        return OPEN_DEADLINE_MESSAGE.to_string();
    }

    if let Some(found) = date_regexes()
        .iter()
        .find_map(|re| re.find(&combined))
        .map(|m| capitalize_first(m.as_str()))
    {
        return found;
    }

    let convening_lower = convening_text.to_lowercase();
    let canned = if convening_lower.contains("permanente") {
        STANDING_CALL_MESSAGE
    } else if convening_lower.contains("anual") {
        ANNUAL_CALL_MESSAGE
    } else if convening_lower.contains("cerrada") {
        CLOSED_CALL_MESSAGE
    } else {
        ""
    };
    canned.to_string()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Advisor {
    pub fn extract_deadline_info(&self, convening_text: &str, description: &str) -> String {
        extract_deadline_info(convening_text, description)
    }
}
