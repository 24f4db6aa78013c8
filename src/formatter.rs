//! Turns the raw text of an advisor response into readable HTML.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const BULLET_PATTERN: &str = r"^\s*[-•*]\s+(.+)$";
const URL_PATTERN: &str = r"https?://[^\s<]+";
const PARAGRAPH_BREAK_PATTERN: &str = r"\n\s*\n";
const TITLE_PATTERN: &str = r#"<p class="mb-3">([^:<>]{2,50}):\s*</p>"#;
const TAG_PATTERN: &str = r"<[^>]*>";

/// Terms highlighted in bold. Longer terms come first so that "no elegible"
/// is wrapped as a whole instead of just its "elegible" tail.
const IMPORTANT_TERMS: &[&str] = &[
    "no elegible",
    "incompatible",
    "documentación",
    "financiación",
    "justificación",
    "amortización",
    "subsanación",
    "compatible",
    "subvención",
    "requisitos",
    "garantías",
    "préstamo",
    "elegible",
    "interés",
    "cuantía",
    "importe",
    "plazo",
];

static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();
static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static IMPORTANT_TERMS_REGEX: OnceLock<Regex> = OnceLock::new();

fn bullet_regex() -> &'static Regex {
    BULLET_REGEX
        .get_or_init(|| Regex::new(BULLET_PATTERN).expect("BULLET_PATTERN is a valid regex pattern"))
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex pattern"))
}

fn paragraph_break_regex() -> &'static Regex {
    PARAGRAPH_BREAK_REGEX.get_or_init(|| {
        Regex::new(PARAGRAPH_BREAK_PATTERN).expect("PARAGRAPH_BREAK_PATTERN is a valid regex pattern")
    })
}

fn title_regex() -> &'static Regex {
    TITLE_REGEX
        .get_or_init(|| Regex::new(TITLE_PATTERN).expect("TITLE_PATTERN is a valid regex pattern"))
}

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(TAG_PATTERN).expect("TAG_PATTERN is a valid regex pattern"))
}

fn important_terms_regex() -> &'static Regex {
    IMPORTANT_TERMS_REGEX.get_or_init(|| {
        let alternation = IMPORTANT_TERMS.join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
            .expect("IMPORTANT_TERMS build a valid regex pattern")
    })
}

/// Formats a raw advisor response as HTML.
///
/// Steps, in order: euro sign repair, bullet lists, links, paragraphs, short
/// "Title:" paragraphs promoted to headings, and bold key terms. Input HTML is
/// not escaped.
///
/// # Example
///
/// ```
/// use financing_advisor::formatter::format_original_response;
///
/// let html = format_original_response("Requisitos:\n\n- Ser PYME\n- Tener sede en España");
/// assert!(html.starts_with(r#"<h5 class="mt-4 mb-3"><strong>Requisitos</strong></h5>"#));
/// assert!(html.contains("<li>Ser PYME</li>"));
/// ```
pub fn format_original_response(text: &str) -> String {
    let text = fix_euro_sign(&text.replace("\r\n", "\n"));
    let text = wrap_bullet_lists(&text);
    let text = linkify(&text);
    let html = wrap_paragraphs(&text);
    let html = title_regex()
        .replace_all(&html, r#"<h5 class="mt-4 mb-3">$1</h5>"#)
        .into_owned();
    highlight_terms(&html)
}

fn fix_euro_sign(text: &str) -> String {
    text.replace("â‚¬", "€").replace('\u{FFFD}', "€")
}

/// Turns bullet lines into `<li>` items, each run wrapped in one `<ul>`.
fn wrap_bullet_lists(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for line in text.split('\n') {
        match bullet_regex().captures(line) {
            Some(caps) => run.push(format!("<li>{}</li>", caps[1].trim_end())),
            None => {
                flush_list(&mut run, &mut lines);
                lines.push(line.to_string());
            }
        }
    }
    flush_list(&mut run, &mut lines);

    lines.join("\n")
}

fn flush_list(run: &mut Vec<String>, lines: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    lines.push(format!(r#"<ul class="mb-3">{}</ul>"#, run.join("\n")));
    run.clear();
}

fn linkify(text: &str) -> String {
    url_regex()
        .replace_all(text, |caps: &Captures| {
            format!(
                r#"<a href="{0}" target="_blank" rel="noopener noreferrer">{0}</a>"#,
                &caps[0]
            )
        })
        .into_owned()
}

fn wrap_paragraphs(text: &str) -> String {
    paragraph_break_regex()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.contains('<') && p.contains('>') {
                p.to_string()
            } else {
                format!(r#"<p class="mb-3">{p}</p>"#)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bolds important terms in text content, leaving tags and attributes alone.
fn highlight_terms(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    for tag in tag_regex().find_iter(html) {
        out.push_str(&bold_terms(&html[last..tag.start()]));
        out.push_str(tag.as_str());
        last = tag.end();
    }
    out.push_str(&bold_terms(&html[last..]));
    out
}

fn bold_terms(text: &str) -> String {
    important_terms_regex()
        .replace_all(text, "<strong>$0</strong>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euro_mojibake_is_repaired() {
        assert_eq!(fix_euro_sign("500 â‚¬ y 20 \u{FFFD}"), "500 € y 20 €");
    }

    #[test]
    fn test_bullet_runs_become_one_list() {
        let html = wrap_bullet_lists("Intro\n- uno\n• dos\n* tres\nFin");
        assert_eq!(
            html,
            "Intro\n<ul class=\"mb-3\"><li>uno</li>\n<li>dos</li>\n<li>tres</li></ul>\nFin"
        );
    }

    #[test]
    fn test_separate_runs_get_separate_lists() {
        let html = wrap_bullet_lists("- a\ntexto\n- b");
        assert_eq!(html.matches("<ul").count(), 2);
    }

    #[test]
    fn test_hyphenated_words_are_not_bullets() {
        assert_eq!(wrap_bullet_lists("I+D-i en curso"), "I+D-i en curso");
        assert_eq!(wrap_bullet_lists("-sin espacio"), "-sin espacio");
    }

    #[test]
    fn test_urls_become_links() {
        let html = linkify("Más info en https://www.cdti.es/ayudas y nada más");
        assert!(html.contains(
            r#"<a href="https://www.cdti.es/ayudas" target="_blank" rel="noopener noreferrer">https://www.cdti.es/ayudas</a>"#
        ));
    }

    #[test]
    fn test_paragraphs_wrapped_unless_html() {
        let html = wrap_paragraphs("Primero\n\n\nSegundo\n\n<ul><li>x</li></ul>");
        assert_eq!(
            html,
            "<p class=\"mb-3\">Primero</p>\n<p class=\"mb-3\">Segundo</p>\n<ul><li>x</li></ul>"
        );
    }

    #[test]
    fn test_short_title_paragraph_becomes_heading() {
        let html = format_original_response("Condiciones generales:\n\nTexto normal");
        assert!(html.starts_with(r#"<h5 class="mt-4 mb-3">Condiciones generales</h5>"#));
    }

    #[test]
    fn test_long_paragraph_ending_in_colon_is_not_a_heading() {
        let long = format!("{}:", "palabra ".repeat(10));
        let html = format_original_response(&long);
        assert!(html.starts_with("<p class=\"mb-3\">"));
    }

    #[test]
    fn test_terms_bolded_case_insensitively_on_word_boundaries() {
        let html = bold_terms("El Plazo y los plazos");
        assert_eq!(html, "El <strong>Plazo</strong> y los plazos");
    }

    #[test]
    fn test_no_elegible_is_wrapped_once() {
        let html = bold_terms("Gasto no elegible");
        assert_eq!(html, "Gasto <strong>no elegible</strong>");
    }

    #[test]
    fn test_terms_inside_tags_are_left_alone() {
        let html = highlight_terms(r#"<a href="https://x.es/plazo">ver plazo</a>"#);
        assert_eq!(
            html,
            r#"<a href="https://x.es/plazo">ver <strong>plazo</strong></a>"#
        );
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let input = "Importe:\n\n- Hasta 50.000 â‚¬\n- Préstamo a 5 años\n\nVer https://sede.es";
        assert_eq!(format_original_response(input), format_original_response(input));
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert_eq!(format_original_response(""), "");
        assert_eq!(format_original_response("\n\n  \n"), "");
    }
}
