use crate::constants::EMPTY_LIST_PLACEHOLDER;
use serde::Serialize;

/// Ordered advisory strings: requirements, examples, tips or document names.
///
/// Items keep insertion order. Content is emitted into HTML as-is, so callers
/// must pass already sanitized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentList(Vec<String>);

impl ContentList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.0.push(item.into());
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops exact repeats, keeping the first occurrence of each item.
    pub fn dedup_preserving_order(&mut self) {
        let mut seen = std::collections::HashSet::with_capacity(self.0.len());
        self.0.retain(|item| seen.insert(item.clone()));
    }

    pub fn to_html(&self) -> String {
        render_list(self.0.as_slice())
    }
}

impl From<Vec<String>> for ContentList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl FromIterator<String> for ContentList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<String> for ContentList {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Renders items as an unordered list, or the "no information" placeholder
/// when there is nothing to show.
pub fn render_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return EMPTY_LIST_PLACEHOLDER.to_string();
    }

    let mut html = String::from(r#"<ul class="mb-0">"#);
    for item in items {
        html.push_str("<li>");
        html.push_str(item.as_ref());
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// Two-column block with general advice on the left and specific advice on the right.
pub(crate) fn render_advice_columns<S: AsRef<str>>(general: &[S], specific: &[S]) -> String {
    format!(
        r#"<div class="row">
    <div class="col-md-6">
        <h6 class="mb-3"><i class="fas fa-list-ol me-2"></i>Consejos generales:</h6>
        {}
    </div>
    <div class="col-md-6">
        <h6 class="mb-3"><i class="fas fa-star me-2"></i>Consejos específicos:</h6>
        {}
    </div>
</div>"#,
        render_list(general),
        render_list(specific)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_list_wraps_items_in_order() {
        let html = render_list(&["uno", "dos"]);
        assert_eq!(html, r#"<ul class="mb-0"><li>uno</li><li>dos</li></ul>"#);
    }

    #[test]
    fn render_list_empty_uses_placeholder() {
        let empty: [&str; 0] = [];
        assert_eq!(render_list(&empty), EMPTY_LIST_PLACEHOLDER);
        assert_eq!(ContentList::new().to_html(), EMPTY_LIST_PLACEHOLDER);
    }

    #[test]
    fn render_list_does_not_escape() {
        let html = render_list(&["<b>negrita</b>"]);
        assert!(html.contains("<li><b>negrita</b></li>"));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let mut list: ContentList = ["a", "b", "a", "c", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        list.dedup_preserving_order();
        assert_eq!(list.items(), ["a", "b", "c"]);
    }

    #[test]
    fn advice_columns_contain_both_headings() {
        let html = render_advice_columns(&["g"], &["s"]);
        assert!(html.contains("Consejos generales:"));
        assert!(html.contains("Consejos específicos:"));
        let general_pos = html.find("<li>g</li>").unwrap();
        let specific_pos = html.find("<li>s</li>").unwrap();
        assert!(general_pos < specific_pos);
    }

    #[test]
    fn content_list_serializes_as_array() {
        let list = ContentList::from(vec!["x".to_string()]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["x"]"#);
    }
}
