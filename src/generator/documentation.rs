use super::sentences::{split_sentences, terminate_sentence};
use super::{render_list, Advisor, ContentList};
use crate::classifier::{classify_aid_kind, contains_any};
use crate::constants::{DOCUMENTATION_SEPARATOR, DOCUMENT_KEYWORDS, TYPICAL_DOCUMENTATION_INTRO};

impl Advisor {
    /// Sentences of the description that mention documents to submit.
    pub fn document_mentions(&self, description: &str) -> ContentList {
        let mut found: ContentList = split_sentences(description)
            .filter(|s| contains_any(&s.to_lowercase(), DOCUMENT_KEYWORDS))
            .map(terminate_sentence)
            .collect();
        found.dedup_preserving_order();
        found
    }

    /// Common documents followed by the ones specific to the aid kind.
    pub fn typical_documents(&self, aid_type: &str) -> ContentList {
        let catalog = self.catalog();
        catalog
            .common_documents
            .iter()
            .chain(catalog.aid_documents(classify_aid_kind(aid_type)))
            .cloned()
            .collect()
    }

    /// Documentation checklist for a program.
    ///
    /// Document mentions found in the description come first, separated from
    /// the typical list by a rule and an intro line.
    pub fn generate_documentation_info(&self, aid_type: &str, description: &str) -> String {
        let typical = self.typical_documents(aid_type).to_html();
        let mentions = self.document_mentions(description);
        if mentions.is_empty() {
            return typical;
        }

        format!(
            "{}{}{}{}",
            render_list(mentions.items()),
            DOCUMENTATION_SEPARATOR,
            TYPICAL_DOCUMENTATION_INTRO,
            typical
        )
    }
}
