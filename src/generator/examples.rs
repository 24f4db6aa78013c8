use super::{Advisor, ContentList};
use crate::classifier::{classify, contains_any};
use crate::constants::{
    GRANT_SUFFIX_KEYWORDS, LOAN_EXAMPLE_SUFFIX, LOAN_KEYWORDS, SME_EXAMPLE_SUFFIX, SME_KEYWORDS,
};

impl Advisor {
    /// Example projects that typically qualify for a program.
    ///
    /// Loans tag every example as asset-heavy; grants aimed at SMEs tag them as
    /// SME-scaled.
    pub fn project_examples(&self, name: &str, aid_type: &str) -> ContentList {
        let category = classify(name, aid_type);
        let examples = &self.catalog().category(category).examples;

        let name_lower = name.to_lowercase();
        let aid_lower = aid_type.to_lowercase();
        let suffix = if contains_any(&aid_lower, LOAN_KEYWORDS) {
            LOAN_EXAMPLE_SUFFIX
        } else if contains_any(&aid_lower, GRANT_SUFFIX_KEYWORDS)
            && contains_any(&name_lower, SME_KEYWORDS)
        {
            SME_EXAMPLE_SUFFIX
        } else {
            ""
        };

        examples
            .iter()
            .map(|example| format!("{example}{suffix}"))
            .collect()
    }

    pub fn generate_project_examples(&self, name: &str, aid_type: &str) -> String {
        self.project_examples(name, aid_type).to_html()
    }
}
