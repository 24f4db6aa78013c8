use super::html::render_advice_columns;
use super::Advisor;
use crate::classifier::{classify, classify_aid_kind};
use crate::models::Category;

impl Advisor {
    /// Tips specific to a program: the category's own tips, except for generic
    /// programs where the aid kind's tips are preferred when there are any.
    pub fn specific_advice(&self, name: &str, aid_type: &str) -> &[String] {
        let category = classify(name, aid_type);
        if category == Category::Generic {
            let kind_tips = &self.catalog().aid_kind(classify_aid_kind(aid_type)).tips;
            if !kind_tips.is_empty() {
                return kind_tips;
            }
        }
        &self.catalog().category(category).tips
    }

    pub fn generate_application_advice(&self, name: &str, aid_type: &str) -> String {
        render_advice_columns(
            self.catalog().general_tips.as_slice(),
            self.specific_advice(name, aid_type),
        )
    }
}
