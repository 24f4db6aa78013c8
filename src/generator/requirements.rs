use super::sentences::{split_sentences, terminate_sentence};
use super::{Advisor, ContentList};
use crate::classifier::contains_any;
use crate::constants::{REQUIREMENT_PHRASES, REQUIREMENT_PREFIXES, REQUIREMENT_TRIGGERS};

fn is_requirement_sentence(sentence: &str) -> bool {
    let lower = sentence.trim().to_lowercase();
    contains_any(&lower, REQUIREMENT_PHRASES)
        || REQUIREMENT_PREFIXES.iter().any(|p| lower.starts_with(p))
        || (lower.contains("mínimo") && lower.contains("empleados"))
}

impl Advisor {
    /// Eligibility requirements for a program description.
    ///
    /// Sentences that read like requirements are surfaced verbatim. Without
    /// any, keyword triggers add canned requirements, and the generic list is
    /// the last resort.
    pub fn requirement_items(&self, description: &str) -> ContentList {
        if description.trim().is_empty() {
            return ContentList::from(self.catalog().generic_requirements.clone());
        }

        let mut items: ContentList = split_sentences(description)
            .filter(|s| is_requirement_sentence(s))
            .map(terminate_sentence)
            .collect();

        if items.is_empty() {
            let lower = description.to_lowercase();
            items.extend(
                REQUIREMENT_TRIGGERS
                    .iter()
                    .filter(|(keywords, _)| contains_any(&lower, keywords))
                    .map(|(_, requirement)| requirement.to_string()),
            );
        }

        if items.is_empty() {
            return ContentList::from(self.catalog().generic_requirements.clone());
        }

        items.dedup_preserving_order();
        items
    }

    pub fn extract_requirements(&self, description: &str) -> String {
        self.requirement_items(description).to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_gives_generic_requirements() {
        let advisor = Advisor::default();
        for description in ["", "   \n"] {
            let items = advisor.requirement_items(description);
            assert_eq!(items.items(), advisor.catalog().generic_requirements.as_slice());
        }
    }

    #[test]
    fn requirement_sentence_is_kept_and_terminated() {
        let advisor = Advisor::default();
        let items = advisor.requirement_items(
            "Programa para pymes. Las empresas deben estar al corriente de pagos. Plazo de tres meses",
        );
        assert_eq!(items.items(), ["Las empresas deben estar al corriente de pagos."]);
    }

    #[test]
    fn prefix_and_employee_rules() {
        let advisor = Advisor::default();
        let items = advisor.requirement_items(
            "Tener sede en Andalucía. Con un mínimo de 10 empleados. Sin más detalles.",
        );
        assert_eq!(
            items.items(),
            ["Tener sede en Andalucía.", "Con un mínimo de 10 empleados."]
        );
    }

    #[test]
    fn keyword_triggers_fire_in_order() {
        let advisor = Advisor::default();
        let items = advisor.requirement_items("Apoyo a proyectos viables de innovación para pymes");
        assert_eq!(items.len(), 3);
        assert!(items.items()[0].starts_with("Ser PYME"));
        assert!(items.items()[1].contains("componente innovador"));
        assert!(items.items()[2].contains("viabilidad técnica"));
    }

    #[test]
    fn unmatched_description_gives_generic_requirements() {
        let advisor = Advisor::default();
        let items = advisor.requirement_items("Ayudas para la compra de maquinaria agrícola.");
        assert_eq!(items.items(), advisor.catalog().generic_requirements.as_slice());
    }

    #[test]
    fn duplicate_sentences_are_removed() {
        let advisor = Advisor::default();
        let items = advisor.requirement_items("Ser elegible. Otra cosa. Ser elegible.");
        assert_eq!(items.items(), ["Ser elegible."]);
    }

    #[test]
    fn html_contains_sentence() {
        let html = Advisor::default()
            .extract_requirements("Las empresas deben cumplir estar al corriente de pagos.");
        assert!(html.contains("<li>Las empresas deben cumplir estar al corriente de pagos.</li>"));
    }
}
