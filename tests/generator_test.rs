//! Tests for the content generators through the public API

use financing_advisor::catalog::ContentCatalog;
use financing_advisor::classifier::classify;
use financing_advisor::constants::{EMPTY_LIST_PLACEHOLDER, LOAN_EXAMPLE_SUFFIX};
use financing_advisor::generator::{extract_deadline_info, Advisor};
use financing_advisor::models::{Category, Program, ProgramDescriptor};

mod common;
use common::SAMPLE_PROGRAM_JSON;

#[test]
fn test_classify_is_total() {
    let inputs = [
        ("", ""),
        ("   ", "???"),
        ("ÑANDÚ 123 !!", "€€€"),
        ("Programa de I+D+i", "Préstamo"),
        ("x".repeat(10_000).as_str(), ""),
    ]
    .map(|(n, t)| (n.to_string(), t.to_string()));
    for (name, aid_type) in inputs {
        assert!(Category::ALL.contains(&classify(&name, &aid_type)));
    }
}

#[test]
fn test_classify_ignores_case() {
    for name in ["kit digital", "KIT DIGITAL", "Kit Digital"] {
        assert_eq!(classify(name, "SUBVENCIÓN"), Category::Digitalization);
    }
}

#[test]
fn test_requirements_for_empty_description_are_generic() {
    let advisor = Advisor::default();
    let html = advisor.extract_requirements("");
    assert_eq!(html.matches("<li>").count(), 5);
    for requirement in &advisor.catalog().generic_requirements {
        assert!(html.contains(requirement.as_str()));
    }
}

#[test]
fn test_absent_program_description_behaves_like_empty() {
    let advisor = Advisor::default();
    let program: Program = serde_json::from_str(r#"{"nombre": "Sin descripción"}"#).unwrap();
    let descriptor = ProgramDescriptor::from(&program);
    assert_eq!(
        advisor.extract_requirements(&descriptor.description),
        advisor.extract_requirements("")
    );
}

#[test]
fn test_requirement_sentence_surfaces() {
    let html = Advisor::default()
        .extract_requirements("Las empresas deben cumplir estar al corriente de pagos.");
    assert!(html.contains("Las empresas deben cumplir estar al corriente de pagos."));
}

#[test]
fn test_loan_suffixes_every_example() {
    let advisor = Advisor::default();
    for name in ["Kit Digital", "Programa verde", "Plan comercio"] {
        let examples = advisor.project_examples(name, "Préstamo ordinario");
        assert!(!examples.is_empty());
        assert!(examples
            .items()
            .iter()
            .all(|e| e.ends_with(LOAN_EXAMPLE_SUFFIX)));
    }
}

#[test]
fn test_deadline_edge_cases() {
    assert_eq!(extract_deadline_info("", ""), "");
    assert_eq!(
        extract_deadline_info("Convocatoria permanente", ""),
        "Convocatoria permanente sin fecha límite definida."
    );
}

#[test]
fn test_document_sentence_precedes_typical_list() {
    let advisor = Advisor::default();
    let html = advisor.generate_documentation_info(
        "Subvención",
        "Para solicitarla deberá presentar el certificado de situación censal. Nada más",
    );
    let sentence = html
        .find("deberá presentar el certificado de situación censal.")
        .unwrap();
    let first_common = html
        .find(advisor.catalog().common_documents[0].as_str())
        .unwrap();
    assert!(sentence < first_common);
}

#[test]
fn test_generators_are_idempotent() {
    let advisor = Advisor::default();
    let program: Program = serde_json::from_str(SAMPLE_PROGRAM_JSON).unwrap();
    let d = ProgramDescriptor::from(&program);

    let run = || {
        (
            advisor.generate_project_examples(&d.name, &d.aid_type),
            advisor.generate_application_advice(&d.name, &d.aid_type),
            advisor.extract_requirements(&d.description),
            advisor.generate_documentation_info(&d.aid_type, &d.description),
            advisor.extract_deadline_info(&d.convening_text, &d.description),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn test_sample_program_sections() {
    let advisor = Advisor::default();
    let program: Program = serde_json::from_str(SAMPLE_PROGRAM_JSON).unwrap();
    let d = ProgramDescriptor::from(&program);

    assert_eq!(advisor.classify(&d.name, &d.aid_type), Category::Innovation);
    assert_eq!(
        advisor.extract_deadline_info(&d.convening_text, &d.description),
        "Hasta el 30 de mayo de 2025"
    );
    let requirements = advisor.extract_requirements(&d.description);
    assert!(requirements.contains("<li>Las empresas deben cumplir estar al corriente de pagos.</li>"));
}

#[test]
fn test_guarantee_without_tips_uses_generic_advice() {
    let catalog = ContentCatalog::from_toml_str(
        r#"
        [aid_kinds.guarantee]
        documents = ["Aval bancario"]
        "#,
    )
    .unwrap();
    let advisor = Advisor::new(catalog);
    // Generic program with a guarantee: no guarantee tips, so generic tips are used
    let html = advisor.generate_application_advice("Plan comercio", "Aval");
    assert!(!html.contains(EMPTY_LIST_PLACEHOLDER));
    assert!(advisor
        .generate_documentation_info("Aval", "")
        .contains("<li>Aval bancario</li>"));
}
