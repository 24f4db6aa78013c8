//! Composes generated sections into the HTML the web front end displays.

use crate::classifier::classify_aid_kind;
use crate::constants::{NOT_SPECIFIED, NO_RESULTS_ROW};
use crate::generator::{render_list, Advisor};
use crate::models::{AidKind, Category, Program, ProgramDescriptor};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Everything generated for one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramInfo {
    pub program: ProgramDescriptor,
    pub category: Category,
    pub aid_kind: AidKind,
    pub project_examples: String,
    pub application_advice: String,
    pub requirements: String,
    pub documentation: String,
    /// Empty when no deadline information was found
    pub deadline: String,
}

impl ProgramInfo {
    pub fn build(advisor: &Advisor, descriptor: &ProgramDescriptor) -> Self {
        let name = descriptor.name.as_str();
        let aid_type = descriptor.aid_type.as_str();
        let category = advisor.classify(name, aid_type);
        debug!(program = name, category = category.as_str(), "Building program info");

        Self {
            program: descriptor.clone(),
            category,
            aid_kind: classify_aid_kind(aid_type),
            project_examples: advisor.generate_project_examples(name, aid_type),
            application_advice: advisor.generate_application_advice(name, aid_type),
            requirements: advisor.extract_requirements(&descriptor.description),
            documentation: advisor.generate_documentation_info(aid_type, &descriptor.description),
            deadline: advisor.extract_deadline_info(&descriptor.convening_text, &descriptor.description),
        }
    }
}

fn or_not_specified(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_SPECIFIED
    } else {
        trimmed
    }
}

/// Renders the tabbed body of the program information dialog.
pub fn render_info_body(info: &ProgramInfo) -> String {
    let program = &info.program;
    let deadline_row = if info.deadline.is_empty() {
        String::new()
    } else {
        format!(
            r#"
                        <dt class="col-sm-4">Plazos:</dt>
                        <dd class="col-sm-8">{}</dd>"#,
            info.deadline
        )
    };

    format!(
        r##"<ul class="nav nav-tabs" id="programInfoTabs" role="tablist">
    <li class="nav-item" role="presentation">
        <button class="nav-link active" id="info-tab" data-bs-toggle="tab" data-bs-target="#info" type="button" role="tab" aria-controls="info" aria-selected="true"><i class="fas fa-info-circle me-1"></i>Resumen</button>
    </li>
    <li class="nav-item" role="presentation">
        <button class="nav-link" id="requisitos-tab" data-bs-toggle="tab" data-bs-target="#requisitos" type="button" role="tab" aria-controls="requisitos" aria-selected="false"><i class="fas fa-clipboard-check me-1"></i>Requisitos</button>
    </li>
    <li class="nav-item" role="presentation">
        <button class="nav-link" id="documentacion-tab" data-bs-toggle="tab" data-bs-target="#documentacion" type="button" role="tab" aria-controls="documentacion" aria-selected="false"><i class="fas fa-file-alt me-1"></i>Documentación</button>
    </li>
    <li class="nav-item" role="presentation">
        <button class="nav-link" id="consejos-tab" data-bs-toggle="tab" data-bs-target="#consejos" type="button" role="tab" aria-controls="consejos" aria-selected="false"><i class="fas fa-lightbulb me-1"></i>Consejos</button>
    </li>
</ul>
<div class="tab-content pt-3" id="programInfoTabsContent">
    <div class="tab-pane fade show active" id="info" role="tabpanel" aria-labelledby="info-tab">
        <div class="alert alert-primary">
            <h5 class="alert-heading">Programa: {name}</h5>
            <p class="mb-0">Gestionado por {organism}</p>
        </div>
        <div class="row mb-3">
            <div class="col-md-6">
                <div class="card h-100">
                    <div class="card-header bg-light">Detalles básicos</div>
                    <div class="card-body">
                        <dl class="row mb-0">
                        <dt class="col-sm-4">Tipo:</dt>
                        <dd class="col-sm-8">{aid_type}</dd>
                        <dt class="col-sm-4">Intensidad:</dt>
                        <dd class="col-sm-8">{intensity}</dd>
                        <dt class="col-sm-4">Convocatoria:</dt>
                        <dd class="col-sm-8">{convening}</dd>{deadline_row}
                        </dl>
                    </div>
                </div>
            </div>
            <div class="col-md-6">
                <div class="card h-100">
                    <div class="card-header bg-light">Adecuación a su proyecto</div>
                    <div class="card-body"><p>{justification}</p></div>
                </div>
            </div>
        </div>
        <div class="card mb-0">
            <div class="card-header bg-light">Descripción completa</div>
            <div class="card-body"><p>{description}</p></div>
        </div>
    </div>
    <div class="tab-pane fade" id="requisitos" role="tabpanel" aria-labelledby="requisitos-tab">
        <div class="alert alert-warning">
            <h5 class="alert-heading"><i class="fas fa-exclamation-triangle me-2"></i>Requisitos de elegibilidad</h5>
            <p>Para acceder a este programa, deberá cumplir con los siguientes requisitos:</p>
        </div>
        <div class="card mb-3"><div class="card-body">{requirements}</div></div>
        <div class="card mb-0">
            <div class="card-header bg-light">Ejemplos de proyectos financiables</div>
            <div class="card-body">{examples}</div>
        </div>
    </div>
    <div class="tab-pane fade" id="documentacion" role="tabpanel" aria-labelledby="documentacion-tab">
        <div class="alert alert-info">
            <h5 class="alert-heading"><i class="fas fa-file-alt me-2"></i>Documentación necesaria</h5>
            <p>Para solicitar esta ayuda, generalmente necesitará presentar los siguientes documentos:</p>
        </div>
        <div class="card mb-0"><div class="card-body">{documentation}</div></div>
    </div>
    <div class="tab-pane fade" id="consejos" role="tabpanel" aria-labelledby="consejos-tab">
        <div class="alert alert-success">
            <h5 class="alert-heading"><i class="fas fa-lightbulb me-2"></i>Consejos para su solicitud</h5>
            <p>Recomendaciones para aumentar sus posibilidades de éxito en este programa:</p>
        </div>
        <div class="card mb-0"><div class="card-body">{advice}</div></div>
    </div>
</div>"##,
        name = or_not_specified(&program.name),
        organism = or_not_specified(&program.organism),
        aid_type = or_not_specified(&program.aid_type),
        intensity = or_not_specified(&program.intensity),
        convening = or_not_specified(&program.convening_text),
        deadline_row = deadline_row,
        justification = or_not_specified(&program.justification),
        description = or_not_specified(&program.description),
        requirements = info.requirements,
        examples = info.project_examples,
        documentation = info.documentation,
        advice = info.application_advice,
    )
}

const PRINT_STYLES: &str = r#"<style>
    body { font-family: Arial, sans-serif; margin: 20px; }
    .print-header { margin-bottom: 20px; text-align: center; }
    .print-description { margin-bottom: 30px; }
    .print-program { margin-bottom: 20px; }
    .print-program h3 { color: #2c3e50; margin-bottom: 10px; }
    .print-program-details { margin-top: 15px; }
    .print-program-details h4 { font-size: 16px; margin-bottom: 10px; }
    .print-footer { margin-top: 30px; font-size: 12px; text-align: center; color: #7f8c8d; }
    hr { border: 0; border-top: 1px solid #eee; margin: 20px 0; }
</style>"#;

/// Renders a standalone printable document covering several programs.
///
/// Program sections are rendered in parallel and appear in input order.
///
/// # Arguments
///
/// * `advisor` - Content generator used for every section
/// * `programs` - Programs to include, numbered from 1
/// * `date` - Print date shown in the header and footer
pub fn render_print_document(
    advisor: &Advisor,
    programs: &[ProgramDescriptor],
    date: &str,
) -> String {
    let sections: Vec<String> = programs
        .par_iter()
        .enumerate()
        .map(|(index, descriptor)| render_print_section(advisor, index + 1, descriptor))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Programas de Financiación - {date}</title>
{PRINT_STYLES}
</head>
<body>
<div class="print-header">
    <h2>Programas de financiación recomendados</h2>
    <p>Fecha: {date}</p>
</div>
<div class="print-description">
    <p>Este documento contiene información sobre programas de financiación que pueden ser relevantes para su proyecto o empresa. La información es orientativa y debe consultar las fuentes oficiales para obtener detalles actualizados.</p>
</div>
{sections}
<div class="print-footer">
    <p>Documento generado el {date}</p>
    <p>La información contenida en este documento es orientativa. Consulte las bases de cada convocatoria.</p>
</div>
</body>
</html>
"#,
        sections = sections.join("\n")
    )
}

fn render_print_section(advisor: &Advisor, number: usize, descriptor: &ProgramDescriptor) -> String {
    let info = ProgramInfo::build(advisor, descriptor);
    let program = &info.program;

    let mut details = vec![
        format!("Organismo: {}", or_not_specified(&program.organism)),
        format!("Tipo de ayuda: {}", or_not_specified(&program.aid_type)),
        format!("Categoría: {}", info.category.display_name()),
    ];
    if !program.intensity.trim().is_empty() {
        details.push(format!("Intensidad: {}", program.intensity.trim()));
    }
    if !info.deadline.is_empty() {
        details.push(format!("Plazos: {}", info.deadline));
    }

    format!(
        r#"<div class="print-program">
    <h3>{number}. {name}</h3>
    <div class="print-program-description"><p>{description}</p></div>
    <div class="print-program-details">
        <h4>Detalles del programa:</h4>
        {details}
        <h4>Requisitos:</h4>
        {requirements}
        <h4>Documentación:</h4>
        {documentation}
    </div>
</div>
<hr>"#,
        name = or_not_specified(&program.name),
        description = or_not_specified(&program.description),
        details = render_list(details.as_slice()),
        requirements = info.requirements,
        documentation = info.documentation,
    )
}

fn status_badge(status: &str) -> &'static str {
    if status.contains("Abierta") {
        "success"
    } else if status.contains("Pendiente") {
        "warning"
    } else {
        "secondary"
    }
}

/// Renders the `<tbody>` rows of the program search results table.
pub fn render_results_table(programs: &[Program]) -> String {
    if programs.is_empty() {
        return NO_RESULTS_ROW.to_string();
    }

    programs
        .iter()
        .map(|p| {
            let status = p
                .status()
                .map(|s| format!(r#"<span class="badge bg-{}">{s}</span>"#, status_badge(s)))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                dash_if_blank(p.nombre.as_deref()),
                dash_if_blank(p.organismo.as_deref()),
                status,
                dash_if_blank(p.codigo_bdns.as_deref()),
                dash_if_blank(p.id.as_deref()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn dash_if_blank(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Convocatoria;

    fn descriptor(name: &str) -> ProgramDescriptor {
        ProgramDescriptor::new(name, "Subvención", "", "")
    }

    #[test]
    fn test_build_fills_every_section() {
        let advisor = Advisor::default();
        let info = ProgramInfo::build(
            &advisor,
            &ProgramDescriptor::new("Kit Digital", "Subvención", "", "Convocatoria permanente"),
        );
        assert_eq!(info.category, Category::Digitalization);
        assert_eq!(info.aid_kind, AidKind::Grant);
        assert!(info.project_examples.contains("<li>"));
        assert!(info.application_advice.contains("Consejos específicos:"));
        assert!(info.requirements.contains("<li>"));
        assert!(info.documentation.contains("<li>"));
        assert_eq!(info.deadline, "Convocatoria permanente sin fecha límite definida.");
    }

    #[test]
    fn test_info_serializes_category_in_snake_case() {
        let info = ProgramInfo::build(&Advisor::default(), &descriptor("Programa de exportación"));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["category"], "internationalization");
        assert_eq!(json["aid_kind"], "grant");
        assert_eq!(json["program"]["name"], "Programa de exportación");
    }

    #[test]
    fn test_info_body_omits_empty_deadline_row() {
        let advisor = Advisor::default();
        let without = render_info_body(&ProgramInfo::build(&advisor, &descriptor("Kit Digital")));
        assert!(!without.contains("Plazos:"));

        let with = render_info_body(&ProgramInfo::build(
            &advisor,
            &ProgramDescriptor::new("Kit Digital", "Subvención", "", "Convocatoria anual"),
        ));
        assert!(with.contains("Plazos:"));
    }

    #[test]
    fn test_info_body_marks_missing_fields() {
        let body = render_info_body(&ProgramInfo::build(&Advisor::default(), &descriptor("Kit Digital")));
        assert!(body.contains("Gestionado por No especificado"));
        for tab in ["Resumen", "Requisitos", "Documentación", "Consejos"] {
            assert!(body.contains(tab), "{tab}");
        }
    }

    #[test]
    fn test_info_body_tabs_target_their_panes() {
        let body = render_info_body(&ProgramInfo::build(&Advisor::default(), &descriptor("Kit Digital")));
        assert!(body.starts_with(r#"<ul class="nav nav-tabs" id="programInfoTabs""#));
        assert!(body.ends_with("</div>"));
        for pane in ["info", "requisitos", "documentacion", "consejos"] {
            assert!(body.contains(&format!(r##"data-bs-target="#{pane}""##)), "{pane}");
            assert!(body.contains(&format!(r#"id="{pane}" role="tabpanel""#)), "{pane}");
        }
    }

    #[test]
    fn test_print_document_keeps_input_order() {
        let programs: Vec<ProgramDescriptor> = (1..=12)
            .map(|i| descriptor(&format!("Programa número {i}")))
            .collect();
        let html = render_print_document(&Advisor::default(), &programs, "01/02/2025");

        let mut last = 0;
        for (i, p) in programs.iter().enumerate() {
            let heading = format!("<h3>{}. {}</h3>", i + 1, p.name);
            let pos = html.find(&heading).unwrap();
            assert!(pos > last);
            last = pos;
        }
        assert!(html.contains("Fecha: 01/02/2025"));
    }

    #[test]
    fn test_print_document_with_no_programs() {
        let html = render_print_document(&Advisor::default(), &[], "hoy");
        assert!(html.contains("print-header"));
        assert!(!html.contains("print-program\""));
    }

    #[test]
    fn test_results_table_empty() {
        assert_eq!(render_results_table(&[]), NO_RESULTS_ROW);
    }

    #[test]
    fn test_results_table_badges() {
        let program = |estado: &str| Program {
            nombre: Some("Neotec".to_string()),
            convocatoria: Some(Convocatoria {
                estado: Some(estado.to_string()),
                ..Convocatoria::default()
            }),
            ..Program::default()
        };
        let html = render_results_table(&[
            program("Abierta"),
            program("Pendiente de apertura"),
            program("Cerrada"),
        ]);
        assert!(html.contains(r#"<span class="badge bg-success">Abierta</span>"#));
        assert!(html.contains(r#"<span class="badge bg-warning">Pendiente de apertura</span>"#));
        assert!(html.contains(r#"<span class="badge bg-secondary">Cerrada</span>"#));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn test_results_table_dashes_missing_values() {
        let html = render_results_table(&[Program::default()]);
        assert_eq!(
            html,
            "<tr><td><strong>-</strong></td><td>-</td><td>-</td><td>-</td><td>-</td></tr>"
        );
    }
}
