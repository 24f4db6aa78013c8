//! Common test utilities for integration tests

use std::fs;
use std::path::Path;

/// Helper function to write a program JSON file, creating parent directories
#[allow(dead_code)]
pub fn create_program_file(path: &Path, content: &str) {
    let parent = path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::write(path, content).unwrap();
}

/// API program with every field the generators read
#[allow(dead_code)]
pub const SAMPLE_PROGRAM_JSON: &str = r#"{
  "id": "neotec-2025",
  "nombre": "Programa NEOTEC de innovación",
  "codigo_bdns": "812345",
  "organismo": "CDTI",
  "tipo_ayuda": "Subvención",
  "ambito": "Nacional",
  "convocatoria": {
    "estado": "Abierta",
    "fecha_apertura": "2025-01-15",
    "fecha_cierre": "2025-05-30"
  },
  "resumen_breve": "Ayudas a empresas de base tecnológica.",
  "descripcion_detallada": "Ayudas para nuevas empresas de base tecnológica. Las empresas deben cumplir estar al corriente de pagos. El solicitante deberá presentar el certificado de la Agencia Tributaria. Solicitudes hasta el 30 de mayo de 2025.",
  "beneficiarios": ["Pequeñas empresas innovadoras"],
  "sectores": ["Tecnología"],
  "enlaces": {"url_bdns": "https://www.infosubvenciones.es/bdnstrans/GE/es/convocatorias/812345"}
}"#;

/// Results page with two program cards
#[allow(dead_code)]
pub const SAMPLE_RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="results">
    <div class="program-card">
      <div class="program-card-header">
        <h4>Préstamos ENISA Jóvenes Emprendedores</h4>
        <button class="info-button-header" data-program="ENISA Jóvenes Emprendedores"></button>
      </div>
      <div class="program-details">
        <div><span class="detail-label">Organismo:</span><span class="detail-value">ENISA</span></div>
        <div><span class="detail-label">Tipo de ayuda:</span><span class="detail-value">Préstamo participativo</span></div>
        <div><span class="detail-label">Intensidad:</span><span class="detail-value">Hasta 75.000 €</span></div>
        <div><span class="detail-label">Convocatoria:</span><span class="detail-value">Convocatoria permanente</span></div>
      </div>
      <div class="program-description"><p>Financiación para startups. Será necesario aportar un plan de negocio.</p></div>
      <div class="justification-text">Su empresa tiene menos de dos años.</div>
    </div>
    <div class="program-card">
      <div class="program-card-header"><h4>Bono Kit Digital</h4></div>
      <div class="program-details">
        <div><span class="detail-label">Tipo de ayuda:</span><span class="detail-value">Subvención</span></div>
      </div>
    </div>
  </div>
</body>
</html>"#;

/// Raw advisor response with titles, bullets, a link and a broken euro sign
#[allow(dead_code)]
pub const SAMPLE_ADVISOR_RESPONSE: &str = "Resumen del programa:\n\nEl importe máximo es de 50.000 â‚¬ por proyecto.\n\n- Plazo de ejecución de 12 meses\n- Gastos no elegible: IVA\n\nMás información en https://www.cdti.es/neotec";
