// Program API endpoints (relative to the configured base URL)
pub const API_SEARCH_PATH: &str = "api/programas-financiacion";
pub const API_PROGRAM_PATH: &str = "api/programa";
pub const API_SAVE_PATH: &str = "api/guardar-programa";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/";

// Aid-type keywords driving example suffixes
pub const LOAN_KEYWORDS: &[&str] = &["préstamo", "prestamo"];
pub const GRANT_SUFFIX_KEYWORDS: &[&str] = &["subvención", "subvencion"];
pub const SME_KEYWORDS: &[&str] = &["pyme"];
pub const LOAN_EXAMPLE_SUFFIX: &str = " (con inversiones significativas en activos)";
pub const SME_EXAMPLE_SUFFIX: &str = " (adaptado a la escala de PYME)";

// Sentence scanning
pub const SENTENCE_SPLIT_PATTERN: &str = r"[.!?]\s+";
pub const REQUIREMENT_PHRASES: &[&str] = &[
    "requisito",
    "debe cumplir",
    "será necesario",
    "elegible",
    "podrán acceder",
    "podrán solicitar",
    "estar al corriente",
    "tener la condición",
];
pub const REQUIREMENT_PREFIXES: &[&str] = &["tener", "estar", "no haber"];
pub const DOCUMENT_KEYWORDS: &[&str] = &[
    "presentar",
    "adjuntar",
    "aportar",
    "documento",
    "documentación",
    "certificado",
    "memoria",
];

// Keyword-triggered requirements, checked in this order when no sentence matches
pub const REQUIREMENT_TRIGGERS: &[(&[&str], &str)] = &[
    (
        &["pyme", "pequeña y mediana"],
        "Ser PYME según la definición de la UE (menos de 250 empleados y volumen de negocio anual inferior a 50M€).",
    ),
    (
        &["startup", "nueva creación"],
        "Empresa de reciente creación (menos de 5 años desde su constitución).",
    ),
    (
        &["innovador", "innovación"],
        "El proyecto debe tener un componente innovador demostrable.",
    ),
    (
        &["viabilidad", "viable"],
        "El proyecto debe demostrar viabilidad técnica, económica y comercial.",
    ),
];

// Deadline extraction
pub const DATE_PATTERNS: &[&str] = &[
    r"hasta\s+el\s+(\d{1,2}\s+de\s+[a-zéñ]+\s+de\s+\d{4})",
    r"del\s+(\d{1,2}\s+de\s+[a-zéñ]+)\s+al\s+(\d{1,2}\s+de\s+[a-zéñ]+\s+de\s+\d{4})",
    r"plazo.*?(\d{1,2}\s+de\s+[a-zéñ]+\s+de\s+\d{4})",
    r"fecha\s+límite[^.]*?(\d{1,2}/\d{1,2}/\d{2,4})",
];
pub const OPEN_DEADLINE_MESSAGE: &str =
    "Convocatoria con plazo abierto. Consulte la web oficial para fechas específicas.";
pub const STANDING_CALL_MESSAGE: &str = "Convocatoria permanente sin fecha límite definida.";
pub const ANNUAL_CALL_MESSAGE: &str =
    "Convocatoria anual. Consulte la web oficial para plazos específicos del año en curso.";
pub const CLOSED_CALL_MESSAGE: &str = "Convocatoria cerrada. Pendiente de apertura de nuevo plazo.";

// HTML fragments
pub const EMPTY_LIST_PLACEHOLDER: &str = r#"<p class="text-muted">No hay información disponible.</p>"#;
pub const DOCUMENTATION_SEPARATOR: &str = "<hr>";
pub const TYPICAL_DOCUMENTATION_INTRO: &str = r#"<p><i class="fas fa-info-circle me-2"></i>Adicionalmente, es habitual que se requiera la siguiente documentación:</p>"#;
pub const NOT_SPECIFIED: &str = "No especificado";
pub const NO_RESULTS_ROW: &str =
    r#"<tr><td colspan="5" class="text-center">No se encontraron resultados</td></tr>"#;
