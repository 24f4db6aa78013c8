use crate::errors::{AppError, AppResult};
use crate::models::{AidKind, Category};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

const GENERAL_TIPS: &[&str] = &[
    "Lea detenidamente las bases de la convocatoria antes de preparar la solicitud",
    "Identifique claramente los objetivos del proyecto y alinéelos con los del programa",
    "Incluya indicadores medibles para evaluar el éxito del proyecto",
    "Presente un presupuesto realista y bien justificado",
    "Destaque el impacto potencial (económico, social, ambiental) del proyecto",
];

const GENERIC_REQUIREMENTS: &[&str] = &[
    "Estar al corriente de las obligaciones tributarias y con la Seguridad Social.",
    "No estar incurso en ninguna de las prohibiciones previstas en la Ley General de Subvenciones.",
    "Realizar la actividad o proyecto que fundamenta la concesión de la ayuda.",
    "Justificar el cumplimiento de los requisitos y condiciones establecidos en la normativa.",
    "Someterse a las actuaciones de comprobación requeridas por el organismo concedente.",
];

const COMMON_DOCUMENTS: &[&str] = &[
    "Formulario de solicitud cumplimentado",
    "CIF/NIF de la empresa o entidad solicitante",
    "Escrituras de constitución y estatutos",
    "Acreditación del representante legal",
    "Certificados de estar al corriente de pagos con la Seguridad Social y Hacienda",
    "Declaración responsable de no estar incurso en prohibiciones para obtener la condición de beneficiario",
];

struct BuiltinCategory {
    category: Category,
    examples: &'static [&'static str],
    tips: &'static [&'static str],
}

const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        category: Category::Innovation,
        examples: &[
            "Desarrollo de un nuevo producto o servicio innovador",
            "Mejora significativa de procesos productivos mediante nuevas tecnologías",
            "Proyectos de investigación aplicada en colaboración con universidades o centros tecnológicos",
            "Implantación de tecnologías emergentes (IA, blockchain, etc.) en productos o servicios",
            "Diseño y desarrollo de prototipos y pruebas de concepto innovadoras",
        ],
        tips: &[
            "Demuestre claramente el carácter innovador del proyecto",
            "Detalle el estado del arte y cómo su proyecto lo supera",
            "Incluya un plan de protección de resultados (patentes, modelos de utilidad, etc.)",
            "Destaque la capacidad técnica del equipo para ejecutar el proyecto",
            "Cuantifique el potencial de comercialización de los resultados",
        ],
    },
    BuiltinCategory {
        category: Category::Digitalization,
        examples: &[
            "Implementación de sistemas de gestión empresarial (ERP/CRM)",
            "Desarrollo de tienda online o mejora del comercio electrónico existente",
            "Digitalización de procesos internos y gestión documental",
            "Implementación de soluciones de ciberseguridad",
            "Desarrollo de aplicaciones móviles para negocio o servicio al cliente",
        ],
        tips: &[
            "Presente un diagnóstico digital de partida de la empresa",
            "Defina claramente los objetivos de digitalización a alcanzar",
            "Detalle cómo la solución elegida se integra con los sistemas existentes",
            "Incluya un plan de formación para los empleados en las nuevas tecnologías",
            "Describa los indicadores de mejora que se utilizarán para medir el éxito",
        ],
    },
    BuiltinCategory {
        category: Category::Sustainability,
        examples: &[
            "Instalación de sistemas de energía renovable (solar, eólica, etc.)",
            "Mejora de la eficiencia energética en instalaciones productivas",
            "Implementación de economía circular en procesos productivos",
            "Desarrollo de productos o servicios con menor impacto ambiental",
            "Proyectos de reducción de emisiones o huella de carbono",
        ],
        tips: &[
            "Calcule y presente el impacto ambiental actual y la mejora esperada",
            "Alinee el proyecto con los Objetivos de Desarrollo Sostenible (ODS)",
            "Incluya certificaciones ambientales que posea o planee obtener",
            "Detalle el ciclo de vida completo de productos o servicios",
            "Presente un plan de gestión de residuos o economía circular",
        ],
    },
    BuiltinCategory {
        category: Category::Internationalization,
        examples: &[
            "Participación en ferias internacionales como expositor",
            "Desarrollo de plan de marketing internacional",
            "Adaptación de productos o servicios a mercados exteriores",
            "Registro de patentes o marcas en mercados internacionales",
            "Establecimiento de filiales o delegaciones en el extranjero",
        ],
        tips: &[
            "Incluya un análisis de mercado del país/países objetivo",
            "Presente estudios de competencia internacional",
            "Detalle la estrategia de entrada y canal de distribución",
            "Incluya plan de marketing adaptado al mercado objetivo",
            "Documente la capacidad productiva para atender mercados internacionales",
        ],
    },
    BuiltinCategory {
        category: Category::Entrepreneurship,
        examples: &[
            "Gastos de constitución y puesta en marcha de la empresa",
            "Desarrollo del producto mínimo viable (MVP)",
            "Primeras acciones comerciales y de marketing",
            "Contratación de personal clave para el arranque",
            "Alquiler de instalaciones y equipamiento inicial",
        ],
        tips: &[
            "Demuestre la escalabilidad de su modelo de negocio con datos y proyecciones realistas",
            "Presente un equipo con capacidades complementarias y experiencia relevante",
            "Incluya evidencias de tracción (clientes, ventas preliminares, etc.) si ya cuenta con ellas",
            "Detalle el mercado objetivo y la propuesta de valor diferencial",
        ],
    },
    BuiltinCategory {
        category: Category::Capital,
        examples: &[
            "Expansión y crecimiento de empresas con modelo de negocio probado",
            "Internacionalización de empresas con potencial de escalado",
            "Desarrollo de nuevas líneas de producto/servicio con alto potencial",
            "Adquisición de activos estratégicos para el crecimiento",
            "Refuerzo de la estructura financiera para acometer planes de crecimiento",
        ],
        tips: &[
            "Prepare un plan de negocio con proyecciones de crecimiento a 3-5 años",
            "Justifique la valoración de la empresa y el uso previsto de los fondos",
            "Presente un equipo directivo sólido y comprometido con el proyecto",
            "Describa el retorno esperado para el inversor y los plazos de salida",
        ],
    },
    BuiltinCategory {
        category: Category::Generic,
        examples: &[
            "Proyectos de mejora de la competitividad empresarial",
            "Inversiones en activos productivos para aumento de capacidad",
            "Desarrollo de nuevas líneas de negocio",
            "Proyectos de colaboración con otros agentes del sector",
            "Modernización de instalaciones y equipamiento",
        ],
        tips: &[
            "Adapte la solicitud al lenguaje y prioridades del organismo convocante",
            "Incluya cartas de apoyo de clientes o colaboradores relevantes",
            "Presente referencias de proyectos similares realizados con éxito",
            "Destaque la alineación del proyecto con estrategias regionales o nacionales",
            "Incluya un análisis de riesgos y plan de mitigación",
        ],
    },
];

struct BuiltinAidKind {
    kind: AidKind,
    tips: &'static [&'static str],
    documents: &'static [&'static str],
}

const BUILTIN_AID_KINDS: &[BuiltinAidKind] = &[
    BuiltinAidKind {
        kind: AidKind::Grant,
        tips: &[
            "Justifique la necesidad de la subvención para realizar el proyecto",
            "Detalle el efecto incentivador de la ayuda",
            "Presente un plan de ejecución realista según los plazos de la convocatoria",
            "Incluya un plan de contingencia ante posibles desviaciones",
            "Detalle los gastos subvencionables según las bases de la convocatoria",
        ],
        documents: &[
            "Memoria técnica del proyecto",
            "Presupuesto detallado",
            "Plan de financiación",
            "Declaración de otras ayudas solicitadas o concedidas",
            "Declaración de minimis (si aplica)",
        ],
    },
    BuiltinAidKind {
        kind: AidKind::Loan,
        tips: &[
            "Demuestre la capacidad de devolución del préstamo con proyecciones financieras",
            "Detalle la aplicación de los fondos con un cronograma de inversiones",
            "Presente garantías o avales si son requeridos",
            "Incluya un análisis de sensibilidad ante diversos escenarios",
            "Demuestre la solvencia financiera de la empresa",
        ],
        documents: &[
            "Memoria técnica y económica del proyecto",
            "Cuentas anuales de los últimos 2-3 ejercicios",
            "Plan de negocio a 3-5 años",
            "Garantías ofrecidas (si aplica)",
            "Declaración de endeudamiento actual",
        ],
    },
    BuiltinAidKind {
        kind: AidKind::Guarantee,
        tips: &[],
        documents: &[
            "Estados financieros",
            "Valoración de garantías",
            "Plan de negocio",
            "Justificación de necesidad de financiación",
            "Declaración de patrimonio",
        ],
    },
    BuiltinAidKind {
        kind: AidKind::TaxIncentive,
        tips: &[
            "Documente rigurosamente todas las actividades de I+D+i realizadas",
            "Mantenga una contabilidad detallada y separada de los gastos del proyecto",
            "Considere obtener un informe motivado o certificación para mayor seguridad jurídica",
            "Involucre al departamento financiero/fiscal desde el inicio del proyecto",
            "Conserve toda la documentación técnica que justifique la novedad del proyecto",
        ],
        documents: &[
            "Memoria técnica de actividades de I+D+i",
            "Justificación de gastos e inversiones realizadas",
            "Contabilidad separada o código contable específico",
            "Contratos del personal investigador (si aplica)",
            "Informe motivado o certificación (recomendado)",
        ],
    },
    BuiltinAidKind {
        kind: AidKind::Equity,
        tips: &[],
        documents: &[],
    },
    BuiltinAidKind {
        kind: AidKind::Other,
        tips: &[],
        documents: &[
            "Memoria técnica del proyecto",
            "Presupuesto detallado por partidas",
            "Justificación de la necesidad de la ayuda",
            "Impacto esperado y resultados cuantificables",
        ],
    },
];

/// Canned content for one program category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryContent {
    pub examples: Vec<String>,
    pub tips: Vec<String>,
}

/// Canned content for one aid kind. Empty lists defer to the generic content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AidKindContent {
    pub tips: Vec<String>,
    pub documents: Vec<String>,
}

static EMPTY_CATEGORY: CategoryContent = CategoryContent {
    examples: Vec::new(),
    tips: Vec::new(),
};
static EMPTY_AID_KIND: AidKindContent = AidKindContent {
    tips: Vec::new(),
    documents: Vec::new(),
};

/// Content tables the generators draw from, keyed by category and aid kind.
///
/// [`ContentCatalog::default`] holds the built-in Spanish content. A TOML file
/// can replace any list through [`ContentCatalog::from_toml_file`]; lists it
/// does not mention keep their built-in value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    pub general_tips: Vec<String>,
    pub generic_requirements: Vec<String>,
    pub common_documents: Vec<String>,
    categories: BTreeMap<Category, CategoryContent>,
    aid_kinds: BTreeMap<AidKind, AidKindContent>,
}

impl Default for ContentCatalog {
    fn default() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|b| {
                (
                    b.category,
                    CategoryContent {
                        examples: to_owned_list(b.examples),
                        tips: to_owned_list(b.tips),
                    },
                )
            })
            .collect();
        let aid_kinds = BUILTIN_AID_KINDS
            .iter()
            .map(|b| {
                (
                    b.kind,
                    AidKindContent {
                        tips: to_owned_list(b.tips),
                        documents: to_owned_list(b.documents),
                    },
                )
            })
            .collect();

        Self {
            general_tips: to_owned_list(GENERAL_TIPS),
            generic_requirements: to_owned_list(GENERIC_REQUIREMENTS),
            common_documents: to_owned_list(COMMON_DOCUMENTS),
            categories,
            aid_kinds,
        }
    }
}

impl ContentCatalog {
    pub fn category(&self, category: Category) -> &CategoryContent {
        self.categories.get(&category).unwrap_or(&EMPTY_CATEGORY)
    }

    pub fn aid_kind(&self, kind: AidKind) -> &AidKindContent {
        self.aid_kinds.get(&kind).unwrap_or(&EMPTY_AID_KIND)
    }

    /// Aid-kind documents, or the `other` list when the kind has none of its own.
    pub fn aid_documents(&self, kind: AidKind) -> &[String] {
        let documents = &self.aid_kind(kind).documents;
        if documents.is_empty() {
            &self.aid_kind(AidKind::Other).documents
        } else {
            documents
        }
    }

    /// Loads the built-in catalog and overlays the lists found in a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the
    /// TOML is malformed, contains unknown keys or categories, or sets a list
    /// to an empty array.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "Loaded content catalog");
        Ok(catalog)
    }

    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse catalog: {e}")))?;
        let mut catalog = Self::default();
        catalog.apply(file)?;
        Ok(catalog)
    }

    fn apply(&mut self, file: CatalogFile) -> AppResult<()> {
        overlay(&mut self.general_tips, file.general_tips, "general_tips")?;
        overlay(
            &mut self.generic_requirements,
            file.generic_requirements,
            "generic_requirements",
        )?;
        overlay(
            &mut self.common_documents,
            file.common_documents,
            "common_documents",
        )?;

        for (key, patch) in file.categories {
            let category: Category = key.parse()?;
            let entry = self.categories.entry(category).or_default();
            overlay(&mut entry.examples, patch.examples, &format!("{key}.examples"))?;
            overlay(&mut entry.tips, patch.tips, &format!("{key}.tips"))?;
        }

        for (key, patch) in file.aid_kinds {
            let kind: AidKind = key.parse()?;
            let entry = self.aid_kinds.entry(kind).or_default();
            overlay(&mut entry.tips, patch.tips, &format!("{key}.tips"))?;
            overlay(&mut entry.documents, patch.documents, &format!("{key}.documents"))?;
        }

        Ok(())
    }
}

/// On-disk shape of a catalog override file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogFile {
    general_tips: Option<Vec<String>>,
    generic_requirements: Option<Vec<String>>,
    common_documents: Option<Vec<String>>,
    categories: BTreeMap<String, CategoryPatch>,
    aid_kinds: BTreeMap<String, AidKindPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CategoryPatch {
    examples: Option<Vec<String>>,
    tips: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct AidKindPatch {
    tips: Option<Vec<String>>,
    documents: Option<Vec<String>>,
}

fn overlay(target: &mut Vec<String>, patch: Option<Vec<String>>, name: &str) -> AppResult<()> {
    if let Some(items) = patch {
        if items.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Catalog list '{name}' must not be empty"
            )));
        }
        *target = items;
    }
    Ok(())
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
