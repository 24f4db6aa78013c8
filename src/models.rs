use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Topical bucket a financing program falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Innovation,
    Digitalization,
    Sustainability,
    Internationalization,
    Entrepreneurship,
    Capital,
    Generic,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Innovation,
        Self::Digitalization,
        Self::Sustainability,
        Self::Internationalization,
        Self::Entrepreneurship,
        Self::Capital,
        Self::Generic,
    ];

    /// Returns a human-readable (Spanish) name for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Innovation => "Innovación e I+D",
            Self::Digitalization => "Digitalización",
            Self::Sustainability => "Sostenibilidad",
            Self::Internationalization => "Internacionalización",
            Self::Entrepreneurship => "Emprendimiento",
            Self::Capital => "Capital",
            Self::Generic => "General",
        }
    }

    /// Returns the snake_case identifier used in catalog files and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Innovation => "innovation",
            Self::Digitalization => "digitalization",
            Self::Sustainability => "sustainability",
            Self::Internationalization => "internationalization",
            Self::Entrepreneurship => "entrepreneurship",
            Self::Capital => "capital",
            Self::Generic => "generic",
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown category: {value}")))
    }
}

/// Financial instrument behind a program, derived from its aid-type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AidKind {
    Grant,
    Loan,
    Guarantee,
    TaxIncentive,
    Equity,
    Other,
}

impl AidKind {
    pub const ALL: [AidKind; 6] = [
        Self::Grant,
        Self::Loan,
        Self::Guarantee,
        Self::TaxIncentive,
        Self::Equity,
        Self::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Grant => "Subvención",
            Self::Loan => "Préstamo",
            Self::Guarantee => "Garantía",
            Self::TaxIncentive => "Incentivo fiscal",
            Self::Equity => "Capital",
            Self::Other => "Otro",
        }
    }
}

impl AidKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grant => "grant",
            Self::Loan => "loan",
            Self::Guarantee => "guarantee",
            Self::TaxIncentive => "tax_incentive",
            Self::Equity => "equity",
            Self::Other => "other",
        }
    }
}

impl FromStr for AidKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown aid kind: {value}")))
    }
}

/// The strings a content generator works on, for one program.
///
/// Absent values are empty strings; every generator treats an empty field as
/// "no information" and falls back to boilerplate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDescriptor {
    pub name: String,
    pub aid_type: String,
    pub description: String,
    pub convening_text: String,
    /// Managing body, display only
    #[serde(default)]
    pub organism: String,
    /// Aid intensity, display only
    #[serde(default)]
    pub intensity: String,
    /// Why the program fits the user's project, display only
    #[serde(default)]
    pub justification: String,
}

impl ProgramDescriptor {
    pub fn new(
        name: impl Into<String>,
        aid_type: impl Into<String>,
        description: impl Into<String>,
        convening_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            aid_type: aid_type.into(),
            description: description.into(),
            convening_text: convening_text.into(),
            ..Self::default()
        }
    }
}

/// Application round of a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Convocatoria {
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub fecha_apertura: Option<String>,
    #[serde(default)]
    pub fecha_cierre: Option<String>,
}

impl Convocatoria {
    /// Flattens status and dates into the free text the deadline extractor reads.
    pub fn summary(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(estado) = non_blank(&self.estado) {
            parts.push(estado.to_string());
        }
        if let Some(apertura) = non_blank(&self.fecha_apertura) {
            parts.push(format!("Apertura: {apertura}"));
        }
        if let Some(cierre) = non_blank(&self.fecha_cierre) {
            parts.push(format!("Cierre: {cierre}"));
        }
        parts.join(". ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enlaces {
    #[serde(default)]
    pub url_bdns: Option<String>,
    #[serde(default)]
    pub convocatoria: Option<String>,
    #[serde(default)]
    pub bases: Option<String>,
}

/// A financing program as exchanged with the program API.
///
/// Fields without a typed counterpart (`financiacion`, `requisitos`, `tags`,
/// ...) are kept in `extra` and written back on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub codigo_bdns: Option<String>,
    #[serde(default)]
    pub organismo: Option<String>,
    #[serde(default)]
    pub tipo_ayuda: Option<String>,
    #[serde(default)]
    pub ambito: Option<String>,
    #[serde(default)]
    pub convocatoria: Option<Convocatoria>,
    #[serde(default)]
    pub resumen_breve: Option<String>,
    #[serde(default)]
    pub descripcion_detallada: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub beneficiarios: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sectores: Vec<String>,
    #[serde(default)]
    pub enlaces: Option<Enlaces>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The backend sends BDNS codes as integers; stored files may hold strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Integer(i64),
        Decimal(f64),
    }

    Ok(Option::<Code>::deserialize(deserializer)?.map(|code| match code {
        Code::Text(text) => text,
        Code::Integer(n) => n.to_string(),
        Code::Decimal(n) => n.to_string(),
    }))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Program {
    /// Checks that the fields the API requires on save are present and non-blank.
    pub fn validate_required(&self) -> AppResult<()> {
        let required = [
            ("nombre", &self.nombre),
            ("organismo", &self.organismo),
            ("tipo_ayuda", &self.tipo_ayuda),
        ];
        for (field, value) in required {
            if non_blank(value).is_none() {
                return Err(AppError::MissingField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Status label of the current application round, if any.
    pub fn status(&self) -> Option<&str> {
        self.convocatoria
            .as_ref()
            .and_then(|c| non_blank(&c.estado))
    }
}

impl From<&Program> for ProgramDescriptor {
    fn from(program: &Program) -> Self {
        // Prefer the detailed description; the short summary is better than nothing.
        let description = non_blank(&program.descripcion_detallada)
            .or_else(|| non_blank(&program.resumen_breve))
            .unwrap_or_default();

        Self {
            name: program.nombre.clone().unwrap_or_default(),
            aid_type: program.tipo_ayuda.clone().unwrap_or_default(),
            description: description.to_string(),
            convening_text: program
                .convocatoria
                .as_ref()
                .map(Convocatoria::summary)
                .unwrap_or_default(),
            organism: program.organismo.clone().unwrap_or_default(),
            intensity: String::new(),
            justification: String::new(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
