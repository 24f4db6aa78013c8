use crate::models::{AidKind, Category};
use tracing::debug;

/// How a keyword is matched against lower-cased text.
#[derive(Debug, Clone, Copy)]
pub enum Keyword {
    /// Plain substring match
    Contains(&'static str),
    /// Match only a whole alphanumeric token, so short acronyms like "tic" do
    /// not fire inside "política"
    Word(&'static str),
}

impl Keyword {
    fn matches(&self, lower: &str) -> bool {
        match self {
            Self::Contains(needle) => lower.contains(needle),
            Self::Word(word) => lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == *word),
        }
    }
}

/// Which program field a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    AidType,
}

/// One entry of the ordered category table.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: Category,
    pub field: Field,
    pub keywords: &'static [Keyword],
}

/// Category rules in priority order. The first rule with a matching keyword wins;
/// programs matching none are [`Category::Generic`].
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Innovation,
        field: Field::Name,
        keywords: &[
            Keyword::Contains("innova"),
            Keyword::Contains("i+d"),
            Keyword::Contains("investigación"),
            Keyword::Contains("desarrollo"),
            Keyword::Contains("cdti"),
        ],
    },
    CategoryRule {
        category: Category::Digitalization,
        field: Field::Name,
        keywords: &[
            Keyword::Contains("digital"),
            Keyword::Contains("kit digital"),
            Keyword::Contains("transformacion"),
            Keyword::Contains("transformación"),
            Keyword::Contains("industria 4.0"),
            Keyword::Word("tic"),
        ],
    },
    CategoryRule {
        category: Category::Sustainability,
        field: Field::Name,
        keywords: &[
            Keyword::Contains("sostenib"),
            Keyword::Contains("verde"),
            Keyword::Contains("ecológ"),
            Keyword::Contains("ambient"),
            Keyword::Contains("energ"),
            Keyword::Contains("eficiencia"),
            Keyword::Contains("circular"),
        ],
    },
    CategoryRule {
        category: Category::Internationalization,
        field: Field::Name,
        keywords: &[
            Keyword::Contains("internacional"),
            Keyword::Contains("export"),
            Keyword::Contains("exterior"),
            Keyword::Contains("global"),
        ],
    },
    CategoryRule {
        category: Category::Entrepreneurship,
        field: Field::Name,
        keywords: &[
            Keyword::Contains("emprend"),
            Keyword::Contains("start"),
            Keyword::Contains("creación de empresa"),
            Keyword::Contains("nueva empresa"),
        ],
    },
    CategoryRule {
        category: Category::Capital,
        field: Field::AidType,
        keywords: &[
            Keyword::Contains("capital"),
            Keyword::Contains("participativo"),
        ],
    },
];

/// Aid-kind rules in priority order, matched against the aid-type label.
pub const AID_KIND_RULES: &[(AidKind, &[&str])] = &[
    (AidKind::Grant, &["subvención", "subvencion", "ayuda"]),
    (AidKind::Loan, &["préstamo", "prestamo", "crédito", "credito"]),
    (AidKind::Guarantee, &["garantía", "garantia", "aval"]),
    (AidKind::TaxIncentive, &["deducción", "deduccion", "fiscal"]),
    (AidKind::Equity, &["capital", "participativo"]),
];

/// Classifies a program into a topical [`Category`].
///
/// Both inputs are lower-cased before matching, and empty inputs are valid:
/// they simply match nothing and yield [`Category::Generic`].
///
/// # Example
///
/// ```
/// use financing_advisor::classifier::classify;
/// use financing_advisor::models::Category;
///
/// assert_eq!(classify("Programa NEOTEC de innovación", "Subvención"), Category::Innovation);
/// assert_eq!(classify("Fondo de coinversión", "Préstamo participativo"), Category::Capital);
/// assert_eq!(classify("", ""), Category::Generic);
/// ```
pub fn classify(name: &str, aid_type: &str) -> Category {
    let name_lower = name.to_lowercase();
    let aid_lower = aid_type.to_lowercase();

    let category = CATEGORY_RULES
        .iter()
        .find(|rule| {
            let text = match rule.field {
                Field::Name => &name_lower,
                Field::AidType => &aid_lower,
            };
            rule.keywords.iter().any(|k| k.matches(text))
        })
        .map(|rule| rule.category)
        .unwrap_or(Category::Generic);

    debug!(
        name = name,
        aid_type = aid_type,
        category = category.as_str(),
        "Classified program"
    );
    category
}

/// Derives the financial instrument from an aid-type label.
pub fn classify_aid_kind(aid_type: &str) -> AidKind {
    let lower = aid_type.to_lowercase();
    AID_KIND_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(kind, _)| *kind)
        .unwrap_or(AidKind::Other)
}

/// Returns true if `haystack` contains any of `needles`.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
