use crate::constants::NOT_SPECIFIED;
use crate::errors::{AppError, AppResult};
use crate::models::ProgramDescriptor;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

// Results page selectors
const CARD_SELECTOR: &str = ".program-card";
const INFO_BUTTON_SELECTOR: &str = ".info-button-header";
const CARD_TITLE_SELECTOR: &str = ".program-card-header h4";
const DETAIL_LABEL_SELECTOR: &str = ".detail-label";
const DESCRIPTION_SELECTOR: &str = ".program-description p";
const JUSTIFICATION_SELECTOR: &str = ".justification-text";

fn selector(css: &str) -> AppResult<Selector> {
    Selector::parse(css).map_err(|e| AppError::SelectorError(format!("{css}: {e:?}")))
}

/// Selectors compiled once per parse.
struct CardSelectors {
    card: Selector,
    info_button: Selector,
    title: Selector,
    detail_label: Selector,
    description: Selector,
    justification: Selector,
}

impl CardSelectors {
    fn new() -> AppResult<Self> {
        Ok(Self {
            card: selector(CARD_SELECTOR)?,
            info_button: selector(INFO_BUTTON_SELECTOR)?,
            title: selector(CARD_TITLE_SELECTOR)?,
            detail_label: selector(DETAIL_LABEL_SELECTOR)?,
            description: selector(DESCRIPTION_SELECTOR)?,
            justification: selector(JUSTIFICATION_SELECTOR)?,
        })
    }
}

/// Extracts one program descriptor per `.program-card` of a rendered results page.
///
/// The name comes from the `data-program` attribute of the card's info button,
/// falling back to the card header title. Detail values missing from the card
/// are reported as "No especificado".
///
/// # Errors
///
/// Returns `SelectorError` if a CSS selector fails to compile.
pub fn parse_program_cards(html: &str) -> AppResult<Vec<ProgramDescriptor>> {
    let selectors = CardSelectors::new()?;
    let document = Html::parse_document(html);

    let programs: Vec<ProgramDescriptor> = document
        .select(&selectors.card)
        .map(|card| parse_card(&card, &selectors))
        .collect();

    info!(cards = programs.len(), "Parsed program cards");
    Ok(programs)
}

fn parse_card(card: &ElementRef, selectors: &CardSelectors) -> ProgramDescriptor {
    let name = card
        .select(&selectors.info_button)
        .find_map(|button| button.value().attr("data-program"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| first_text(card, &selectors.title))
        .unwrap_or_default();

    let detail = |label: &str| {
        card_detail(card, &selectors.detail_label, label).unwrap_or_else(|| NOT_SPECIFIED.to_string())
    };

    let descriptor = ProgramDescriptor {
        aid_type: detail("Tipo de ayuda"),
        convening_text: detail("Convocatoria"),
        organism: detail("Organismo"),
        intensity: detail("Intensidad"),
        description: first_text(card, &selectors.description).unwrap_or_default(),
        justification: first_text(card, &selectors.justification).unwrap_or_default(),
        name,
    };
    debug!(program = %descriptor.name, "Parsed program card");
    descriptor
}

/// Text of the element right after the first detail label containing `label`.
fn card_detail(card: &ElementRef, label_selector: &Selector, label: &str) -> Option<String> {
    card.select(label_selector)
        .find(|el| element_text(el).contains(label))
        .and_then(|el| el.next_siblings().find_map(ElementRef::wrap))
        .map(|value| element_text(&value))
        .filter(|value| !value.is_empty())
}

fn first_text(card: &ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
