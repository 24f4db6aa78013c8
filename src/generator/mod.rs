//! Advisory content generation.
//!
//! Every operation is a pure function of its string inputs and the
//! [`ContentCatalog`] held by the [`Advisor`]. Empty inputs degrade to
//! boilerplate content; nothing here fails.

mod advice;
mod deadlines;
mod documentation;
mod examples;
mod html;
mod requirements;
mod sentences;

pub use deadlines::extract_deadline_info;
pub use html::{render_list, ContentList};

use crate::catalog::ContentCatalog;
use crate::classifier::classify;
use crate::models::Category;

/// Produces the advisory sections for financing programs from a content catalog.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    catalog: ContentCatalog,
}

impl Advisor {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Shorthand for [`classify`].
    pub fn classify(&self, name: &str, aid_type: &str) -> Category {
        classify(name, aid_type)
    }
}
