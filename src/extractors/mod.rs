//! Field extractors
//!
//! Each module handles one family of output fields. DOM-based extractors walk
//! a selector chain from the active `SitePatternSet`; the keyword and image
//! scanners also work on the raw text.

mod amenity_extractor;
mod image_extractor;
mod keyword_extractor;
mod price_extractor;
mod text_extractor;

pub use amenity_extractor::*;
pub use image_extractor::*;
pub use keyword_extractor::*;
pub use price_extractor::*;
pub use text_extractor::*;

use scraper::{ElementRef, Html, Selector};

/// First element matched by a selector string.
/// Selectors that fail to parse match nothing.
pub(crate) fn first_match<'a>(document: &'a Html, selector_str: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector_str).ok()?;
    document.select(&selector).next()
}

/// Whether a selector string matches anything in the document
pub(crate) fn has_match(document: &Html, selector_str: &str) -> bool {
    first_match(document, selector_str).is_some()
}

/// Visible text of an element, or its `content` attribute for `<meta>`-style
/// elements, with whitespace runs collapsed
pub(crate) fn element_text(element: &ElementRef) -> String {
    match element.value().attr("content") {
        Some(content) => collapse_whitespace(content),
        None => collapse_whitespace(&element.text().collect::<String>()),
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
