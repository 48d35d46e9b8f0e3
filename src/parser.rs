//! Entry point: pasted HTML in, listing record out
//!
//! The DOM path runs first. Anything that stops it (empty input, text with no
//! markup, a panic inside an extractor) is turned into the regex fallback's
//! result, so `parse` itself never fails.

use scraper::{ElementRef, Html};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::confidence::score_confidence;
use crate::error::ParseFailure;
use crate::extractors::{
    classify_property_type, extract_amenities, extract_description, extract_images,
    extract_location, extract_name, extract_price, extract_size, extract_unit_count,
};
use crate::fallback::fallback_extract;
use crate::options::ParseOptions;
use crate::patterns::{classify_site, pattern_set_by_key, Field, SitePatternSet};
use crate::types::ExtractionResult;
use crate::urls::resolve_base_url;

/// Elements html5ever creates even for input with no markup at all
const SCAFFOLD_ELEMENTS: &[&str] = &["html", "head", "body"];

/// Extract a listing from pasted HTML.
///
/// `template_hint` names a pattern set to use instead of fingerprinting the
/// page; `manual_base_url` overrides base URL discovery.
pub fn parse(html: &str, template_hint: Option<&str>, manual_base_url: Option<&str>) -> ExtractionResult {
    parse_with_options(html, &ParseOptions::new(template_hint, manual_base_url))
}

pub fn parse_with_options(html: &str, options: &ParseOptions) -> ExtractionResult {
    let outcome = catch_unwind(AssertUnwindSafe(|| try_structured(html, options)))
        .unwrap_or_else(|panic_info| {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            Err(ParseFailure::Panicked(panic_msg))
        });

    match outcome {
        Ok(result) => result,
        Err(failure) => {
            tracing::warn!(error = %failure, "structured extraction failed, using fallback");
            fallback_extract(html, options.base_url_override())
        }
    }
}

/// DOM-based extraction
pub fn try_structured(html: &str, options: &ParseOptions) -> Result<ExtractionResult, ParseFailure> {
    if html.trim().is_empty() {
        return Err(ParseFailure::EmptyDocument);
    }

    let document = Html::parse_document(html);
    if !has_markup(&document) {
        return Err(ParseFailure::NoMarkup);
    }

    let base_url = resolve_base_url(html, Some(&document), options.base_url_override());
    let patterns = select_patterns(html, options.template_hint.as_deref());
    tracing::debug!(patterns = patterns.key, base_url = %base_url, "extracting listing");

    let images = extract_images(html, &document, patterns.chain(Field::Images), &base_url);
    let size = extract_size(html);

    Ok(ExtractionResult {
        name: extract_name(&document, patterns.chain(Field::Name)),
        description: extract_description(&document, patterns.chain(Field::Description)),
        location: extract_location(&document, patterns.chain(Field::Location)),
        property_type: classify_property_type(html),
        price: extract_price(&document, patterns.chain(Field::Price)),
        number_of_units: extract_unit_count(html),
        size: size.map(|(magnitude, _)| magnitude),
        size_unit: size.map(|(_, unit)| unit),
        thumbnail_url: images.thumbnail,
        image_urls: images.urls,
        amenities: extract_amenities(&document, patterns.chain(Field::Features)),
        confidence: score_confidence(&document, patterns),
    })
}

/// Hinted pattern set when the hint is a known key, fingerprinted otherwise
fn select_patterns(html: &str, template_hint: Option<&str>) -> &'static SitePatternSet {
    if let Some(hint) = template_hint {
        match pattern_set_by_key(hint) {
            Some(set) => return set,
            None => tracing::debug!(hint, "unknown template hint, ignoring"),
        }
    }
    classify_site(html)
}

/// Whether parsing produced any element of its own
fn has_markup(document: &Html) -> bool {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .any(|el| !SCAFFOLD_ELEMENTS.contains(&el.value().name()))
}
