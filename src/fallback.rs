//! Regex-only extraction
//!
//! Used whenever the DOM path cannot run. Works on the raw text alone and
//! cannot fail, so `parse` always has something to return.

use indexmap::IndexSet;
use regex::Regex;
use std::sync::LazyLock;

use crate::confidence::FALLBACK_CONFIDENCE;
use crate::extractors::{collapse_whitespace, scan_img_sources};
use crate::types::{ExtractionResult, PropertyType, MAX_IMAGES};
use crate::urls::{normalize_image_url, resolve_base_url};

pub const FALLBACK_NAME: &str = "Extracted Project";
pub const FALLBACK_DESCRIPTION: &str = "Project details extracted from pasted HTML";
pub const FALLBACK_LOCATION: &str = "Location not found";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

static META_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<meta\s+name\s*=\s*["']description["']\s+content\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
    )
    .unwrap()
});

pub fn fallback_extract(html: &str, manual_base_url: Option<&str>) -> ExtractionResult {
    let name = TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().split('|').next().unwrap_or("").trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string());

    let description = META_DESCRIPTION_RE
        .captures(html)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| collapse_whitespace(m.as_str()))
        .filter(|content| (20..=300).contains(&content.chars().count()))
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

    let base_url = resolve_base_url(html, None, manual_base_url);
    let mut images: IndexSet<String> = IndexSet::new();
    for raw in scan_img_sources(html) {
        if images.len() >= MAX_IMAGES {
            break;
        }
        images.insert(normalize_image_url(raw, Some(&base_url)));
    }

    // First image is the thumbnail, the rest form the gallery
    let mut images = images.into_iter();
    let thumbnail_url = images.next();
    let image_urls: Vec<String> = images.collect();

    tracing::debug!(
        name = %name,
        images = image_urls.len() + usize::from(thumbnail_url.is_some()),
        "fallback extraction finished"
    );

    ExtractionResult {
        name,
        description,
        location: FALLBACK_LOCATION.to_string(),
        property_type: PropertyType::Residential,
        price: None,
        number_of_units: None,
        size: None,
        size_unit: None,
        thumbnail_url,
        image_urls,
        amenities: vec![],
        confidence: FALLBACK_CONFIDENCE,
    }
}
