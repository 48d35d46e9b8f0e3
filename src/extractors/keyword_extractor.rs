//! Property type, unit count and land size from raw text

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{PropertyType, SizeUnit};

/// Categories in priority order; the first with any keyword present wins
const TYPE_KEYWORDS: &[(PropertyType, &[&str])] = &[
    (
        PropertyType::Residential,
        &[
            "residential",
            "apartment",
            "flat",
            "villa",
            "bhk",
            "penthouse",
            "condo",
            "row house",
            "home",
        ],
    ),
    (
        PropertyType::Commercial,
        &[
            "commercial",
            "office",
            "retail",
            "shop",
            "showroom",
            "business park",
            "co-working",
        ],
    ),
    (
        PropertyType::MixedUse,
        &["mixed use", "mixed-use", "integrated township"],
    ),
    (
        PropertyType::Industrial,
        &["industrial", "warehouse", "factory", "logistics", "manufacturing"],
    ),
];

static UNITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(units|apartments|flats|homes|villas)").unwrap());

static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(acres|sq\.?\s*ft|sqft|hectares)").unwrap()
});

pub fn classify_property_type(text: &str) -> PropertyType {
    let lower = text.to_lowercase();
    TYPE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(kind, _)| *kind)
        .unwrap_or_default()
}

/// First "<n> units/apartments/flats/homes/villas" figure
pub fn extract_unit_count(text: &str) -> Option<u32> {
    let caps = UNITS_RE.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Portal name that reads like a size figure
const BRAND_SIZE_LOOKALIKE: &str = "99acres";

/// First land/floor size figure and the unit written next to it.
///
/// Matches glued into a host name, path or identifier (`www.99acres.com`,
/// `plot42acres`) and the bare portal name are skipped.
pub fn extract_size(text: &str) -> Option<(f64, SizeUnit)> {
    let caps = SIZE_RE
        .captures_iter(text)
        .find(|caps| caps.get(0).is_some_and(|m| !is_embedded(text, m.start(), m.end())))?;
    let magnitude: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit_text = caps.get(2)?.as_str().to_lowercase();
    let unit = if unit_text.starts_with("acre") {
        SizeUnit::Acres
    } else if unit_text.starts_with("hectare") {
        SizeUnit::Hectares
    } else {
        SizeUnit::SquareFeet
    };
    Some((magnitude, unit))
}

fn is_embedded(text: &str, start: usize, end: usize) -> bool {
    if text[start..end].eq_ignore_ascii_case(BRAND_SIZE_LOOKALIKE) {
        return true;
    }

    let before = text[..start].chars().next_back();
    if before.is_some_and(|c| c.is_alphanumeric() || c == '.' || c == '/' || c == '_') {
        return true;
    }

    let mut after = text[end..].chars();
    match after.next() {
        Some(c) if c.is_alphanumeric() || c == '_' => true,
        Some('.') | Some('-') => after.next().is_some_and(|c| c.is_alphanumeric()),
        _ => false,
    }
}
