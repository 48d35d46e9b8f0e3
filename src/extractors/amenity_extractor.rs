//! Amenity list extraction

use scraper::{Html, Selector};
use std::collections::HashSet;

use super::{collapse_whitespace, first_match};
use crate::types::{Amenity, MAX_AMENITIES};

/// Items looked for inside an amenities container
const ITEM_SELECTOR: &str = "li, .amenity, .feature";

/// Collect amenities from every container the chain finds.
///
/// Items keep discovery order across selectors, repeats (case-insensitive)
/// are dropped, and the list stops at `MAX_AMENITIES`.
pub fn extract_amenities(document: &Html, chain: &[&str]) -> Vec<Amenity> {
    let item_selector = match Selector::parse(ITEM_SELECTOR) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let mut amenities = Vec::new();
    let mut seen = HashSet::new();

    for selector in chain {
        let Some(container) = first_match(document, selector) else {
            continue;
        };

        for item in container.select(&item_selector) {
            let text = collapse_whitespace(&item.text().collect::<String>());
            let len = text.chars().count();
            if len <= 3 || len >= 50 {
                continue;
            }
            if !seen.insert(text.to_lowercase()) {
                continue;
            }
            amenities.push(Amenity::with_default_icon(text));
            if amenities.len() >= MAX_AMENITIES {
                return amenities;
            }
        }
    }

    amenities
}
