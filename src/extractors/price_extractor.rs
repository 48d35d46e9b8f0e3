//! Price extraction

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

use super::{element_text, first_match};

/// Digits with optional thousands separators and decimals, optionally
/// followed by an Indian price suffix
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d[\d,]*(?:\.\d+)?(?:\s*(?:crore|cr|lakhs|lakh))?").unwrap()
});

/// Price text from the first element the chain matches.
///
/// Only that element is inspected; if its text holds no number the price is
/// `None` even when later selectors would have matched.
pub fn extract_price(document: &Html, chain: &[&str]) -> Option<String> {
    let element = chain.iter().find_map(|selector| first_match(document, selector))?;
    let text = element_text(&element);
    PRICE_RE.find(&text).map(|m| m.as_str().to_string())
}
