//! Thumbnail and gallery image extraction
//!
//! The raw-text `<img src>` scan runs first and takes priority: it sees the
//! attribute exactly as pasted. DOM selectors only top the list up when the
//! scan comes back short, and they also pick up lazy-loading attributes.

use indexmap::IndexSet;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::types::MAX_IMAGES;
use crate::urls::normalize_image_url;

static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img\b[^>]*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Substrings that mark an image as site chrome rather than listing content
const REJECTED_MARKERS: &[&str] = &["icon", "logo", "localhost"];

/// Attributes read from DOM matches, in preference order
const DOM_SRC_ATTRS: &[&str] = &["src", "data-src", "data-lazy-src"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSelection {
    pub thumbnail: Option<String>,
    /// Unique, first-seen order, at most `MAX_IMAGES`
    pub urls: Vec<String>,
}

/// Every non-empty `src` value of an `<img>` tag in the raw text, in order
pub fn scan_img_sources(html: &str) -> Vec<&str> {
    IMG_SRC_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim())
        .filter(|src| !src.is_empty())
        .collect()
}

fn is_rejected(url: &str) -> bool {
    let lower = url.to_lowercase();
    REJECTED_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Normalized URL, or `None` when the reference is chrome
fn accept(raw: &str, base_url: &str) -> Option<String> {
    if is_rejected(raw) {
        tracing::trace!(src = raw, "rejected image candidate");
        return None;
    }
    Some(normalize_image_url(raw, Some(base_url)))
}

pub fn extract_images(html: &str, document: &Html, chain: &[&str], base_url: &str) -> ImageSelection {
    let mut urls: IndexSet<String> = IndexSet::new();

    for raw in scan_img_sources(html) {
        if urls.len() >= MAX_IMAGES {
            break;
        }
        if let Some(url) = accept(raw, base_url) {
            urls.insert(url);
        }
    }
    let thumbnail = urls.first().cloned();
    let scanned = urls.len();

    if urls.len() < MAX_IMAGES {
        'chain: for selector_str in chain {
            let selector = match Selector::parse(selector_str) {
                Ok(s) => s,
                Err(_) => continue,
            };
            for element in document.select(&selector) {
                let src = DOM_SRC_ATTRS
                    .iter()
                    .filter_map(|attr| element.value().attr(attr))
                    .map(str::trim)
                    .find(|src| !src.is_empty());
                if let Some(url) = src.and_then(|src| accept(src, base_url)) {
                    urls.insert(url);
                }
                if urls.len() >= MAX_IMAGES {
                    break 'chain;
                }
            }
        }
    }

    tracing::debug!(scanned, total = urls.len(), "collected image URLs");

    let urls: Vec<String> = urls.into_iter().collect();
    ImageSelection {
        thumbnail: thumbnail.or_else(|| urls.first().cloned()),
        urls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_img_sources_ignores_data_src() {
        let html = r#"
        <img data-src="lazy.jpg" src="real.jpg">
        <IMG alt="x"
             SRC='/upper.png'>
        <img src="">
        "#;
        assert_eq!(scan_img_sources(html), vec!["real.jpg", "/upper.png"]);
    }

    #[test]
    fn test_src_with_apostrophe_is_kept_whole() {
        let html = r#"<html><body><p>x</p><img src="/img/d'souza-tower.jpg"></body></html>"#;
        assert_eq!(scan_img_sources(html), vec!["/img/d'souza-tower.jpg"]);

        let document = Html::parse_document(html);
        let images = extract_images(html, &document, &["img"], "https://ex.com");
        assert_eq!(images.urls, vec!["https://ex.com/img/d'souza-tower.jpg".to_string()]);
        assert_eq!(images.thumbnail.as_deref(), Some("https://ex.com/img/d'souza-tower.jpg"));
    }

    #[test]
    fn test_rejects_chrome_and_normalizes() {
        let html = r#"
        <img src="/static/logo.png">
        <img src="/img/site-icon.svg">
        <img src="http://localhost:3000/a.jpg">
        <img src="/img/a.jpg">
        <img src="//cdn.ex.com/b.jpg">
        <img src="/img/a.jpg">
        "#;
        let document = Html::parse_document(html);
        let images = extract_images(html, &document, &[], "https://ex.com");

        assert_eq!(images.thumbnail.as_deref(), Some("https://ex.com/img/a.jpg"));
        assert_eq!(
            images.urls,
            vec!["https://ex.com/img/a.jpg".to_string(), "https://cdn.ex.com/b.jpg".to_string()]
        );
    }

    #[test]
    fn test_dom_supplements_lazy_images() {
        let html = r#"
        <img src="/a.jpg">
        <div class="gallery">
            <img data-src="/b.jpg">
            <img data-lazy-src="/c.jpg">
            <img src="/a.jpg">
        </div>
        "#;
        let document = Html::parse_document(html);
        let images = extract_images(html, &document, &[".gallery img"], "https://ex.com");

        assert_eq!(images.thumbnail.as_deref(), Some("https://ex.com/a.jpg"));
        assert_eq!(
            images.urls,
            vec![
                "https://ex.com/a.jpg".to_string(),
                "https://ex.com/b.jpg".to_string(),
                "https://ex.com/c.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_thumbnail_from_dom_when_scan_empty() {
        let html = r#"<div class="gallery"><img data-src="/only.jpg"></div>"#;
        let document = Html::parse_document(html);
        let images = extract_images(html, &document, &[".gallery img"], "https://ex.com");
        assert_eq!(images.thumbnail.as_deref(), Some("https://ex.com/only.jpg"));
    }

    #[test]
    fn test_cap_at_max_images() {
        let html: String = (0..25).map(|i| format!(r#"<img src="/p{i}.jpg">"#)).collect();
        let document = Html::parse_document(&html);
        let images = extract_images(&html, &document, &["img"], "https://ex.com");
        assert_eq!(images.urls.len(), MAX_IMAGES);
        assert_eq!(images.urls[9], "https://ex.com/p9.jpg");
    }
}
