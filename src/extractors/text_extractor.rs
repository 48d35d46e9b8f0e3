//! Name, description and location extraction
//!
//! Walks the field's selector chain and takes the first element whose text
//! passes the field's sanity filter, then falls back to document-level
//! metadata and finally to a fixed placeholder.

use scraper::Html;

use super::{collapse_whitespace, element_text, first_match};

pub const NAME_NOT_FOUND: &str = "Project Name Not Found";
pub const DESCRIPTION_NOT_FOUND: &str = "No description available";
pub const LOCATION_NOT_FOUND: &str = "Location not specified";

/// Text before the first `|` or `-`, trimmed
pub fn cut_at_separator(text: &str) -> &str {
    text.split(['|', '-']).next().unwrap_or("").trim()
}

/// First chain entry whose (transformed) text passes `accept`
fn first_accepted<F, A>(document: &Html, chain: &[&str], transform: F, accept: A) -> Option<String>
where
    F: Fn(String) -> String,
    A: Fn(&str) -> bool,
{
    chain.iter().find_map(|selector| {
        let element = first_match(document, selector)?;
        let text = transform(element_text(&element));
        if accept(&text) {
            tracing::trace!(selector, text = %text, "selector accepted");
            Some(text)
        } else {
            None
        }
    })
}

pub fn extract_name(document: &Html, chain: &[&str]) -> String {
    let from_chain = first_accepted(
        document,
        chain,
        |text| cut_at_separator(&text).to_string(),
        |text| {
            let len = text.chars().count();
            len > 5 && len < 100
        },
    );
    if let Some(name) = from_chain {
        return name;
    }

    first_match(document, "title")
        .map(|title| cut_at_separator(&element_text(&title)).to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| NAME_NOT_FOUND.to_string())
}

pub fn extract_description(document: &Html, chain: &[&str]) -> String {
    let from_chain = first_accepted(
        document,
        chain,
        |text| text,
        |text| {
            let len = text.chars().count();
            len > 20 && len < 500
        },
    );
    if let Some(description) = from_chain {
        return description;
    }

    first_match(document, "meta[name='description']")
        .and_then(|meta| meta.value().attr("content").map(collapse_whitespace))
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| DESCRIPTION_NOT_FOUND.to_string())
}

pub fn extract_location(document: &Html, chain: &[&str]) -> String {
    first_accepted(
        document,
        chain,
        |text| text,
        |text| text.contains(',') || text.chars().count() > 10,
    )
    .unwrap_or_else(|| LOCATION_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_chain_cut_at_separator() {
        let html = r#"<h1 class="project-name">Lotus Heights | Premium Homes</h1>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_name(&document, &[".project-name"]), "Lotus Heights");
    }

    #[test]
    fn test_name_skips_too_short_and_falls_back_to_title() {
        let html = r#"
        <html><head><title>My Project | SiteName</title></head>
        <body><h1>Home</h1></body></html>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_name(&document, &["h1", ".missing"]), "My Project");
    }

    #[test]
    fn test_name_placeholder() {
        let document = Html::parse_document("<p>nothing here</p>");
        assert_eq!(extract_name(&document, &["h1"]), NAME_NOT_FOUND);
    }

    #[test]
    fn test_description_length_window() {
        let html = r#"
        <div class="short">Too short</div>
        <div class="about">
            A gated community of   two hundred homes
            set around a central lake.
        </div>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_description(&document, &[".short", ".about"]),
            "A gated community of two hundred homes set around a central lake."
        );
    }

    #[test]
    fn test_description_meta_fallback() {
        let html = r#"<html><head>
            <meta name="description" content="Luxury apartments near the metro line.">
        </head><body></body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_description(&document, &[".about"]),
            "Luxury apartments near the metro line."
        );

        let bare = Html::parse_document("<p>x</p>");
        assert_eq!(extract_description(&bare, &[".about"]), DESCRIPTION_NOT_FOUND);
    }

    #[test]
    fn test_location_comma_or_length() {
        let html = r#"
        <span class="a">Pune</span>
        <span class="b">Baner, Pune</span>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_location(&document, &[".a", ".b"]), "Baner, Pune");

        let long = Html::parse_document(r#"<span class="a">Whitefield Bangalore</span>"#);
        assert_eq!(extract_location(&long, &[".a"]), "Whitefield Bangalore");

        assert_eq!(extract_location(&document, &[".a"]), LOCATION_NOT_FOUND);
    }
}
