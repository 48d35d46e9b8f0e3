//! Base URL resolution and image URL normalization

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Last-resort base when nothing in the input identifies the site
pub const DEFAULT_BASE_URL: &str = "https://example.com";

/// Host that shows up in pasted pages without any absolute link to it
const KNOWN_HOST: &str = "myhomeconstructions.com";

static ABSOLUTE_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^/\s"'<>()]+"#).unwrap());

/// Determine the base URL for resolving relative references.
///
/// Tried in order, first hit wins:
/// 1. `manual_base_url` (non-blank)
/// 2. `<base href>` when it is an absolute http(s) URL
/// 3. origin of `<link rel="canonical">`
/// 4. origin of `<meta property="og:url">`
/// 5. first `http(s)://host` anywhere in the raw text
/// 6. the known host, if its name appears in the text
/// 7. `DEFAULT_BASE_URL`
///
/// Steps 2-4 need a parsed document and are skipped without one.
pub fn resolve_base_url(html: &str, document: Option<&Html>, manual_base_url: Option<&str>) -> String {
    if let Some(manual) = manual_base_url.map(str::trim).filter(|s| !s.is_empty()) {
        tracing::debug!(base_url = manual, "using manual base URL");
        return manual.to_string();
    }

    if let Some(doc) = document {
        if let Some(base) = base_href(doc) {
            tracing::debug!(base_url = %base, "base URL from <base href>");
            return base;
        }
        if let Some(origin) = attr_origin(doc, "link[rel='canonical']", "href") {
            tracing::debug!(base_url = %origin, "base URL from canonical link");
            return origin;
        }
        if let Some(origin) = attr_origin(doc, "meta[property='og:url']", "content") {
            tracing::debug!(base_url = %origin, "base URL from og:url");
            return origin;
        }
    }

    if let Some(m) = ABSOLUTE_HOST_RE.find(html) {
        tracing::debug!(base_url = m.as_str(), "base URL from first absolute link");
        return m.as_str().to_string();
    }

    if html.to_lowercase().contains(KNOWN_HOST) {
        return format!("https://{KNOWN_HOST}");
    }

    tracing::debug!("no base URL found, using default");
    DEFAULT_BASE_URL.to_string()
}

fn base_href(document: &Html) -> Option<String> {
    let selector = Selector::parse("base[href]").ok()?;
    let href = document.select(&selector).next()?.value().attr("href")?.trim();

    let parsed = Url::parse(href).ok()?;
    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(href.to_string())
    } else {
        None
    }
}

/// Scheme and host of the URL in the first matching element's attribute
fn attr_origin(document: &Html, selector_str: &str, attr_name: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;
    let value = document
        .select(&selector)
        .filter_map(|el| el.value().attr(attr_name))
        .next()?;
    origin_of(value.trim())
}

/// `scheme://host` of an absolute URL, without port, path or query
pub fn origin_of(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?;
    Some(format!("{}://{}", parsed.scheme(), host))
}

/// Turn one image reference into an absolute URL.
///
/// `data:`/`blob:` and already-absolute references pass through, protocol
/// relative ones get `https:`. Without a base, relative references are
/// returned unchanged.
pub fn normalize_image_url(raw: &str, base_url: Option<&str>) -> String {
    let reference = raw.trim();

    if reference.starts_with("data:") || reference.starts_with("blob:") {
        return reference.to_string();
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    if reference.starts_with("//") {
        return format!("https:{reference}");
    }

    let Some(base) = base_url.filter(|b| !b.trim().is_empty()) else {
        tracing::trace!(reference, "no base URL, leaving reference relative");
        return reference.to_string();
    };
    let base = base.trim().trim_end_matches('/');

    let normalized = if reference.starts_with('/') {
        format!("{base}{reference}")
    } else {
        format!("{base}/{reference}")
    };
    tracing::trace!(reference, normalized = %normalized, "normalized image URL");
    normalized
}
