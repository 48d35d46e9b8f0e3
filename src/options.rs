//! Per-call parse options
//!
//! Passed directly by Rust callers, or as JSON across the FFI boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Pattern-set key (`99acres`, `housing`, `magicbricks`, `generic`)
    /// that overrides site classification. Unknown keys are ignored.
    pub template_hint: Option<String>,
    /// Base URL for resolving relative image references. Always wins over
    /// anything found in the document.
    pub manual_base_url: Option<String>,
}

impl ParseOptions {
    pub fn new(template_hint: Option<&str>, manual_base_url: Option<&str>) -> Self {
        Self {
            template_hint: template_hint.map(String::from),
            manual_base_url: manual_base_url.map(String::from),
        }
    }

    /// Manual base URL, with blank strings treated as absent
    pub fn base_url_override(&self) -> Option<&str> {
        self.manual_base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_json() {
        let opts: ParseOptions =
            serde_json::from_str(r#"{"templateHint": "housing", "manualBaseUrl": "https://ex.com"}"#)
                .unwrap();
        assert_eq!(opts.template_hint.as_deref(), Some("housing"));
        assert_eq!(opts.base_url_override(), Some("https://ex.com"));

        let empty: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ParseOptions::default());
    }

    #[test]
    fn test_blank_base_url_is_absent() {
        let opts = ParseOptions::new(None, Some("   "));
        assert_eq!(opts.base_url_override(), None);
    }
}
