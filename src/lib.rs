//! Listing extraction engine
//!
//! Turns HTML pasted from real-estate portals into a best-effort listing
//! record:
//! - site fingerprinting with per-site CSS selector chains
//! - base URL discovery and image URL normalization
//! - keyword-based property type, unit count and size
//! - confidence scoring, with a regex-only fallback when the DOM path fails
//!
//! `parse` never fails. Low `confidence` means the record needs review.

pub mod confidence;
pub mod error;
pub mod extractors;
pub mod fallback;
pub mod ffi;
pub mod options;
pub mod parser;
pub mod patterns;
pub mod types;
pub mod urls;

pub use error::ParseFailure;
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options};
pub use patterns::{classify_site, SitePatternSet};
pub use types::{Amenity, ExtractionResult, PropertyType, SizeUnit};
pub use urls::{normalize_image_url, resolve_base_url};
