//! Per-site selector tables and site fingerprinting
//!
//! Each known listing portal gets a `SitePatternSet`: for every output field,
//! an ordered chain of CSS selectors where the first match wins. The tables
//! are plain static data shared by all callers.

use std::fmt;

/// Output field backed by a selector chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Location,
    Price,
    Features,
    Images,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Description,
        Field::Location,
        Field::Price,
        Field::Features,
        Field::Images,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Location => "location",
            Field::Price => "price",
            Field::Features => "features",
            Field::Images => "images",
        }
    }
}

/// Selector chains for one site template
#[derive(Debug)]
pub struct SitePatternSet {
    pub key: &'static str,
    pub name: &'static [&'static str],
    pub description: &'static [&'static str],
    pub location: &'static [&'static str],
    pub price: &'static [&'static str],
    pub features: &'static [&'static str],
    pub images: &'static [&'static str],
}

impl SitePatternSet {
    pub fn chain(&self, field: Field) -> &'static [&'static str] {
        match field {
            Field::Name => self.name,
            Field::Description => self.description,
            Field::Location => self.location,
            Field::Price => self.price,
            Field::Features => self.features,
            Field::Images => self.images,
        }
    }

    /// Number of fields scored for confidence
    pub fn field_count(&self) -> usize {
        Field::ALL.len()
    }
}

pub static NINETY_NINE_ACRES: SitePatternSet = SitePatternSet {
    key: "99acres",
    name: &[".projectName", "h1.project-name", "[data-label='PROJECT_NAME']", "h1"],
    description: &[".projectDescription", ".aboutProject", "#aboutProject p"],
    location: &[".projectLocation", ".project-location", "[data-label='LOCATION']"],
    price: &[".projectPrice", ".price-range", "[data-label='PRICE']"],
    features: &[".amenities", ".projectAmenities", "#amenities"],
    images: &[".gallery img", ".projectImages img", ".carousel img"],
};

pub static HOUSING: SitePatternSet = SitePatternSet {
    key: "housing",
    name: &[".project-name", "h1[itemprop='name']", "h1"],
    description: &[".about-project", "[itemprop='description']", ".project-description"],
    location: &[".project-address", "[itemprop='address']", ".locality"],
    price: &[".price-range", ".project-price", "[itemprop='price']"],
    features: &[".amenities-container", ".amenity-list", ".amenities"],
    images: &[".gallery-container img", ".image-carousel img", ".gallery img"],
};

pub static MAGICBRICKS: SitePatternSet = SitePatternSet {
    key: "magicbricks",
    name: &[".proj-name", ".projName", "h1"],
    description: &[".proj-about", ".projDesc", ".project-description"],
    location: &[".proj-location", ".proj-address", ".locality"],
    price: &[".proj-price", ".price-range", ".projPrice"],
    features: &[".proj-amenities", ".amenities-list", ".amenities"],
    images: &[".proj-gallery img", ".gallery img", ".slider img"],
};

pub static GENERIC: SitePatternSet = SitePatternSet {
    key: "generic",
    name: &[
        "h1",
        "[itemprop='name']",
        "meta[property='og:title']",
        ".project-name",
        ".property-title",
        ".title",
    ],
    description: &[
        "meta[property='og:description']",
        "[itemprop='description']",
        ".description",
        ".about",
        ".overview p",
        "p",
    ],
    location: &[
        "[itemprop='address']",
        ".location",
        ".address",
        "address",
        ".locality",
    ],
    price: &["[itemprop='price']", ".price", ".cost", ".price-range"],
    features: &[".amenities", ".features", "#amenities", ".facilities"],
    images: &[".gallery img", ".slider img", ".carousel img", "img"],
};

/// Fingerprint substring and the pattern set it selects, in priority order
static FINGERPRINTS: [(&str, &SitePatternSet); 3] = [
    ("99acres", &NINETY_NINE_ACRES),
    ("housing.com", &HOUSING),
    ("magicbricks", &MAGICBRICKS),
];

/// Pick the pattern set whose fingerprint appears first in priority order
pub fn classify_site(html: &str) -> &'static SitePatternSet {
    let lower = html.to_lowercase();
    FINGERPRINTS
        .iter()
        .find(|(needle, _)| lower.contains(*needle))
        .map(|(_, set)| *set)
        .unwrap_or(&GENERIC)
}

/// Look up a pattern set by its key (case-insensitive)
pub fn pattern_set_by_key(key: &str) -> Option<&'static SitePatternSet> {
    let key = key.trim();
    [&NINETY_NINE_ACRES, &HOUSING, &MAGICBRICKS, &GENERIC]
        .into_iter()
        .find(|set| set.key.eq_ignore_ascii_case(key))
}

impl fmt::Display for SitePatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<a href='https://www.99acres.com/x'>x</a>", "99acres")]
    #[case("<p>Listed on Housing.com</p>", "housing")]
    #[case("<div class='magicbricks-card'></div>", "magicbricks")]
    #[case("<p>magicbricks and 99acres</p>", "99acres")]
    #[case("<p>housing society</p>", "generic")]
    #[case("", "generic")]
    fn test_classify_site(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(classify_site(html).key, expected);
    }

    #[test]
    fn test_pattern_set_by_key() {
        assert_eq!(pattern_set_by_key("MagicBricks").map(|s| s.key), Some("magicbricks"));
        assert_eq!(pattern_set_by_key(" generic ").map(|s| s.key), Some("generic"));
        assert!(pattern_set_by_key("zillow").is_none());
    }

    #[test]
    fn test_every_set_has_all_chains() {
        for set in [&NINETY_NINE_ACRES, &HOUSING, &MAGICBRICKS, &GENERIC] {
            assert_eq!(set.field_count(), 6);
            for field in Field::ALL {
                assert!(!set.chain(field).is_empty(), "{} has empty {}", set, field.as_str());
            }
        }
    }
}
