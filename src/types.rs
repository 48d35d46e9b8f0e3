//! Listing record produced by the extraction engine

use serde::{Deserialize, Serialize};

/// Most images kept in a result
pub const MAX_IMAGES: usize = 10;

/// Most amenities kept in a result
pub const MAX_AMENITIES: usize = 20;

/// Icon attached to every scraped amenity until a human picks a real one
pub const DEFAULT_AMENITY_ICON: &str = "/icons/amenities/default.svg";

/// Broad category of a listed property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    #[default]
    Residential,
    Commercial,
    MixedUse,
    Industrial,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "RESIDENTIAL",
            PropertyType::Commercial => "COMMERCIAL",
            PropertyType::MixedUse => "MIXED_USE",
            PropertyType::Industrial => "INDUSTRIAL",
        }
    }
}

/// Unit that accompanied the size figure in the source text.
///
/// The magnitude in `ExtractionResult::size` is never converted; this only
/// records which unit it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizeUnit {
    Acres,
    SquareFeet,
    Hectares,
}

/// Single amenity row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    pub icon: String,
}

impl Amenity {
    pub fn with_default_icon(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: DEFAULT_AMENITY_ICON.to_string(),
        }
    }
}

/// Best-effort listing record handed to the review form.
///
/// Every field is always populated: text fields fall back to fixed
/// placeholder strings, numeric fields to `None`. `confidence` tells the
/// caller how much of it actually came from the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: Option<String>,
    pub number_of_units: Option<u32>,
    pub size: Option<f64>,
    pub size_unit: Option<SizeUnit>,
    pub thumbnail_url: Option<String>,
    /// At most `MAX_IMAGES`, no duplicates, first-seen order
    pub image_urls: Vec<String>,
    /// At most `MAX_AMENITIES`, discovery order
    pub amenities: Vec<Amenity>,
    /// 0..=100
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ExtractionResult {
            name: "Lotus Heights".to_string(),
            description: "No description available".to_string(),
            location: "Location not specified".to_string(),
            property_type: PropertyType::MixedUse,
            price: Some("1.2 Cr".to_string()),
            number_of_units: Some(312),
            size: Some(4.2),
            size_unit: Some(SizeUnit::Acres),
            thumbnail_url: None,
            image_urls: vec![],
            amenities: vec![Amenity::with_default_icon("Gym")],
            confidence: 50,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "MIXED_USE");
        assert_eq!(json["numberOfUnits"], 312);
        assert_eq!(json["sizeUnit"], "ACRES");
        assert!(json["thumbnailUrl"].is_null());
        assert_eq!(json["amenities"][0]["icon"], DEFAULT_AMENITY_ICON);
    }

    #[test]
    fn test_property_type_default() {
        assert_eq!(PropertyType::default(), PropertyType::Residential);
        assert_eq!(PropertyType::MixedUse.as_str(), "MIXED_USE");
    }
}
