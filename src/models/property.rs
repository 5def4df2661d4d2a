//! Property model matching the admin table's Property interface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Active,
    Draft,
    Inactive,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 3] = [
        PropertyStatus::Active,
        PropertyStatus::Draft,
        PropertyStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "active",
            PropertyStatus::Draft => "draft",
            PropertyStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(PropertyStatus::Active),
            "draft" => Some(PropertyStatus::Draft),
            "inactive" => Some(PropertyStatus::Inactive),
            _ => None,
        }
    }
}

/// Kind of dwelling a listing offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Apartment,
    House,
    Villa,
    Condo,
    Cabin,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 5] = [
        PropertyCategory::Apartment,
        PropertyCategory::House,
        PropertyCategory::Villa,
        PropertyCategory::Condo,
        PropertyCategory::Cabin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "apartment",
            PropertyCategory::House => "house",
            PropertyCategory::Villa => "villa",
            PropertyCategory::Condo => "condo",
            PropertyCategory::Cabin => "cabin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "apartment" => Some(PropertyCategory::Apartment),
            "house" => Some(PropertyCategory::House),
            "villa" => Some(PropertyCategory::Villa),
            "condo" => Some(PropertyCategory::Condo),
            "cabin" => Some(PropertyCategory::Cabin),
            _ => None,
        }
    }
}

/// Where a listing is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyLocation {
    pub province: String,
    pub country: String,
}

impl PropertyLocation {
    /// Text the search box matches against, e.g. `"Bali, Indonesia"`.
    pub fn display_text(&self) -> String {
        format!("{}, {}", self.province, self.country)
    }
}

/// A rental property listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PropertyLocation>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PropertyCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in PropertyStatus::ALL {
            assert_eq!(PropertyStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PropertyStatus::parse("Active"), None);
    }

    #[test]
    fn test_category_serializes_as_type() {
        let property: Property = serde_json::from_value(serde_json::json!({
            "id": "p-1",
            "name": "Harbour Loft",
            "location": { "province": "Lisbon", "country": "Portugal" },
            "type": "apartment",
            "status": "active",
            "price": 120,
            "rating": 4.5,
            "bedrooms": 1,
            "bathrooms": 1,
            "lastUpdated": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(property.category, Some(PropertyCategory::Apartment));
        assert_eq!(
            property.location.as_ref().unwrap().display_text(),
            "Lisbon, Portugal"
        );

        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["type"], "apartment");
        assert_eq!(value["lastUpdated"], "2024-03-01T10:00:00Z");
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let property: Property = serde_json::from_value(serde_json::json!({
            "id": "p-2",
            "name": "Unlabelled",
            "price": 10,
            "lastUpdated": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert!(property.location.is_none());
        assert!(property.status.is_none());
        assert!(property.category.is_none());
    }
}
