//! In-memory provider backed by a JSON fixture.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::PropertyProvider;
use crate::errors::AppError;
use crate::listing::list_properties;
use crate::models::{FilterState, Property, PropertyPage};

/// Fixture compiled into the binary, used when no file is configured.
const BUNDLED_FIXTURE: &str = include_str!("../../fixtures/properties.json");

/// Serves listings from an immutable snapshot.
#[derive(Debug, Clone)]
pub struct LocalProvider {
    properties: Arc<[Property]>,
}

impl LocalProvider {
    /// Wrap `properties` after checking id uniqueness and price sign.
    pub fn new(properties: Vec<Property>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(properties.len());
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                return Err(AppError::Config(format!(
                    "Duplicate property id {}",
                    property.id
                )));
            }
            if property.price.is_nan() || property.price < 0.0 {
                return Err(AppError::Config(format!(
                    "Property {} has invalid price {}",
                    property.id, property.price
                )));
            }
        }

        Ok(Self {
            properties: properties.into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let properties: Vec<Property> = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Invalid property fixture: {}", e)))?;
        Self::new(properties)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        tracing::info!("Loading property fixture from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json(BUNDLED_FIXTURE)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[async_trait]
impl PropertyProvider for LocalProvider {
    async fn list(&self, filters: &FilterState) -> Result<PropertyPage, AppError> {
        Ok(list_properties(&self.properties, filters))
    }

    async fn get(&self, id: &str) -> Result<Option<Property>, AppError> {
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::listing::test_support::property;
    use crate::models::{PropertyStatus, SortField, SortOrder};

    #[test]
    fn test_bundled_fixture_loads() {
        let provider = LocalProvider::bundled().unwrap();
        assert!(!provider.is_empty());
        assert!(provider
            .properties()
            .iter()
            .any(|p| p.name == "Luxury Sunset Villa"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = LocalProvider::new(vec![
            property("same", "A", 1.0).build(),
            property("same", "B", 2.0).build(),
        ])
        .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = LocalProvider::new(vec![property("p", "A", -5.0).build()]).unwrap_err();
        assert!(err.message().contains("invalid price"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"x","name":"Tiny House","price":40,"lastUpdated":"2024-02-02T00:00:00Z"}}]"#
        )
        .unwrap();

        let provider = LocalProvider::from_file(file.path()).unwrap();
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(LocalProvider::from_file(&dir.path().join("nope.json")).is_err());
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let provider = LocalProvider::new(vec![
            property("a", "A", 200.0).status(PropertyStatus::Active).build(),
            property("b", "B", 50.0).status(PropertyStatus::Draft).build(),
            property("c", "C", 100.0).status(PropertyStatus::Active).build(),
        ])
        .unwrap();

        let filters = FilterState::default()
            .toggle_status(PropertyStatus::Active)
            .with_sort(SortField::Price, SortOrder::Asc);
        let page = provider.list(&filters).await.unwrap();
        let ids: Vec<_> = page.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
        assert_eq!(page.total, 2);

        assert_eq!(provider.get("b").await.unwrap().map(|p| p.price), Some(50.0));
        assert!(provider.get("zzz").await.unwrap().is_none());
    }
}
