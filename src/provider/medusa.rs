//! Provider that proxies listing requests to a Medusa store.

use async_trait::async_trait;

use super::PropertyProvider;
use crate::client::PropertiesClient;
use crate::config::MedusaConfig;
use crate::errors::AppError;
use crate::models::{FilterState, Property, PropertyPage};

/// Store route serving the property collection.
pub const PROPERTIES_ROUTE: &str = "/store/properties";

/// Forwards filter state to the store, which does the filtering itself.
#[derive(Debug, Clone)]
pub struct MedusaProvider {
    client: PropertiesClient,
}

impl MedusaProvider {
    pub fn new(config: &MedusaConfig) -> Result<Self, AppError> {
        let endpoint = format!("{}{}", config.base_url, PROPERTIES_ROUTE);
        let client =
            PropertiesClient::new(endpoint, config.publishable_key.clone(), config.timeout)?;
        Ok(Self { client })
    }

    pub fn endpoint(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl PropertyProvider for MedusaProvider {
    async fn list(&self, filters: &FilterState) -> Result<PropertyPage, AppError> {
        self.client.fetch_page(filters).await
    }

    async fn get(&self, id: &str) -> Result<Option<Property>, AppError> {
        self.client.fetch_property(id).await
    }

    fn name(&self) -> &'static str {
        "medusa"
    }
}
