//! Property providers.
//!
//! One interface, two sources: the in-memory fixture and a remote Medusa store.
//! Which one serves requests is decided by configuration at startup.

mod local;
mod medusa;

pub use local::*;
pub use medusa::*;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, ProviderKind};
use crate::errors::AppError;
use crate::models::{FilterState, Property, PropertyPage};

/// A source of property listing pages.
#[async_trait]
pub trait PropertyProvider: Send + Sync {
    /// Filter, sort and paginate according to `filters`.
    async fn list(&self, filters: &FilterState) -> Result<PropertyPage, AppError>;

    /// Look up a single listing by id.
    async fn get(&self, id: &str) -> Result<Option<Property>, AppError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Build the provider selected by `config`.
pub fn build_provider(config: &Config) -> Result<Arc<dyn PropertyProvider>, AppError> {
    match config.provider {
        ProviderKind::Local => {
            let provider = match &config.fixture_path {
                Some(path) => LocalProvider::from_file(path)?,
                None => LocalProvider::bundled()?,
            };
            tracing::info!("Serving {} properties from fixture", provider.len());
            Ok(Arc::new(provider))
        }
        ProviderKind::Medusa => {
            let medusa = config.medusa.as_ref().ok_or_else(|| {
                AppError::Config("Medusa provider selected without RENTAL_MEDUSA_URL".to_string())
            })?;
            let provider = MedusaProvider::new(medusa)?;
            tracing::info!("Proxying properties to {}", provider.endpoint());
            Ok(Arc::new(provider))
        }
    }
}
