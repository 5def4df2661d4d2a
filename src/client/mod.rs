//! HTTP client for `/properties`-shaped listing endpoints.
//!
//! Used both by the Medusa provider (talking to the store) and by
//! [`ListingSession`], which drives a listing view from filter changes.

mod session;

pub use session::*;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::errors::AppError;
use crate::models::{FilterState, Property, PropertyPage};

/// Header Medusa uses to scope store API calls to a sales channel.
pub const PUBLISHABLE_KEY_HEADER: &str = "x-publishable-api-key";

/// Thin typed wrapper over a reqwest client and a base URL.
#[derive(Debug, Clone)]
pub struct PropertiesClient {
    http: Client,
    base_url: Url,
    publishable_key: Option<String>,
}

impl PropertiesClient {
    /// `base_url` is the full URL of the list endpoint, e.g.
    /// `http://localhost:9000/store/properties`.
    pub fn new(
        base_url: impl Into<String>,
        publishable_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let raw = base_url.into();
        let base_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| AppError::Config(format!("Invalid listing URL {}: {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!("Invalid listing URL {}", raw)));
        }

        Ok(Self {
            http,
            base_url,
            publishable_key,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of a single listing. The id becomes exactly one percent-encoded
    /// path segment, so `/`, `?`, `#` and dot segments cannot leave the
    /// listing route.
    fn property_url(&self, id: &str) -> Option<Url> {
        if id.is_empty() || id == "." || id == ".." {
            return None;
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut().ok()?.pop_if_empty().push(id);
        Some(url)
    }

    /// Fetch one page of listings for `filters`.
    pub async fn fetch_page(&self, filters: &FilterState) -> Result<PropertyPage, AppError> {
        let pairs = filters.to_query_pairs();
        tracing::debug!(url = %self.base_url, query = ?pairs, "Fetching property page");

        let response = self
            .request(self.base_url.clone())
            .query(&pairs)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_status(status));
        }

        Ok(response.json::<PropertyPage>().await?)
    }

    /// Fetch a single listing; `None` when the backend answers 404.
    pub async fn fetch_property(&self, id: &str) -> Result<Option<Property>, AppError> {
        let Some(url) = self.property_url(id) else {
            tracing::debug!("Rejecting property id {:?}", id);
            return Ok(None);
        };
        let response = self.request(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json::<Property>().await?)),
            status => Err(upstream_status(status)),
        }
    }

    fn request(&self, url: Url) -> reqwest::RequestBuilder {
        let builder = self.http.get(url);
        match &self.publishable_key {
            Some(key) => builder.header(PUBLISHABLE_KEY_HEADER, key),
            None => builder,
        }
    }
}

fn upstream_status(status: StatusCode) -> AppError {
    tracing::warn!("Property backend answered {}", status);
    AppError::Upstream(format!("Property backend answered {}", status))
}
