//! One page of listing results.

use serde::{Deserialize, Serialize};

use super::Property;

/// A bounded slice of an ordered result set plus the numbers the pager needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Matching items before pagination.
    pub total: usize,
    /// The page that was asked for, as asked.
    pub page: i64,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The body of `GET /properties`.
pub type PropertyPage = Page<Property>;
