//! Listing pipeline: filter, then sort, then paginate.
//!
//! Everything here is pure and synchronous. Providers that hold data locally
//! run [`list_properties`] over their snapshot; remote providers delegate the
//! same work to the upstream store using the query pairs from [`query`].

mod filter;
mod paginate;
pub mod query;
mod sort;

pub use filter::filter_properties;
pub use paginate::paginate;
pub use sort::sort_properties;

use crate::models::{FilterState, Property, PropertyPage};

/// Run the full pipeline over `properties`.
///
/// Sorting happens after filtering so page boundaries only ever count
/// matching records.
pub fn list_properties(properties: &[Property], filters: &FilterState) -> PropertyPage {
    let matching = filter_properties(properties, filters);
    let ordered = sort_properties(matching, &filters.sort_by, filters.order);
    paginate(ordered, filters.page, filters.limit)
}
