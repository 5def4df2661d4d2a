//! Predicate filtering of property listings.

use crate::models::{FilterState, Property};

/// Keep the properties that pass every active clause, in their original order.
pub fn filter_properties(properties: &[Property], filters: &FilterState) -> Vec<Property> {
    if filters.is_unfiltered() {
        return properties.to_vec();
    }
    let needle = filters.search.to_lowercase();

    properties
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| matches_status(p, filters))
        .filter(|p| matches_category(p, filters))
        .filter(|p| matches_price(p, filters))
        .cloned()
        .collect()
}

fn matches_search(property: &Property, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if property.name.to_lowercase().contains(needle) {
        return true;
    }
    property
        .location
        .as_ref()
        .is_some_and(|loc| loc.display_text().to_lowercase().contains(needle))
}

fn matches_status(property: &Property, filters: &FilterState) -> bool {
    filters.statuses.is_empty()
        || property
            .status
            .is_some_and(|status| filters.statuses.contains(&status))
}

fn matches_category(property: &Property, filters: &FilterState) -> bool {
    filters.categories.is_empty()
        || property
            .category
            .is_some_and(|category| filters.categories.contains(&category))
}

fn matches_price(property: &Property, filters: &FilterState) -> bool {
    property.price >= filters.min_price
        && filters.max_price.is_none_or(|max| property.price <= max)
}
