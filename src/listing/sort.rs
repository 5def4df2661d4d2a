//! Ordering of property listings.

use std::cmp::Ordering;

use crate::models::{Property, SortField, SortOrder};

/// Sort properties by `field` in `order`.
///
/// The sort is stable, and descending order flips the comparison rather than
/// reversing the output, so equal keys keep their incoming order either way.
/// An unrecognized field leaves the input untouched.
pub fn sort_properties(
    mut properties: Vec<Property>,
    field: &SortField,
    order: SortOrder,
) -> Vec<Property> {
    let compare: fn(&Property, &Property) -> Ordering = match field {
        SortField::Price => |a, b| a.price.total_cmp(&b.price),
        SortField::Rating => |a, b| a.rating.total_cmp(&b.rating),
        SortField::LastUpdated => |a, b| a.last_updated.cmp(&b.last_updated),
        SortField::Unrecognized(name) => {
            tracing::debug!("Unknown sort field {:?}, keeping filtered order", name);
            return properties;
        }
    };

    match order {
        SortOrder::Asc => properties.sort_by(compare),
        SortOrder::Desc => properties.sort_by(|a, b| compare(b, a)),
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::test_support::property;

    fn prices(properties: &[Property]) -> Vec<f64> {
        properties.iter().map(|p| p.price).collect()
    }

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_ascending_scenario() {
        let input = vec![
            property("a", "A", 200.0).build(),
            property("b", "B", 50.0).build(),
            property("c", "C", 100.0).build(),
        ];
        let output = sort_properties(input, &SortField::Price, SortOrder::Asc);
        assert_eq!(prices(&output), vec![50.0, 100.0, 200.0]);
    }

    #[test]
    fn test_price_descending() {
        let input = vec![
            property("a", "A", 200.0).build(),
            property("b", "B", 50.0).build(),
            property("c", "C", 100.0).build(),
        ];
        let output = sort_properties(input, &SortField::Price, SortOrder::Desc);
        assert_eq!(prices(&output), vec![200.0, 100.0, 50.0]);
    }

    #[test]
    fn test_ties_are_stable_in_both_directions() {
        let input = vec![
            property("a", "A", 10.0).rating(4.0).build(),
            property("b", "B", 10.0).rating(5.0).build(),
            property("c", "C", 10.0).rating(4.0).build(),
        ];

        let asc = sort_properties(input.clone(), &SortField::Rating, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["a", "c", "b"]);

        let desc = sort_properties(input, &SortField::Rating, SortOrder::Desc);
        assert_eq!(ids(&desc), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_last_updated_is_chronological() {
        let input = vec![
            property("a", "A", 1.0).updated("2024-05-01T00:00:00Z").build(),
            property("b", "B", 1.0).updated("2023-12-31T23:59:59Z").build(),
            property("c", "C", 1.0).updated("2024-05-01T00:00:01+00:00").build(),
        ];
        let output = sort_properties(input, &SortField::LastUpdated, SortOrder::Desc);
        assert_eq!(ids(&output), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unknown_field_is_a_no_op() {
        let input = vec![
            property("a", "A", 3.0).build(),
            property("b", "B", 1.0).build(),
            property("c", "C", 2.0).build(),
        ];
        let field = SortField::Unrecognized("bedrooms".to_string());
        let output = sort_properties(input.clone(), &field, SortOrder::Asc);
        assert_eq!(output, input);
    }

    #[test]
    fn test_sort_keeps_length_and_is_idempotent() {
        let input = vec![
            property("a", "A", 3.0).rating(1.0).build(),
            property("b", "B", 1.0).rating(2.0).build(),
            property("c", "C", 2.0).rating(2.0).build(),
            property("d", "D", 2.0).rating(0.5).build(),
        ];
        for field in [SortField::Price, SortField::Rating, SortField::LastUpdated] {
            for order in [SortOrder::Asc, SortOrder::Desc] {
                let once = sort_properties(input.clone(), &field, order);
                assert_eq!(once.len(), input.len());
                let twice = sort_properties(once.clone(), &field, order);
                assert_eq!(twice, once);
            }
        }
    }
}
