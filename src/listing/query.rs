//! Query-string encoding and decoding of [`FilterState`].
//!
//! The encoder is the single place that decides which keys go on the wire and in
//! what order. The decoder is its inverse for the HTTP handler and is lenient:
//! anything malformed falls back to the default instead of failing the request.

use crate::models::{
    FilterState, PropertyCategory, PropertyStatus, SortField, SortOrder, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE, PRICE_FLOOR,
};

pub const KEY_SEARCH: &str = "search";
pub const KEY_SORT_BY: &str = "sort_by";
pub const KEY_ORDER: &str = "order";
pub const KEY_STATUS: &str = "status";
pub const KEY_TYPE: &str = "type";
pub const KEY_MIN_PRICE: &str = "min_price";
pub const KEY_MAX_PRICE: &str = "max_price";
pub const KEY_PAGE: &str = "page";
pub const KEY_LIMIT: &str = "limit";

impl FilterState {
    /// Encode into ordered query pairs.
    ///
    /// Defaults are left out, except `sort_by`, `order`, `page` and `limit`
    /// which are always present.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(9);

        if !self.search.is_empty() {
            pairs.push((KEY_SEARCH, self.search.clone()));
        }
        pairs.push((KEY_SORT_BY, self.sort_by.as_str().to_string()));
        pairs.push((KEY_ORDER, self.order.as_str().to_string()));
        if !self.statuses.is_empty() {
            pairs.push((KEY_STATUS, join(self.statuses.iter().map(|s| s.as_str()))));
        }
        if !self.categories.is_empty() {
            pairs.push((KEY_TYPE, join(self.categories.iter().map(|c| c.as_str()))));
        }
        if self.min_price != PRICE_FLOOR {
            pairs.push((KEY_MIN_PRICE, self.min_price.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push((KEY_MAX_PRICE, max.to_string()));
        }
        pairs.push((KEY_PAGE, self.page.to_string()));
        pairs.push((KEY_LIMIT, self.limit.to_string()));

        pairs
    }

    /// Decode from query pairs, coercing malformed values to defaults.
    ///
    /// Unknown keys are ignored. Unknown status or type tokens are dropped.
    /// An unknown `sort_by` is kept so the sorter can treat it as a no-op.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = FilterState::default();

        for (key, raw) in pairs {
            // Search text is taken verbatim, same as the encoder sends it.
            if key == KEY_SEARCH {
                state.search = raw.to_string();
                continue;
            }
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }
            match key {
                KEY_SORT_BY => state.sort_by = SortField::parse(value),
                KEY_ORDER => {
                    state.order = SortOrder::parse(value).unwrap_or_else(|| {
                        tracing::debug!("Ignoring unknown sort order {:?}", value);
                        SortOrder::default()
                    })
                }
                KEY_STATUS => state.statuses = split(value, PropertyStatus::parse),
                KEY_TYPE => state.categories = split(value, PropertyCategory::parse),
                KEY_MIN_PRICE => {
                    state.min_price = parse_price(value).unwrap_or(PRICE_FLOOR);
                }
                KEY_MAX_PRICE => state.max_price = parse_price(value),
                KEY_PAGE => {
                    state.page = value
                        .parse::<i64>()
                        .ok()
                        .filter(|page| *page >= 1)
                        .unwrap_or(DEFAULT_PAGE);
                }
                KEY_LIMIT => {
                    state.limit = value
                        .parse::<usize>()
                        .ok()
                        .filter(|limit| *limit > 0)
                        .unwrap_or(DEFAULT_PAGE_SIZE);
                }
                _ => {}
            }
        }

        state
    }
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(",")
}

fn split<T: PartialEq>(value: &str, parse: fn(&str) -> Option<T>) -> Vec<T> {
    let mut out = Vec::new();
    for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match parse(token) {
            Some(v) if !out.contains(&v) => out.push(v),
            Some(_) => {}
            None => tracing::debug!("Ignoring unknown filter value {:?}", token),
        }
    }
    out
}

fn parse_price(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|p| p.is_finite())
}
