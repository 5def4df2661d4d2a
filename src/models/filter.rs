//! Filter state model matching the admin filter bar.

use super::{PropertyCategory, PropertyStatus};

/// Lowest accepted minimum price; a `min_price` here is not sent.
pub const PRICE_FLOOR: f64 = 0.0;
/// Page number used when none (or garbage) is given.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when none (or garbage) is given.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Field the listing is ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortField {
    Price,
    Rating,
    #[default]
    LastUpdated,
    /// A name no sorter knows; listings keep their filtered order.
    Unrecognized(String),
}

impl SortField {
    pub fn as_str(&self) -> &str {
        match self {
            SortField::Price => "price",
            SortField::Rating => "rating",
            SortField::LastUpdated => "last_updated",
            SortField::Unrecognized(name) => name,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "price" => SortField::Price,
            "rating" => SortField::Rating,
            "last_updated" => SortField::LastUpdated,
            other => SortField::Unrecognized(other.to_string()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Everything the user has chosen in the filter bar and pager.
///
/// Values are immutable; the `with_*` methods return an updated copy so that
/// every change in the UI produces a fresh state to request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub sort_by: SortField,
    pub order: SortOrder,
    pub statuses: Vec<PropertyStatus>,
    pub categories: Vec<PropertyCategory>,
    pub min_price: f64,
    /// `None` means no upper bound.
    pub max_price: Option<f64>,
    /// 1-based. Not validated here.
    pub page: i64,
    pub limit: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: SortField::default(),
            order: SortOrder::default(),
            statuses: Vec::new(),
            categories: Vec::new(),
            min_price: PRICE_FLOOR,
            max_price: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    /// Changing the search text sends the user back to the first page.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort_by: SortField, order: SortOrder) -> Self {
        Self {
            sort_by,
            order,
            ..self.clone()
        }
    }

    /// Adds the status if absent, removes it if present.
    pub fn toggle_status(&self, status: PropertyStatus) -> Self {
        let mut statuses = self.statuses.clone();
        match statuses.iter().position(|s| *s == status) {
            Some(idx) => {
                statuses.remove(idx);
            }
            None => statuses.push(status),
        }
        Self {
            statuses,
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    /// Adds the category if absent, removes it if present.
    pub fn toggle_category(&self, category: PropertyCategory) -> Self {
        let mut categories = self.categories.clone();
        match categories.iter().position(|c| *c == category) {
            Some(idx) => {
                categories.remove(idx);
            }
            None => categories.push(category),
        }
        Self {
            categories,
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    /// Non-finite bounds fall back to the defaults (floor, unbounded).
    pub fn with_price_range(&self, min_price: f64, max_price: Option<f64>) -> Self {
        let min_price = if min_price.is_finite() {
            min_price
        } else {
            PRICE_FLOOR
        };
        Self {
            min_price,
            max_price: max_price.filter(|max| max.is_finite()),
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: i64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn with_limit(&self, limit: usize) -> Self {
        Self {
            limit,
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    /// True when no clause of the filter would exclude anything.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.statuses.is_empty()
            && self.categories.is_empty()
            && self.min_price <= PRICE_FLOOR
            && self.max_price.is_none()
    }
}
