//! Property listing endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{FilterState, Property, PropertyPage};
use crate::AppState;

/// GET /properties - List properties matching the query.
///
/// Accepts `search`, `sort_by`, `order`, `status`, `type`, `min_price`,
/// `max_price`, `page` and `limit`. Malformed values fall back to defaults.
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<PropertyPage>> {
    let mut filters =
        FilterState::from_query_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    // Cap page size
    filters.limit = filters.limit.min(state.config.max_page_size);

    let page = state.provider.list(&filters).await?;
    tracing::debug!(
        provider = state.provider.name(),
        total = page.total,
        page = page.page,
        "Listed properties"
    );

    Ok(Json(page))
}

/// GET /properties/:id - Get a single property.
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Property>> {
    match state.provider.get(&id).await? {
        Some(property) => Ok(Json(property)),
        None => Err(AppError::NotFound(format!("Property {} not found", id))),
    }
}
