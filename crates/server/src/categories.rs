//! Category browsing API endpoints.

use api_types::{
    category::{CategoryItems, CategoryItemsResponse, CategoryListResponse, ItemSort as ApiSort},
    records::SnapshotPayload,
};
use axum::{Json, extract::State};
use engine::ItemSort;

use crate::{
    ServerError,
    server::ServerState,
    snapshot::{map_item, parse_snapshot},
};

fn map_sort(sort: ApiSort) -> ItemSort {
    match sort {
        ApiSort::Amount => ItemSort::Amount,
        ApiSort::Name => ItemSort::Name,
        ApiSort::Recent => ItemSort::Recent,
    }
}

/// Distinct category labels.
pub async fn list(
    State(state): State<ServerState>,
    Json(payload): Json<SnapshotPayload>,
) -> Result<Json<CategoryListResponse>, ServerError> {
    let snapshot = parse_snapshot(payload)?;
    let categories = state.engine.categories(&snapshot.line_items);
    Ok(Json(CategoryListResponse { categories }))
}

/// Line items of one category.
pub async fn items(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryItems>,
) -> Result<Json<CategoryItemsResponse>, ServerError> {
    if payload.category.is_empty() {
        return Err(ServerError::Generic("category required".to_string()));
    }
    let snapshot = parse_snapshot(payload.snapshot)?;
    let items = state
        .engine
        .category_items(&snapshot.line_items, &payload.category, map_sort(payload.sort))
        .into_iter()
        .map(map_item)
        .collect();
    Ok(Json(CategoryItemsResponse { items }))
}
