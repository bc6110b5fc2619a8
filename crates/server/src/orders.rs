//! Order browsing API endpoints.

use api_types::order::{
    OrderDetailGet, OrderDetailResponse, OrderListResponse, OrderQuery as ApiQuery,
    OrderSearch, OrderSort as ApiSort, SortDirection as ApiDirection,
};
use axum::{Json, extract::State};
use engine::{EngineError, OrderQuery, OrderSort, SortDirection};

use crate::{
    ServerError,
    server::ServerState,
    snapshot::{map_item, map_order, parse_snapshot},
};

fn map_query(query: ApiQuery) -> OrderQuery {
    OrderQuery {
        term: query.term,
        sort: match query.sort {
            ApiSort::Date => OrderSort::Date,
            ApiSort::Vendor => OrderSort::Vendor,
            ApiSort::Amount => OrderSort::Amount,
        },
        direction: match query.direction {
            ApiDirection::Asc => SortDirection::Asc,
            ApiDirection::Desc => SortDirection::Desc,
        },
    }
}

/// Orders filtered by vendor and sorted.
pub async fn search(
    State(state): State<ServerState>,
    Json(payload): Json<OrderSearch>,
) -> Result<Json<OrderListResponse>, ServerError> {
    let snapshot = parse_snapshot(payload.snapshot)?;
    let orders = state
        .engine
        .search_orders(&snapshot.orders, &map_query(payload.query))
        .into_iter()
        .map(map_order)
        .collect();
    Ok(Json(OrderListResponse { orders }))
}

/// One order with its line items.
pub async fn detail(
    State(_state): State<ServerState>,
    Json(payload): Json<OrderDetailGet>,
) -> Result<Json<OrderDetailResponse>, ServerError> {
    let snapshot = parse_snapshot(payload.snapshot)?;
    let order = snapshot
        .order(payload.order_id)
        .cloned()
        .ok_or_else(|| EngineError::KeyNotFound(payload.order_id.to_string()))?;
    let items = snapshot
        .items_for_order(payload.order_id)
        .into_iter()
        .cloned()
        .map(map_item)
        .collect();

    Ok(Json(OrderDetailResponse {
        order: map_order(order),
        items,
    }))
}
