//! Spending analytics API endpoints.

use api_types::{
    analytics::{
        AnalyticsRequest, CategorySpendingResponse, MonthlySpendingResponse,
        VendorSpendingResponse,
    },
    budget::BudgetUsageResponse,
};
use axum::{Json, extract::State};
use engine::top_n;

use crate::{
    ServerError,
    server::ServerState,
    snapshot::{map_category, map_month, map_usage, map_vendor, parse_snapshot},
};

fn limited<T: Clone>(rows: Vec<T>, limit: Option<usize>) -> Vec<T> {
    match limit {
        Some(limit) => top_n(&rows, limit),
        None => rows,
    }
}

/// Spending per category, largest first.
pub async fn categories(
    State(state): State<ServerState>,
    Json(payload): Json<AnalyticsRequest>,
) -> Result<Json<CategorySpendingResponse>, ServerError> {
    let snapshot = parse_snapshot(payload.snapshot)?;
    let rows = state.engine.category_spending(&snapshot.line_items);
    let categories = limited(rows, payload.limit)
        .into_iter()
        .map(map_category)
        .collect();
    Ok(Json(CategorySpendingResponse { categories }))
}

/// Spending per vendor, largest first.
pub async fn vendors(
    State(state): State<ServerState>,
    Json(payload): Json<AnalyticsRequest>,
) -> Result<Json<VendorSpendingResponse>, ServerError> {
    let snapshot = parse_snapshot(payload.snapshot)?;
    let rows = state.engine.vendor_spending(&snapshot.orders);
    let vendors = limited(rows, payload.limit)
        .into_iter()
        .map(map_vendor)
        .collect();
    Ok(Json(VendorSpendingResponse { vendors }))
}

/// Order totals per calendar month.
pub async fn monthly(
    State(state): State<ServerState>,
    Json(payload): Json<AnalyticsRequest>,
) -> Result<Json<MonthlySpendingResponse>, ServerError> {
    let snapshot = parse_snapshot(payload.snapshot)?;
    let months = state
        .engine
        .monthly_spending(&snapshot.orders)
        .into_iter()
        .map(map_month)
        .collect();
    Ok(Json(MonthlySpendingResponse { months }))
}

/// Usage of every budget in the snapshot, in request order.
pub async fn budgets(
    State(state): State<ServerState>,
    Json(payload): Json<AnalyticsRequest>,
) -> Result<Json<BudgetUsageResponse>, ServerError> {
    let snapshot = parse_snapshot(payload.snapshot)?;
    let budgets = state
        .engine
        .budget_usages(&snapshot)
        .into_iter()
        .map(|usage| {
            let status = state.engine.budget_status(&usage);
            map_usage(usage, status)
        })
        .collect();
    Ok(Json(BudgetUsageResponse { budgets }))
}
