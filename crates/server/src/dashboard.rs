//! Dashboard API endpoint

use api_types::dashboard::{DashboardGet, DashboardView};
use axum::{Json, extract::State};
use chrono::Utc;

use crate::{
    ServerError,
    server::ServerState,
    snapshot::{map_category, map_order, map_vendor, parse_snapshot},
};

/// Headline numbers for the landing page.
pub async fn get(
    State(state): State<ServerState>,
    Json(payload): Json<DashboardGet>,
) -> Result<Json<DashboardView>, ServerError> {
    let today = match payload.today.as_deref() {
        Some(raw) => engine::parse_date(raw)?,
        None => Utc::now().with_timezone(&state.timezone).date_naive(),
    };
    let snapshot = parse_snapshot(payload.snapshot)?;
    let dashboard = state.engine.dashboard(&snapshot, today);

    Ok(Json(DashboardView {
        today,
        current_month_spending_minor: dashboard.current_month_spending.cents(),
        last_month_spending_minor: dashboard.last_month_spending.cents(),
        spending_change: dashboard.spending_change,
        total_spending_minor: dashboard.total_spending.cents(),
        budget_count: dashboard.budget_count,
        over_budget_count: dashboard.over_budget_count,
        near_limit_count: dashboard.near_limit_count,
        top_categories: dashboard
            .top_categories
            .into_iter()
            .map(map_category)
            .collect(),
        top_vendors: dashboard.top_vendors.into_iter().map(map_vendor).collect(),
        recent_orders: dashboard.recent_orders.into_iter().map(map_order).collect(),
    }))
}
