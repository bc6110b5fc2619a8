use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod analytics;
mod categories;
mod dashboard;
mod orders;
mod server;
mod snapshot;

pub mod types {
    pub mod records {
        pub use api_types::records::{BudgetRecord, LineItemRecord, OrderRecord, SnapshotPayload};
    }

    pub mod analytics {
        pub use api_types::analytics::{
            AnalyticsRequest, CategorySpendingResponse, CategorySpendingView,
            MonthlySpendingResponse, MonthlySpendingView, VendorSpendingResponse,
            VendorSpendingView,
        };
        pub use api_types::budget::{BudgetStatus, BudgetUsageResponse, BudgetUsageView};
    }

    pub mod order {
        pub use api_types::order::{
            LineItemView, OrderDetailGet, OrderDetailResponse, OrderListResponse, OrderQuery,
            OrderSearch, OrderSort, OrderView, SortDirection,
        };
    }

    pub mod category {
        pub use api_types::category::{
            CategoryItems, CategoryItemsResponse, CategoryListResponse, ItemSort,
        };
    }

    pub mod dashboard {
        pub use api_types::dashboard::{DashboardGet, DashboardView};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidDate(_)
        | EngineError::InvalidPeriod(_)
        | EngineError::InvalidCurrency(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::InvalidConfig(msg) => {
            tracing::error!("engine misconfigured: {msg}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
