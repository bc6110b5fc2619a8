use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod records {
    use super::*;

    /// Order as returned by the record store.
    ///
    /// `order_date` is kept as the raw string; the server parses it.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct OrderRecord {
        pub id: Uuid,
        #[serde(default)]
        pub user_id: Uuid,
        pub vendor_name: String,
        pub order_date: String,
        pub total_amount_minor: i64,
        pub currency: Option<String>,
        #[serde(default)]
        pub created_at: DateTime<Utc>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct LineItemRecord {
        pub id: Uuid,
        pub order_id: Uuid,
        #[serde(default)]
        pub user_id: Uuid,
        pub item_name: String,
        pub price_minor: i64,
        pub quantity: u32,
        pub category: String,
        #[serde(default)]
        pub created_at: DateTime<Utc>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BudgetRecord {
        pub id: Uuid,
        #[serde(default)]
        pub user_id: Uuid,
        /// `monthly` or `weekly`.
        pub period_type: String,
        pub amount_minor: i64,
        pub start_date: String,
        pub category: Option<String>,
        #[serde(default)]
        pub created_at: DateTime<Utc>,
    }

    /// The caller's current view of all three collections.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SnapshotPayload {
        pub orders: Vec<OrderRecord>,
        pub line_items: Vec<LineItemRecord>,
        pub budgets: Vec<BudgetRecord>,
    }
}

pub mod analytics {
    use super::*;
    use crate::records::SnapshotPayload;

    /// Request body for the analytics endpoints.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct AnalyticsRequest {
        #[serde(flatten)]
        pub snapshot: SnapshotPayload,
        /// Keep only the first `limit` rows.
        #[serde(default)]
        pub limit: Option<usize>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct CategorySpendingView {
        pub category: String,
        pub amount_minor: i64,
        pub percentage: f64,
        pub count: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategorySpendingResponse {
        pub categories: Vec<CategorySpendingView>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct VendorSpendingView {
        pub vendor: String,
        pub amount_minor: i64,
        pub count: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VendorSpendingResponse {
        pub vendors: Vec<VendorSpendingView>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct MonthlySpendingView {
        pub month: String,
        pub month_number: u32,
        pub year: i32,
        pub amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthlySpendingResponse {
        pub months: Vec<MonthlySpendingView>,
    }
}

pub mod budget {
    use super::*;

    /// Budget consumption bucket used by the UI for colouring and alerts.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum BudgetStatus {
        OnTrack,
        NearLimit,
        OverBudget,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BudgetUsageView {
        pub budget_id: Uuid,
        pub period_type: String,
        pub category: Option<String>,
        pub amount_minor: i64,
        pub period_start: NaiveDate,
        pub period_end: NaiveDate,
        pub spent_minor: i64,
        pub remaining_minor: i64,
        pub percentage: f64,
        pub status: BudgetStatus,
        pub skipped_items: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetUsageResponse {
        pub budgets: Vec<BudgetUsageView>,
    }
}

pub mod order {
    use super::*;
    use crate::records::SnapshotPayload;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum OrderSort {
        #[default]
        Date,
        Vendor,
        Amount,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SortDirection {
        Asc,
        #[default]
        Desc,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct OrderQuery {
        pub term: String,
        pub sort: OrderSort,
        pub direction: SortDirection,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct OrderSearch {
        #[serde(flatten)]
        pub snapshot: SnapshotPayload,
        #[serde(default)]
        pub query: OrderQuery,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OrderDetailGet {
        #[serde(flatten)]
        pub snapshot: SnapshotPayload,
        pub order_id: Uuid,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct OrderView {
        pub id: Uuid,
        pub vendor_name: String,
        pub order_date: NaiveDate,
        pub total_amount_minor: i64,
        pub currency: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct LineItemView {
        pub id: Uuid,
        pub order_id: Uuid,
        pub item_name: String,
        pub price_minor: i64,
        pub quantity: u32,
        /// `price_minor * quantity`.
        pub amount_minor: i64,
        pub category: String,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OrderListResponse {
        pub orders: Vec<OrderView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct OrderDetailResponse {
        pub order: OrderView,
        pub items: Vec<LineItemView>,
    }
}

pub mod category {
    use super::*;
    use crate::{order::LineItemView, records::SnapshotPayload};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ItemSort {
        #[default]
        Amount,
        Name,
        Recent,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryListResponse {
        pub categories: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryItems {
        #[serde(flatten)]
        pub snapshot: SnapshotPayload,
        pub category: String,
        #[serde(default)]
        pub sort: ItemSort,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryItemsResponse {
        pub items: Vec<LineItemView>,
    }
}

pub mod dashboard {
    use super::*;
    use crate::{
        analytics::{CategorySpendingView, VendorSpendingView},
        order::OrderView,
        records::SnapshotPayload,
    };

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct DashboardGet {
        #[serde(flatten)]
        pub snapshot: SnapshotPayload,
        /// Reference day (`YYYY-MM-DD`); defaults to today in the server timezone.
        #[serde(default)]
        pub today: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DashboardView {
        pub today: NaiveDate,
        pub current_month_spending_minor: i64,
        pub last_month_spending_minor: i64,
        pub spending_change: f64,
        pub total_spending_minor: i64,
        pub budget_count: usize,
        pub over_budget_count: usize,
        pub near_limit_count: usize,
        pub top_categories: Vec<CategorySpendingView>,
        pub top_vendors: Vec<VendorSpendingView>,
        pub recent_orders: Vec<OrderView>,
    }
}
