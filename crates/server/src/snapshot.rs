//! Conversions between wire records and engine types.
//!
//! This is the parsing boundary: dates, period types and currency codes are
//! validated here, and the first malformed record fails the whole request.

use api_types::{
    analytics::{CategorySpendingView, MonthlySpendingView, VendorSpendingView},
    budget::{BudgetStatus as ApiStatus, BudgetUsageView},
    order::{LineItemView, OrderView},
    records::{BudgetRecord, LineItemRecord, OrderRecord, SnapshotPayload},
};
use engine::{
    Budget, BudgetStatus, BudgetUsage, CategorySpending, CurrencyCode, EngineError, LineItem,
    MoneyCents, MonthlySpending, Order, PeriodType, Snapshot, VendorSpending, parse_date,
};

fn order_from_record(record: OrderRecord) -> Result<Order, EngineError> {
    let currency = record
        .currency
        .as_deref()
        .map(CurrencyCode::try_from)
        .transpose()?
        .unwrap_or_default();
    Ok(Order {
        id: record.id,
        user_id: record.user_id,
        vendor_name: record.vendor_name,
        order_date: parse_date(&record.order_date)?,
        total: MoneyCents::new(record.total_amount_minor),
        currency,
        created_at: record.created_at,
    })
}

fn line_item_from_record(record: LineItemRecord) -> LineItem {
    LineItem {
        id: record.id,
        order_id: record.order_id,
        user_id: record.user_id,
        item_name: record.item_name,
        price: MoneyCents::new(record.price_minor),
        quantity: record.quantity,
        category: record.category,
        created_at: record.created_at,
    }
}

fn budget_from_record(record: BudgetRecord) -> Result<Budget, EngineError> {
    Ok(Budget {
        id: record.id,
        user_id: record.user_id,
        period: PeriodType::try_from(record.period_type.as_str())?,
        amount: MoneyCents::new(record.amount_minor),
        start_date: parse_date(&record.start_date)?,
        category: record.category,
        created_at: record.created_at,
    })
}

/// Parse a request snapshot into engine records.
pub(crate) fn parse_snapshot(payload: SnapshotPayload) -> Result<Snapshot, EngineError> {
    let orders = payload
        .orders
        .into_iter()
        .map(order_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let line_items = payload
        .line_items
        .into_iter()
        .map(line_item_from_record)
        .collect();
    let budgets = payload
        .budgets
        .into_iter()
        .map(budget_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    let snapshot = Snapshot::new(orders, line_items, budgets);
    tracing::debug!(
        orders = snapshot.orders.len(),
        line_items = snapshot.line_items.len(),
        budgets = snapshot.budgets.len(),
        "snapshot parsed"
    );
    Ok(snapshot)
}

pub(crate) fn map_category(row: CategorySpending) -> CategorySpendingView {
    CategorySpendingView {
        category: row.category,
        amount_minor: row.amount.cents(),
        percentage: row.percentage,
        count: row.count,
    }
}

pub(crate) fn map_vendor(row: VendorSpending) -> VendorSpendingView {
    VendorSpendingView {
        vendor: row.vendor,
        amount_minor: row.amount.cents(),
        count: row.count,
    }
}

pub(crate) fn map_month(row: MonthlySpending) -> MonthlySpendingView {
    MonthlySpendingView {
        month: row.month,
        month_number: row.month_number,
        year: row.year,
        amount_minor: row.amount.cents(),
    }
}

fn map_status(status: BudgetStatus) -> ApiStatus {
    match status {
        BudgetStatus::OnTrack => ApiStatus::OnTrack,
        BudgetStatus::NearLimit => ApiStatus::NearLimit,
        BudgetStatus::OverBudget => ApiStatus::OverBudget,
    }
}

pub(crate) fn map_usage(usage: BudgetUsage, status: BudgetStatus) -> BudgetUsageView {
    BudgetUsageView {
        budget_id: usage.budget.id,
        period_type: usage.budget.period.as_str().to_string(),
        category: usage.budget.category_filter().map(ToString::to_string),
        amount_minor: usage.budget.amount.cents(),
        period_start: usage.period.start,
        period_end: usage.period.end,
        spent_minor: usage.spent.cents(),
        remaining_minor: usage.remaining.cents(),
        percentage: usage.percentage,
        status: map_status(status),
        skipped_items: usage.skipped_items,
    }
}

pub(crate) fn map_order(order: Order) -> OrderView {
    OrderView {
        id: order.id,
        vendor_name: order.vendor_name,
        order_date: order.order_date,
        total_amount_minor: order.total.cents(),
        currency: order.currency.code().to_string(),
    }
}

pub(crate) fn map_item(item: LineItem) -> LineItemView {
    LineItemView {
        id: item.id,
        order_id: item.order_id,
        amount_minor: item.amount().cents(),
        item_name: item.item_name,
        price_minor: item.price.cents(),
        quantity: item.quantity,
        category: item.category,
        created_at: item.created_at,
    }
}
