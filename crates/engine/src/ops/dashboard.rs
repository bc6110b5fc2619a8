use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    MoneyCents, Order, Period, Snapshot,
    util::{percent_change, top_n},
};

use super::{BudgetStatus, CategorySpending, Engine, VendorSpending};

const TOP_CATEGORIES: usize = 3;
const TOP_VENDORS: usize = 3;
const RECENT_ORDERS: usize = 5;

/// Headline numbers for the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub current_month: Period,
    pub current_month_spending: MoneyCents,
    pub last_month_spending: MoneyCents,
    /// Month-over-month change in percent, `0.0` when last month had no spending.
    pub spending_change: f64,
    pub total_spending: MoneyCents,
    pub budget_count: usize,
    pub over_budget_count: usize,
    pub near_limit_count: usize,
    pub top_categories: Vec<CategorySpending>,
    pub top_vendors: Vec<VendorSpending>,
    pub recent_orders: Vec<Order>,
}

fn spending_within(orders: &[Order], period: Period) -> MoneyCents {
    orders
        .iter()
        .filter(|order| period.contains(order.order_date))
        .map(|order| order.total)
        .sum()
}

impl Engine {
    /// Summarize the snapshot as seen on `today`.
    pub fn dashboard(&self, snapshot: &Snapshot, today: NaiveDate) -> Dashboard {
        let current_month = Period::month_of(today);
        let last_month = Period::previous_month_of(today);

        let current_month_spending = spending_within(&snapshot.orders, current_month);
        let last_month_spending = spending_within(&snapshot.orders, last_month);

        let statuses: Vec<BudgetStatus> = self
            .budget_usages(snapshot)
            .iter()
            .map(|usage| self.budget_status(usage))
            .collect();
        let count_status = |wanted: BudgetStatus| {
            statuses.iter().filter(|status| **status == wanted).count()
        };

        let mut recent_orders = snapshot.orders.clone();
        recent_orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        recent_orders.truncate(RECENT_ORDERS);

        Dashboard {
            current_month,
            current_month_spending,
            last_month_spending,
            spending_change: percent_change(current_month_spending, last_month_spending),
            total_spending: snapshot.orders.iter().map(|order| order.total).sum(),
            budget_count: snapshot.budgets.len(),
            over_budget_count: count_status(BudgetStatus::OverBudget),
            near_limit_count: count_status(BudgetStatus::NearLimit),
            top_categories: top_n(&self.category_spending(&snapshot.line_items), TOP_CATEGORIES),
            top_vendors: top_n(&self.vendor_spending(&snapshot.orders), TOP_VENDORS),
            recent_orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Budget, LineItem, PeriodType};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        let engine = Engine::default();
        let dashboard = engine.dashboard(&Snapshot::default(), day(2024, 3, 15));

        assert_eq!(dashboard.current_month_spending, MoneyCents::ZERO);
        assert_eq!(dashboard.spending_change, 0.0);
        assert_eq!(dashboard.budget_count, 0);
        assert!(dashboard.top_categories.is_empty());
        assert!(dashboard.recent_orders.is_empty());
    }

    #[test]
    fn compares_current_and_previous_month() {
        let engine = Engine::default();
        let orders = vec![
            Order::new("Acme", day(2024, 3, 2), MoneyCents::new(30_00)),
            Order::new("Acme", day(2024, 2, 20), MoneyCents::new(20_00)),
            Order::new("Globex", day(2024, 1, 20), MoneyCents::new(100_00)),
        ];
        let snapshot = Snapshot::new(orders, Vec::new(), Vec::new());
        let dashboard = engine.dashboard(&snapshot, day(2024, 3, 15));

        assert_eq!(dashboard.current_month_spending, MoneyCents::new(30_00));
        assert_eq!(dashboard.last_month_spending, MoneyCents::new(20_00));
        assert_eq!(dashboard.spending_change, 50.0);
        assert_eq!(dashboard.total_spending, MoneyCents::new(150_00));
        assert_eq!(dashboard.top_vendors[0].vendor, "Globex");
    }

    #[test]
    fn counts_budgets_by_status_and_limits_lists() {
        let engine = Engine::default();
        let orders: Vec<Order> = (1..=7)
            .map(|d| Order::new(format!("Vendor {d}"), day(2024, 3, d), MoneyCents::new(10_00)))
            .collect();
        let items: Vec<LineItem> = orders
            .iter()
            .enumerate()
            .map(|(i, order)| {
                LineItem::new(order.id, "x", MoneyCents::new(10_00), 1, format!("Cat {i}"))
            })
            .collect();
        let budgets = vec![
            Budget::new(PeriodType::Monthly, MoneyCents::new(50_00), day(2024, 3, 1), None),
            Budget::new(PeriodType::Monthly, MoneyCents::new(75_00), day(2024, 3, 1), None),
            Budget::new(PeriodType::Monthly, MoneyCents::new(500_00), day(2024, 3, 1), None),
        ];
        let snapshot = Snapshot::new(orders, items, budgets);
        let dashboard = engine.dashboard(&snapshot, day(2024, 3, 20));

        assert_eq!(dashboard.budget_count, 3);
        assert_eq!(dashboard.over_budget_count, 1);
        assert_eq!(dashboard.near_limit_count, 1);
        assert_eq!(dashboard.top_categories.len(), 3);
        assert_eq!(dashboard.top_vendors.len(), 3);
        assert_eq!(dashboard.recent_orders.len(), 5);
        assert_eq!(dashboard.recent_orders[0].order_date, day(2024, 3, 7));
    }
}
