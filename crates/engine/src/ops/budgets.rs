use serde::{Deserialize, Serialize};

use crate::{
    Budget, LineItem, MoneyCents, Order, OrderIndex, Period, Snapshot, util::percent_of,
};

use super::Engine;

/// How far a budget has been consumed within its period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub budget: Budget,
    /// Interval the spending was matched against.
    pub period: Period,
    pub spent: MoneyCents,
    /// `amount - spent`; negative once the budget is overspent.
    pub remaining: MoneyCents,
    /// `spent / amount * 100`, `0.0` for a zero cap.
    pub percentage: f64,
    /// Category-matching line items skipped because their order is unknown.
    pub skipped_items: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    OverBudget,
}

impl BudgetUsage {
    /// Classify the usage against the `near_limit` threshold (in percent).
    #[must_use]
    pub fn status(&self, near_limit: f64) -> BudgetStatus {
        if self.percentage > 100.0 {
            BudgetStatus::OverBudget
        } else if self.percentage > near_limit {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::OnTrack
        }
    }
}

impl Engine {
    /// Resolve the date interval a budget is measured against.
    #[must_use]
    pub fn resolve_period(&self, budget: &Budget) -> Period {
        Period::for_budget(budget, self.options.week_start)
    }

    /// Usage for a single budget.
    ///
    /// Builds a throwaway order index; use [`Engine::budget_usages`] to evaluate
    /// many budgets over the same records.
    pub fn budget_usage(
        &self,
        budget: &Budget,
        orders: &[Order],
        items: &[LineItem],
    ) -> BudgetUsage {
        let index = OrderIndex::new(orders);
        self.usage_with_index(budget, orders, items, &index)
    }

    /// Usage for every budget of the snapshot, in the snapshot's budget order.
    pub fn budget_usages(&self, snapshot: &Snapshot) -> Vec<BudgetUsage> {
        let index = snapshot.order_index();
        snapshot
            .budgets
            .iter()
            .map(|budget| {
                self.usage_with_index(budget, &snapshot.orders, &snapshot.line_items, &index)
            })
            .collect()
    }

    /// Classify a usage with the configured near-limit threshold.
    #[must_use]
    pub fn budget_status(&self, usage: &BudgetUsage) -> BudgetStatus {
        usage.status(self.options.near_limit_percent)
    }

    fn usage_with_index(
        &self,
        budget: &Budget,
        orders: &[Order],
        items: &[LineItem],
        index: &OrderIndex<'_>,
    ) -> BudgetUsage {
        let period = self.resolve_period(budget);
        let mut skipped_items = 0;

        let spent: MoneyCents = match budget.category_filter() {
            Some(category) => items
                .iter()
                .filter(|item| item.category == category)
                .filter(|item| match index.get(item.order_id) {
                    Some(order) => period.contains(order.order_date),
                    None => {
                        skipped_items += 1;
                        false
                    }
                })
                .map(LineItem::amount)
                .sum(),
            None => orders
                .iter()
                .filter(|order| period.contains(order.order_date))
                .map(|order| order.total)
                .sum(),
        };

        if skipped_items > 0 {
            tracing::debug!(
                budget_id = %budget.id,
                skipped_items,
                "line items without a known order ignored"
            );
        }

        BudgetUsage {
            budget: budget.clone(),
            period,
            spent,
            remaining: budget.amount - spent,
            percentage: percent_of(spent, budget.amount),
            skipped_items,
        }
    }
}
