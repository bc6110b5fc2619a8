use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine, WeekStart};

mod browse;
mod budgets;
mod dashboard;
mod spending;

pub use browse::{ItemSort, OrderQuery, OrderSort, SortDirection};
pub use budgets::{BudgetStatus, BudgetUsage};
pub use dashboard::Dashboard;
pub use spending::{CategorySpending, MonthlySpending, VendorSpending};

/// Budgets above this share of their cap are reported as near the limit.
pub const DEFAULT_NEAR_LIMIT_PERCENT: f64 = 85.0;

/// How monthly buckets are ordered inside a year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOrder {
    /// Calendar order (Jan, Feb, ..., Dec).
    #[default]
    Chronological,
    /// Alphabetical by month abbreviation (Apr, Aug, Dec, ...), kept for dashboards
    /// that were built around that ordering.
    Label,
}

/// Tunables shared by every query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineOptions {
    pub week_start: WeekStart,
    pub month_order: MonthOrder,
    pub near_limit_percent: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            month_order: MonthOrder::default(),
            near_limit_percent: DEFAULT_NEAR_LIMIT_PERCENT,
        }
    }
}

/// The aggregation engine.
///
/// Holds only configuration. Every query borrows the caller's records and
/// recomputes from scratch, so one `Engine` can serve any number of concurrent
/// requests.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    options: EngineOptions,
}

impl EngineBuilder {
    /// First day of the week for weekly budgets.
    pub fn week_start(mut self, week_start: WeekStart) -> EngineBuilder {
        self.options.week_start = week_start;
        self
    }

    /// Ordering of monthly spending buckets.
    pub fn month_order(mut self, month_order: MonthOrder) -> EngineBuilder {
        self.options.month_order = month_order;
        self
    }

    /// Usage percentage above which a budget is "near limit".
    pub fn near_limit_percent(mut self, percent: f64) -> EngineBuilder {
        self.options.near_limit_percent = percent;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> ResultEngine<Engine> {
        let near_limit = self.options.near_limit_percent;
        if !near_limit.is_finite() || !(0.0..=100.0).contains(&near_limit) {
            return Err(EngineError::InvalidConfig(format!(
                "near limit percent must be within 0..=100, got {near_limit}"
            )));
        }
        tracing::debug!(
            week_start = ?self.options.week_start,
            month_order = ?self.options.month_order,
            near_limit,
            "engine configured"
        );
        Ok(Engine {
            options: self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_options_default() {
        let engine = Engine::builder().build().unwrap();
        assert_eq!(engine.options, EngineOptions::default());
        assert_eq!(engine.options.week_start, WeekStart::Sunday);
        assert_eq!(engine.options.month_order, MonthOrder::Chronological);
    }

    #[test]
    fn builder_rejects_out_of_range_near_limit() {
        for bad in [-1.0, 100.5, f64::NAN] {
            let err = Engine::builder().near_limit_percent(bad).build().unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfig(_)));
        }
    }
}
