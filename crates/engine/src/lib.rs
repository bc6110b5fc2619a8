//! Aggregation engine for purchase records.
//!
//! The engine turns caller-supplied orders, line items and budgets into the
//! summaries a spending dashboard renders: spending per category, per vendor and
//! per month, and how far each budget is consumed in its current period.
//!
//! Everything here is synchronous and side-effect free. Records are borrowed,
//! never stored, so a single [`Engine`] can be shared between threads.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use engine::{Budget, Engine, MoneyCents, Order, PeriodType};
//!
//! let engine = Engine::builder().build().unwrap();
//! let march_5 = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let march_1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!
//! let orders = [Order::new("Acme", march_5, MoneyCents::new(50_00))];
//! let budget = Budget::new(PeriodType::Monthly, MoneyCents::new(100_00), march_1, None);
//!
//! let usage = engine.budget_usage(&budget, &orders, &[]);
//! assert_eq!(usage.spent, MoneyCents::new(50_00));
//! assert_eq!(usage.percentage, 50.0);
//! ```

pub use budgets::{Budget, PeriodType};
pub use currency::CurrencyCode;
pub use error::EngineError;
pub use line_items::LineItem;
pub use money::MoneyCents;
pub use ops::{
    BudgetStatus, BudgetUsage, CategorySpending, DEFAULT_NEAR_LIMIT_PERCENT, Dashboard, Engine,
    EngineBuilder, EngineOptions, ItemSort, MonthOrder, MonthlySpending, OrderQuery, OrderSort,
    SortDirection, VendorSpending,
};
pub use orders::Order;
pub use period::{Period, WeekStart};
pub use snapshot::{OrderIndex, Snapshot};
pub use util::{parse_date, top_n};

mod budgets;
mod currency;
mod error;
mod line_items;
mod money;
mod ops;
mod orders;
mod period;
mod snapshot;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;
