//! Budget primitives.
//!
//! A `Budget` caps spending over a recurring period, optionally scoped to a
//! single category.

use core::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    Monthly,
    Weekly,
}

impl PeriodType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PeriodType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            other => Err(EngineError::InvalidPeriod(format!(
                "invalid period type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub period: PeriodType,
    /// Spending cap for one period.
    pub amount: MoneyCents,
    pub start_date: NaiveDate,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(
        period: PeriodType,
        amount: MoneyCents,
        start_date: NaiveDate,
        category: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            period,
            amount,
            start_date,
            category,
            created_at: Utc::now(),
        }
    }

    /// Category this budget is restricted to, if any.
    ///
    /// A blank label counts as "all categories".
    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.trim().is_empty())
    }
}
