//! Order primitives.
//!
//! An `Order` is one purchase transaction as produced by the ingestion pipeline.
//! Orders are immutable from the engine's point of view.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CurrencyCode, MoneyCents};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vendor_name: String,
    pub order_date: NaiveDate,
    pub total: MoneyCents,
    pub currency: CurrencyCode,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order with a fresh id, no owner and the default currency.
    pub fn new(vendor_name: impl Into<String>, order_date: NaiveDate, total: MoneyCents) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            vendor_name: vendor_name.into(),
            order_date,
            total,
            currency: CurrencyCode::default(),
            created_at: Utc::now(),
        }
    }
}
