//! Line item primitives.
//!
//! A `LineItem` is one purchased item inside an [`Order`](crate::Order), linked
//! through `order_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::MoneyCents;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub item_name: String,
    /// Unit price.
    pub price: MoneyCents,
    pub quantity: u32,
    /// Free-text label, compared by exact equality.
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl LineItem {
    pub fn new(
        order_id: Uuid,
        item_name: impl Into<String>,
        price: MoneyCents,
        quantity: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            user_id: Uuid::nil(),
            item_name: item_name.into(),
            price,
            quantity,
            category: category.into(),
            created_at: Utc::now(),
        }
    }

    /// Effective amount: `price × quantity`.
    #[must_use]
    pub fn amount(&self) -> MoneyCents {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_price_times_quantity() {
        let item = LineItem::new(Uuid::new_v4(), "Pens", MoneyCents::new(1_25), 4, "Office");
        assert_eq!(item.amount(), MoneyCents::new(5_00));
    }
}
