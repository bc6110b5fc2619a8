//! Caller-owned view of the three record collections.
//!
//! The engine never reaches into ambient state: whoever hosts it loads the
//! records, wraps them in a `Snapshot` and hands a reference to the queries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Budget, LineItem, Order};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    pub fn new(orders: Vec<Order>, line_items: Vec<LineItem>, budgets: Vec<Budget>) -> Self {
        Self {
            orders,
            line_items,
            budgets,
        }
    }

    /// Looks up an order by id.
    #[must_use]
    pub fn order(&self, order_id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    /// Line items belonging to `order_id`, in input order.
    #[must_use]
    pub fn items_for_order(&self, order_id: Uuid) -> Vec<&LineItem> {
        self.line_items
            .iter()
            .filter(|item| item.order_id == order_id)
            .collect()
    }

    /// Builds the order lookup used by line item joins.
    #[must_use]
    pub fn order_index(&self) -> OrderIndex<'_> {
        OrderIndex::new(&self.orders)
    }
}

/// Map from order id to order, built once per query instead of scanning the
/// order list for every line item.
#[derive(Debug)]
pub struct OrderIndex<'a> {
    by_id: HashMap<Uuid, &'a Order>,
}

impl<'a> OrderIndex<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        let by_id = orders.iter().map(|order| (order.id, order)).collect();
        Self { by_id }
    }

    #[must_use]
    pub fn get(&self, order_id: Uuid) -> Option<&'a Order> {
        self.by_id.get(&order_id).copied()
    }
}
