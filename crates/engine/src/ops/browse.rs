use std::collections::BTreeSet;

use crate::{LineItem, Order, util::compare_labels};

use super::Engine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderSort {
    #[default]
    Date,
    Vendor,
    Amount,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Filter and ordering for the order list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderQuery {
    /// Case-insensitive vendor substring; empty matches everything.
    pub term: String,
    pub sort: OrderSort,
    pub direction: SortDirection,
}

/// Ordering for line items inside one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemSort {
    /// Effective amount, largest first.
    #[default]
    Amount,
    /// Item name, A to Z.
    Name,
    /// Creation time, newest first.
    Recent,
}

impl Engine {
    /// Orders whose vendor matches `query.term`, sorted as requested.
    pub fn search_orders(&self, orders: &[Order], query: &OrderQuery) -> Vec<Order> {
        let needle = query.term.to_lowercase();
        let mut found: Vec<Order> = orders
            .iter()
            .filter(|order| order.vendor_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        found.sort_by(|a, b| {
            let ordering = match query.sort {
                OrderSort::Date => a.order_date.cmp(&b.order_date),
                OrderSort::Vendor => compare_labels(&a.vendor_name, &b.vendor_name),
                OrderSort::Amount => a.total.cmp(&b.total),
            };
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        found
    }

    /// Distinct category labels, sorted.
    pub fn categories(&self, items: &[LineItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| item.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Line items labelled exactly `category`.
    pub fn category_items(
        &self,
        items: &[LineItem],
        category: &str,
        sort: ItemSort,
    ) -> Vec<LineItem> {
        let mut found: Vec<LineItem> = items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect();

        match sort {
            ItemSort::Amount => found.sort_by(|a, b| b.amount().cmp(&a.amount())),
            ItemSort::Name => found.sort_by(|a, b| compare_labels(&a.item_name, &b.item_name)),
            ItemSort::Recent => found.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use uuid::Uuid;

    use super::*;
    use crate::MoneyCents;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn orders() -> Vec<Order> {
        vec![
            Order::new("Amazon", day(2024, 3, 5), MoneyCents::new(20_00)),
            Order::new("bookshop", day(2024, 3, 1), MoneyCents::new(35_00)),
            Order::new("AMAZON Fresh", day(2024, 3, 9), MoneyCents::new(5_00)),
        ]
    }

    #[test]
    fn default_query_lists_newest_first() {
        let engine = Engine::default();
        let found = engine.search_orders(&orders(), &OrderQuery::default());
        let dates: Vec<_> = found.iter().map(|order| order.order_date).collect();
        assert_eq!(dates, [day(2024, 3, 9), day(2024, 3, 5), day(2024, 3, 1)]);
    }

    #[test]
    fn term_matches_vendor_case_insensitively() {
        let engine = Engine::default();
        let query = OrderQuery {
            term: "amazon".to_string(),
            sort: OrderSort::Amount,
            direction: SortDirection::Asc,
        };
        let vendors: Vec<_> = engine
            .search_orders(&orders(), &query)
            .into_iter()
            .map(|order| order.vendor_name)
            .collect();
        assert_eq!(vendors, ["AMAZON Fresh", "Amazon"]);
    }

    #[test]
    fn term_is_matched_verbatim() {
        let engine = Engine::default();
        let query = OrderQuery {
            term: "amazon ".to_string(),
            ..OrderQuery::default()
        };
        let vendors: Vec<_> = engine
            .search_orders(&orders(), &query)
            .into_iter()
            .map(|order| order.vendor_name)
            .collect();
        assert_eq!(vendors, ["AMAZON Fresh"]);
    }

    #[test]
    fn vendor_sort_ignores_case() {
        let engine = Engine::default();
        let query = OrderQuery {
            sort: OrderSort::Vendor,
            direction: SortDirection::Asc,
            ..OrderQuery::default()
        };
        let vendors: Vec<_> = engine
            .search_orders(&orders(), &query)
            .into_iter()
            .map(|order| order.vendor_name)
            .collect();
        assert_eq!(vendors, ["Amazon", "AMAZON Fresh", "bookshop"]);
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let engine = Engine::default();
        let order_id = Uuid::new_v4();
        let items = [
            LineItem::new(order_id, "a", MoneyCents::new(1), 1, "Toys"),
            LineItem::new(order_id, "b", MoneyCents::new(1), 1, "Books"),
            LineItem::new(order_id, "c", MoneyCents::new(1), 1, "Toys"),
        ];
        assert_eq!(engine.categories(&items), ["Books", "Toys"]);
    }

    #[test]
    fn category_items_sorts() {
        let engine = Engine::default();
        let order_id = Uuid::new_v4();
        let mut cheap = LineItem::new(order_id, "Zebra", MoneyCents::new(1_00), 3, "Toys");
        let mut pricey = LineItem::new(order_id, "apple", MoneyCents::new(2_50), 1, "Toys");
        let other = LineItem::new(order_id, "Book", MoneyCents::new(9_00), 1, "Books");
        pricey.created_at = cheap.created_at - Duration::days(1);
        cheap.quantity = 1;
        let items = [cheap, pricey, other];

        let by_amount: Vec<_> = engine
            .category_items(&items, "Toys", ItemSort::Amount)
            .into_iter()
            .map(|item| item.item_name)
            .collect();
        assert_eq!(by_amount, ["apple", "Zebra"]);

        let by_name: Vec<_> = engine
            .category_items(&items, "Toys", ItemSort::Name)
            .into_iter()
            .map(|item| item.item_name)
            .collect();
        assert_eq!(by_name, ["apple", "Zebra"]);

        let by_recent: Vec<_> = engine
            .category_items(&items, "Toys", ItemSort::Recent)
            .into_iter()
            .map(|item| item.item_name)
            .collect();
        assert_eq!(by_recent, ["Zebra", "apple"]);
    }
}
