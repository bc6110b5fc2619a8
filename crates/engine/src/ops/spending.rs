use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
    LineItem, MoneyCents, Order,
    util::{percent_of, sort_by_amount_desc},
};

use super::{Engine, MonthOrder};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Spending for one category label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: MoneyCents,
    /// Share of spending across all line items, `0.0` when nothing was spent.
    pub percentage: f64,
    pub count: usize,
}

/// Order totals for one calendar month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySpending {
    /// Three-letter month abbreviation (`Jan` .. `Dec`).
    pub month: String,
    /// 1-based month number.
    pub month_number: u32,
    pub year: i32,
    pub amount: MoneyCents,
}

/// Order totals for one vendor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSpending {
    pub vendor: String,
    pub amount: MoneyCents,
    pub count: usize,
}

/// Sum and count per key in one pass, keeping keys in first-seen order.
fn group_by_label<'a, T>(
    rows: &'a [T],
    label: impl Fn(&'a T) -> &'a str,
    amount: impl Fn(&T) -> MoneyCents,
) -> Vec<(&'a str, MoneyCents, usize)> {
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, MoneyCents, usize)> = Vec::new();

    for row in rows {
        let key = label(row);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((key, MoneyCents::ZERO, 0));
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.1 += amount(row);
        group.2 += 1;
    }

    groups
}

impl Engine {
    /// Spending per category across all line items, largest first.
    ///
    /// Labels are compared exactly: `"Food"` and `"food"` are two categories.
    pub fn category_spending(&self, items: &[LineItem]) -> Vec<CategorySpending> {
        let total: MoneyCents = items.iter().map(LineItem::amount).sum();

        let mut rows: Vec<CategorySpending> =
            group_by_label(items, |item| item.category.as_str(), LineItem::amount)
                .into_iter()
                .map(|(category, amount, count)| CategorySpending {
                    category: category.to_string(),
                    amount,
                    percentage: percent_of(amount, total),
                    count,
                })
                .collect();

        sort_by_amount_desc(&mut rows, |row| row.amount);
        rows
    }

    /// Spending per vendor across all orders, largest first.
    pub fn vendor_spending(&self, orders: &[Order]) -> Vec<VendorSpending> {
        let mut rows: Vec<VendorSpending> =
            group_by_label(orders, |order| order.vendor_name.as_str(), |order| order.total)
                .into_iter()
                .map(|(vendor, amount, count)| VendorSpending {
                    vendor: vendor.to_string(),
                    amount,
                    count,
                })
                .collect();

        sort_by_amount_desc(&mut rows, |row| row.amount);
        rows
    }

    /// Order totals per calendar month, oldest year first.
    ///
    /// Inside a year the buckets follow the configured [`MonthOrder`].
    pub fn monthly_spending(&self, orders: &[Order]) -> Vec<MonthlySpending> {
        let mut buckets: HashMap<(i32, u32), MoneyCents> = HashMap::new();
        for order in orders {
            let key = (order.order_date.year(), order.order_date.month());
            *buckets.entry(key).or_default() += order.total;
        }

        let mut rows: Vec<MonthlySpending> = buckets
            .into_iter()
            .map(|((year, month_number), amount)| MonthlySpending {
                month: month_label(month_number).to_string(),
                month_number,
                year,
                amount,
            })
            .collect();

        match self.options.month_order {
            MonthOrder::Chronological => {
                rows.sort_by_key(|row| (row.year, row.month_number));
            }
            MonthOrder::Label => {
                rows.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.month.cmp(&b.month)));
            }
        }
        rows
    }
}

fn month_label(month_number: u32) -> &'static str {
    month_number
        .checked_sub(1)
        .and_then(|index| MONTH_LABELS.get(index as usize))
        .copied()
        .unwrap_or("???")
}
