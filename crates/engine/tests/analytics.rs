use chrono::NaiveDate;
use uuid::Uuid;

use engine::{
    Budget, Engine, LineItem, MoneyCents, Order, PeriodType, Snapshot, WeekStart, parse_date,
};

fn day(raw: &str) -> NaiveDate {
    parse_date(raw).unwrap()
}

fn sample_snapshot() -> Snapshot {
    let grocer = Order::new("Grocer", day("2024-03-05"), MoneyCents::new(42_50));
    let bookshop = Order::new("Bookshop", day("2024-03-18"), MoneyCents::new(25_00));
    let grocer_april = Order::new("Grocer", day("2024-04-02"), MoneyCents::new(13_37));
    let hardware = Order::new("Hardware", day("2023-12-30"), MoneyCents::new(99_99));

    let items = vec![
        LineItem::new(grocer.id, "Apples", MoneyCents::new(2_50), 5, "Food"),
        LineItem::new(grocer.id, "Cheese", MoneyCents::new(30_00), 1, "Food"),
        LineItem::new(bookshop.id, "Novel", MoneyCents::new(12_50), 2, "Books"),
        LineItem::new(grocer_april.id, "Bread", MoneyCents::new(13_37), 1, "Food"),
        LineItem::new(hardware.id, "Drill", MoneyCents::new(99_99), 1, "Tools"),
        LineItem::new(Uuid::new_v4(), "Lost", MoneyCents::new(7_00), 3, "Food"),
    ];

    let budgets = vec![
        Budget::new(
            PeriodType::Monthly,
            MoneyCents::new(100_00),
            day("2024-03-01"),
            None,
        ),
        Budget::new(
            PeriodType::Monthly,
            MoneyCents::new(40_00),
            day("2024-03-01"),
            Some("Food".to_string()),
        ),
        Budget::new(
            PeriodType::Weekly,
            MoneyCents::new(30_00),
            day("2024-03-03"),
            None,
        ),
    ];

    Snapshot::new(
        vec![grocer, bookshop, grocer_april, hardware],
        items,
        budgets,
    )
}

#[test]
fn category_totals_match_line_items() {
    let engine = Engine::default();
    let snapshot = sample_snapshot();
    let rows = engine.category_spending(&snapshot.line_items);

    let expected: MoneyCents = snapshot.line_items.iter().map(LineItem::amount).sum();
    let actual: MoneyCents = rows.iter().map(|row| row.amount).sum();
    assert_eq!(actual, expected);

    let percent_total: f64 = rows.iter().map(|row| row.percentage).sum();
    assert!((percent_total - 100.0).abs() < 1e-9);

    let counted: usize = rows.iter().map(|row| row.count).sum();
    assert_eq!(counted, snapshot.line_items.len());

    assert!(rows.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
}

#[test]
fn vendor_totals_match_orders() {
    let engine = Engine::default();
    let snapshot = sample_snapshot();
    let rows = engine.vendor_spending(&snapshot.orders);

    let expected: MoneyCents = snapshot.orders.iter().map(|order| order.total).sum();
    let actual: MoneyCents = rows.iter().map(|row| row.amount).sum();
    assert_eq!(actual, expected);

    let counted: usize = rows.iter().map(|row| row.count).sum();
    assert_eq!(counted, snapshot.orders.len());

    assert!(rows.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
}

#[test]
fn monthly_buckets_cover_every_order() {
    let engine = Engine::default();
    let snapshot = sample_snapshot();
    let rows = engine.monthly_spending(&snapshot.orders);

    let keys: Vec<_> = rows.iter().map(|row| (row.year, row.month.as_str())).collect();
    assert_eq!(keys, [(2023, "Dec"), (2024, "Mar"), (2024, "Apr")]);
    assert_eq!(rows[1].amount, MoneyCents::new(67_50));
}

#[test]
fn budget_usages_resolve_each_period() {
    let engine = Engine::default();
    let snapshot = sample_snapshot();
    let usages = engine.budget_usages(&snapshot);
    assert_eq!(usages.len(), 3);

    // Whole March: grocer + bookshop.
    assert_eq!(usages[0].spent, MoneyCents::new(67_50));
    assert_eq!(usages[0].remaining, MoneyCents::new(32_50));
    assert!((usages[0].percentage - 67.5).abs() < 1e-9);

    // Food in March: apples + cheese; the dangling item is skipped.
    assert_eq!(usages[1].spent, MoneyCents::new(42_50));
    assert_eq!(usages[1].remaining, MoneyCents::new(-2_50));
    assert_eq!(usages[1].skipped_items, 1);

    // Week of Sunday 2024-03-03 to Saturday 2024-03-09.
    assert_eq!(usages[2].period.end, day("2024-03-09"));
    assert_eq!(usages[2].spent, MoneyCents::new(42_50));
}

#[test]
fn budget_usage_is_idempotent() {
    let engine = Engine::builder()
        .week_start(WeekStart::Monday)
        .build()
        .unwrap();
    let snapshot = sample_snapshot();

    let first = engine.budget_usages(&snapshot);
    let second = engine.budget_usages(&snapshot);
    assert_eq!(first, second);
}

#[test]
fn empty_collections_give_empty_results() {
    let engine = Engine::default();
    let snapshot = Snapshot::default();

    assert!(engine.category_spending(&snapshot.line_items).is_empty());
    assert!(engine.vendor_spending(&snapshot.orders).is_empty());
    assert!(engine.monthly_spending(&snapshot.orders).is_empty());
    assert!(engine.budget_usages(&snapshot).is_empty());
}

#[test]
fn single_budget_usage_matches_batch() {
    let engine = Engine::default();
    let snapshot = sample_snapshot();
    let batch = engine.budget_usages(&snapshot);

    for (budget, expected) in snapshot.budgets.iter().zip(&batch) {
        let single = engine.budget_usage(budget, &snapshot.orders, &snapshot.line_items);
        assert_eq!(&single, expected);
    }
}

#[test]
fn snapshot_deserializes_with_missing_collections() {
    let snapshot: Snapshot = serde_json::from_str(r#"{"orders": []}"#).unwrap();
    assert!(snapshot.line_items.is_empty());
    assert!(snapshot.budgets.is_empty());
}
