//! Rollup tests

use core_kernel::{DecimalEngine, MovementId, NumericInput};
use domain_finance::{category_rollup, cost_center_rollup, Direction, Movement, UNCATEGORIZED};
use rust_decimal_macros::dec;

fn movement(amount: &str, category: Option<&str>, cost_center: Option<&str>) -> Movement {
    Movement {
        id: MovementId::new(),
        direction: Direction::Expense,
        amount: NumericInput::from(amount),
        currency: "EUR".to_string(),
        exchange_rate: None,
        base_amount: None,
        occurred_at: "2024-01-10T09:00:00Z".parse().unwrap(),
        category: category.map(String::from),
        cost_center: cost_center.map(String::from),
        description: None,
        counterparty: None,
    }
}

#[test]
fn test_category_rollup_groups_and_sorts_descending() {
    let engine = DecimalEngine::default();
    let movements = vec![
        movement("10", Some("A"), None),
        movement("20", Some("A"), None),
        movement("5", Some("B"), None),
    ];

    let rollup = category_rollup(&engine, &movements, None);

    assert_eq!(rollup.len(), 2);
    assert_eq!(rollup[0].key, "A");
    assert_eq!(rollup[0].total, dec!(30));
    assert_eq!(rollup[0].count, 2);
    assert_eq!(rollup[1].key, "B");
    assert_eq!(rollup[1].total, dec!(5));
}

#[test]
fn test_missing_category_lands_in_uncategorized() {
    let engine = DecimalEngine::default();
    let movements = vec![
        movement("7", None, None),
        movement("3", Some("  "), None),
        movement("5", Some("Printing"), None),
    ];

    let rollup = category_rollup(&engine, &movements, None);

    let uncategorized = rollup
        .iter()
        .find(|e| e.key == UNCATEGORIZED)
        .expect("keyless movements are kept, not dropped");
    assert_eq!(uncategorized.total, dec!(10));
    assert_eq!(uncategorized.count, 2);
}

#[test]
fn test_top_n_caps_output() {
    let engine = DecimalEngine::default();
    let movements: Vec<Movement> = (0..12)
        .map(|i| movement(&format!("{}", i + 1), Some(&format!("cat-{:02}", i)), None))
        .collect();

    let rollup = category_rollup(&engine, &movements, Some(8));

    assert_eq!(rollup.len(), 8);
    // Largest totals survive the cap.
    assert_eq!(rollup[0].total, dec!(12));
    assert_eq!(rollup[7].total, dec!(5));
}

#[test]
fn test_ties_break_on_key_for_determinism() {
    let engine = DecimalEngine::default();
    let movements = vec![
        movement("10", Some("zeta"), None),
        movement("10", Some("alpha"), None),
    ];

    let rollup = category_rollup(&engine, &movements, None);
    assert_eq!(rollup[0].key, "alpha");
    assert_eq!(rollup[1].key, "zeta");
}

#[test]
fn test_cost_center_rollup_uses_cost_center_key() {
    let engine = DecimalEngine::default();
    let movements = vec![
        movement("100", Some("ignored"), Some("warehouse-ops")),
        movement("50", None, Some("warehouse-ops")),
        movement("25", None, None),
    ];

    let rollup = cost_center_rollup(&engine, &movements, Some(10));

    assert_eq!(rollup[0].key, "warehouse-ops");
    assert_eq!(rollup[0].total, dec!(150));
    assert_eq!(rollup[1].key, UNCATEGORIZED);
    assert_eq!(rollup[1].total, dec!(25));
}

#[test]
fn test_malformed_amounts_still_grouped() {
    let engine = DecimalEngine::default();
    let movements = vec![
        movement("oops", Some("A"), None),
        movement("5", Some("A"), None),
    ];

    let rollup = category_rollup(&engine, &movements, None);
    assert_eq!(rollup[0].total, dec!(5));
    assert_eq!(rollup[0].count, 2);
}
