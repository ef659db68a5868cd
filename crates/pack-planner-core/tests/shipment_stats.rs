use pack_planner_core::prelude::*;

#[test]
fn stats_basic() {
    let catalog = Catalog::new([250, 500, 1000, 2000, 5000]).unwrap();
    let r = compute_combination(12001, &catalog);
    let stats = r.stats(12001);

    assert_eq!(stats.requested, 12001);
    assert_eq!(stats.shipped, 12250);
    assert_eq!(stats.overshoot, 249);
    assert_eq!(stats.total_packs, 4);
    assert_eq!(stats.distinct_sizes, 3);
    assert_eq!(stats.largest_pack, Some(5000));
    assert!(stats.fill_ratio > 0.97 && stats.fill_ratio < 1.0);
}

#[test]
fn stats_exact_match_fills_completely() {
    let catalog = Catalog::new([23, 31, 53]).unwrap();
    let r = compute_combination(500_000, &catalog);
    let stats = r.stats(500_000);
    assert_eq!(stats.overshoot, 0);
    assert!((stats.fill_ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn stats_empty_result() {
    let stats = CombinationResult::empty().stats(0);
    assert_eq!(stats.shipped, 0);
    assert_eq!(stats.total_packs, 0);
    assert_eq!(stats.largest_pack, None);
    assert_eq!(stats.fill_ratio, 0.0);
}

#[test]
fn stats_summary_format() {
    let catalog = Catalog::new([250, 500]).unwrap();
    let summary = compute_combination(251, &catalog).stats(251).summary();
    assert!(summary.contains("Requested: 251"), "{summary}");
    assert!(summary.contains("Shipped: 500"), "{summary}");
    assert!(summary.contains("Overshoot: 249"), "{summary}");
    assert!(summary.contains("Packs: 1"), "{summary}");
    assert!(summary.contains("Fill: 50.20%"), "{summary}");
}
