use pack_planner_core::prelude::*;
use pack_planner_core::{orders_to_json_hash, to_json, to_json_batch};

#[test]
fn export_json_shape() {
    let catalog = Catalog::new([250, 500, 1000, 2000, 5000]).unwrap();
    let r = compute_combination(12001, &catalog);
    let v = to_json(&r, 12001);

    assert_eq!(v["requested"], 12001);
    assert_eq!(v["shipped"], 12250);
    assert_eq!(v["overshoot"], 249);
    assert_eq!(v["total_packs"], 4);
    assert_eq!(v["summary"], "1x250, 1x2000, 2x5000");

    let packs = v["packs"].as_array().unwrap();
    let sizes: Vec<u64> = packs.iter().map(|p| p["size"].as_u64().unwrap()).collect();
    assert_eq!(sizes, vec![250, 2000, 5000]);
    assert_eq!(packs[2]["count"], 2);
}

#[test]
fn export_batch_keeps_order() {
    let catalog = Catalog::new([250, 500]).unwrap();
    let entries: Vec<(i64, CombinationResult)> = [251, 0]
        .iter()
        .map(|&n| (n, compute_combination(n, &catalog)))
        .collect();
    let v = to_json_batch(&entries);
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["summary"], "1x500");
    assert_eq!(arr[1]["summary"], "none");
    assert_eq!(arr[1]["packs"].as_array().unwrap().len(), 0);
}

#[test]
fn export_orders_hash() {
    let repo = InMemoryPackSizeRepository::with_sizes([250, 500]).unwrap();
    let service = OrderService::new(InMemoryOrderRepository::new(), repo);
    let order = service.create_order(501).unwrap();
    let v = orders_to_json_hash(&service.list_orders().unwrap());
    let entry = &v["orders"][order.id.to_string()];
    assert_eq!(entry["items_count"], 501);
    assert_eq!(entry["pack_setup"], "1x250, 1x500");
    assert_eq!(entry["total_items"], 750);
}
