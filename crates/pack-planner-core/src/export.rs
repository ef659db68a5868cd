use crate::model::CombinationResult;
use crate::orders::Order;
use serde_json::{Value, json};

/// Serialize a result as `{ requested, shipped, overshoot, total_packs, summary, packs }`.
/// `packs` is an array of `{ size, count }` in ascending size order.
pub fn to_json(result: &CombinationResult, requested: i64) -> Value {
    let packs: Vec<Value> = result
        .packs
        .iter()
        .map(|(size, count)| json!({"size": size, "count": count}))
        .collect();
    json!({
        "requested": requested,
        "shipped": result.total_items(),
        "overshoot": result.overshoot(requested),
        "total_packs": result.total_packs,
        "summary": result.summary(),
        "packs": packs,
    })
}

/// Serialize many results (e.g. a batch run) as an array of [`to_json`] objects.
pub fn to_json_batch(entries: &[(i64, CombinationResult)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(requested, result)| to_json(result, *requested))
            .collect(),
    )
}

/// Flatten orders into `{ orders: { id: { items_count, pack_setup, total_packs, total_items } } }`.
pub fn orders_to_json_hash(orders: &[Order]) -> Value {
    let mut map = serde_json::Map::new();
    for order in orders {
        map.insert(
            order.id.to_string(),
            json!({
                "items_count": order.items_count,
                "pack_setup": order.pack_setup,
                "total_packs": order.total_packs,
                "total_items": order.total_items,
            }),
        );
    }
    json!({ "orders": map })
}
