use serde_json::{json, Value};

/// The document used by the end-to-end examples.
pub fn adult_profile() -> Value {
    json!({ "age": 30, "tags": ["x"] })
}

/// A richer document for exercising paths and functions.
pub fn customer() -> Value {
    json!({
        "id": "cust-001",
        "name": "Ada Lovelace",
        "age": 36,
        "balance": -12.5,
        "active": true,
        "country": "GB",
        "tags": ["vip", "beta"],
        "address": { "city": "London", "zip": "N1" },
        "orders": [
            { "id": "A", "total": 20, "items": [{ "sku": "p1" }] },
            { "id": "B", "total": 45.5, "items": [{ "sku": "p2" }, { "sku": "p3" }] }
        ]
    })
}

/// A batch of documents with increasing `n`.
pub fn numbered(count: usize) -> Vec<Value> {
    (0..count).map(|n| json!({ "n": n })).collect()
}
