//! Test fixture generators
//!
//! Raw member documents shaped like a document-store export.

use serde_json::{json, Value};

/// Basic family: 1 has children 2 and 3; 3 is married to 4
pub fn fixture_basic_family() -> Vec<Value> {
    vec![
        json!({"serNo": 1, "fatherSerNo": null, "childrenSerNos": [2, 3], "vansh": "12"}),
        json!({"serNo": 2, "fatherSerNo": 1, "vansh": "12"}),
        json!({"serNo": 3, "fatherSerNo": 1, "spouseSerNo": 4, "vansh": "12"}),
        json!({"serNo": 4, "spouseSerNo": 3, "vansh": "12"}),
    ]
}

/// Cousins: 1 → {2, 3}; 2 → 4; 3 → 5
pub fn fixture_cousins() -> Vec<Value> {
    vec![
        json!({"serNo": 1, "vansh": "12"}),
        json!({"serNo": 2, "fatherSerNo": 1, "vansh": "12"}),
        json!({"serNo": 3, "fatherSerNo": 1, "vansh": "12"}),
        json!({"serNo": 4, "fatherSerNo": 2, "vansh": "12"}),
        json!({"serNo": 5, "fatherSerNo": 3, "vansh": "12"}),
    ]
}

/// Father chain of `len` documents starting at `start`
pub fn fixture_chain(start: i64, len: i64, vansh: &str) -> Vec<Value> {
    (start..start + len)
        .map(|s| {
            let father = if s == start { Value::Null } else { json!(s - 1) };
            json!({"serNo": s, "fatherSerNo": father, "vansh": vansh})
        })
        .collect()
}

/// Married-out daughter (surname Smith) with a child recorded under her
pub fn fixture_external_branch() -> Vec<Value> {
    vec![
        json!({
            "serNo": 1,
            "vansh": "12",
            "personalDetails": {"firstName": "Vishnu", "lastName": "Gogte", "gender": "male"}
        }),
        json!({
            "serNo": 2,
            "fatherSerNo": 1,
            "vansh": "12",
            "personalDetails": {"firstName": "Asha", "lastName": "Smith", "gender": "female"}
        }),
        json!({
            "serNo": 3,
            "fatherSerNo": 2,
            "vansh": "12",
            "personalDetails": {"firstName": "Kiran", "lastName": "Smith", "gender": "male"}
        }),
    ]
}

/// Same people recorded twice with differing completeness and id shapes
pub fn fixture_messy_duplicates() -> Vec<Value> {
    vec![
        json!({"sNo": "1", "vansh": " 12 "}),
        json!({
            "serNo": {"$numberLong": "1"},
            "vansh": "12",
            "personalDetails": {"firstName": "Vishnu", "lastName": "Gogte", "gender": "male"}
        }),
        json!({"serNo": 2, "vansh": "12", "personalDetails": {"firstName": "Ravi"}}),
        json!({"serNo": "2", "fatherSerNo": "1", "vansh": "12"}),
        json!({"serNo": 3, "vansh": "12", "sonDaughterSerNo": [5]}),
        json!({"serNo": 3.0, "vansh": "12", "childrenSerNos": ["6"]}),
        json!(null),
        json!([1, 2, 3]),
    ]
}

/// Wide, shallow family for benchmarks: `generations` levels, `fanout` children each
pub fn fixture_generated(generations: u32, fanout: i64, vansh: &str) -> Vec<Value> {
    let mut out = vec![json!({"serNo": 1, "vansh": vansh})];
    let mut frontier = vec![1i64];
    let mut next_serial = 2i64;

    for _ in 1..generations {
        let mut next = Vec::new();
        for parent in &frontier {
            for _ in 0..fanout {
                out.push(json!({"serNo": next_serial, "fatherSerNo": parent, "vansh": vansh}));
                next.push(next_serial);
                next_serial += 1;
            }
        }
        frontier = next;
    }
    out
}
