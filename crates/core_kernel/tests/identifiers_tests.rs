//! Tests for typed identifiers

use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId};
use std::collections::BTreeMap;

#[test]
fn test_ids_deserialize_from_plain_integers() {
    let id: ClaimHandlerId = serde_json::from_str("12").unwrap();
    assert_eq!(id, ClaimHandlerId::new(12));
}

#[test]
fn test_ids_serialize_transparently() {
    let json = serde_json::to_string(&DisasterId::new(3)).unwrap();
    assert_eq!(json, "3");
}

#[test]
fn test_display_uses_prefix() {
    assert_eq!(ClaimId::new(5).to_string(), "CLM-5");
    assert_eq!(ClaimHandlerId::prefix(), "CLH");
}

#[test]
fn test_ids_order_numerically_as_map_keys() {
    let mut map = BTreeMap::new();
    map.insert(AgentId::new(10), "ten");
    map.insert(AgentId::new(2), "two");

    let keys: Vec<i64> = map.keys().map(|id| id.value()).collect();
    assert_eq!(keys, vec![2, 10]);
}

#[test]
fn test_round_trip_through_display() {
    let original = AgentId::new(77);
    let parsed: AgentId = original.to_string().parse().unwrap();
    assert_eq!(original, parsed);
}
