use super::*;
use crate::inventory::mock::item;

fn ram_pool() -> WorkingPool {
    WorkingPool::new(
        ComponentType::Ram,
        vec![
            item("ram-1", "DDR5 32GB"),
            item("ram-2", "DDR5 64GB"),
            item("ram-3", "DDR5 32GB"),
        ],
    )
}

#[test]
fn test_find_returns_first_match_in_pool_order() {
    let pool = ram_pool();
    let (index, found) = pool.find("DDR5 32GB").unwrap();
    assert_eq!(index, 0);
    assert_eq!(found.uuid, "ram-1");
}

#[test]
fn test_find_is_case_sensitive_and_exact() {
    let pool = WorkingPool::new(ComponentType::Cpu, vec![item("cpu-1", "X1000")]);
    assert!(pool.find("x1000").is_none());
    assert!(pool.find("X1000 Pro").is_none());
    assert!(pool.find("X100").is_none());
    assert!(pool.find("X1000").is_some());
}

#[test]
fn test_find_uses_model_fallback_fields() {
    let fallback = InventoryItem {
        uuid: "nic-1".to_string(),
        product_name: Some(String::new()),
        model: Some("ConnectX-6".to_string()),
        ..Default::default()
    };
    let pool = WorkingPool::new(ComponentType::Nic, vec![fallback]);
    assert_eq!(pool.find("ConnectX-6").map(|(_, i)| i.uuid.as_str()), Some("nic-1"));
}

#[test]
fn test_claim_removes_item_from_pool() {
    let mut pool = ram_pool();
    let claimed = pool.claim(0);
    assert_eq!(claimed.uuid, "ram-1");
    assert_eq!(pool.len(), 2);

    let (_, next) = pool.find("DDR5 32GB").unwrap();
    assert_eq!(next.uuid, "ram-3");
}

#[test]
fn test_empty_pool() {
    let pool = WorkingPool::new(ComponentType::Psu, Vec::new());
    assert!(pool.is_empty());
    assert_eq!(pool.component_type(), ComponentType::Psu);
    assert!(pool.find("anything").is_none());
}
