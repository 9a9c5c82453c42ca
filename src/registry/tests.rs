use crate::{
    department::Employee,
    registry::{Keyed, Registry},
};

/// Helper to build a registry with two keyed items
fn setup_registry() -> Registry<Employee> {
    let mut registry = Registry::new();
    registry.add(Employee::new("Mark Maina", "E001", 50_000));
    registry.add(Employee::new("Victor Juma", "E002", 70_000));
    registry
}

#[test]
fn test_empty_registry() {
    let registry: Registry<Employee> = Registry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert_eq!(registry.find("E001"), None);
}

#[test]
fn test_add_preserves_insertion_order() {
    let registry = setup_registry();

    let keys: Vec<&str> = registry.iter().map(Keyed::key).collect();
    assert_eq!(keys, vec!["E001", "E002"]);
}

#[test]
fn test_find_returns_first_match() {
    let mut registry = setup_registry();
    registry.add(Employee::new("Duplicate", "E001", 10_000));

    // Duplicate keys are accepted; lookup shadows the later entry
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.find("E001").map(Employee::name), Some("Mark Maina"));
}

#[test]
fn test_find_mut_allows_delegated_mutation() {
    let mut registry = setup_registry();

    if let Some(employee) = registry.find_mut("E002") {
        employee.update_salary(75_000);
    }
    assert_eq!(registry.find("E002").map(Employee::salary), Some(75_000));
}

#[test]
fn test_find_missing_key_returns_none() {
    let registry = setup_registry();
    assert_eq!(registry.find("E999"), None);
}

#[test]
fn test_aggregate_folds_a_numeric_field() {
    let registry = setup_registry();
    let total: u64 = registry.aggregate(Employee::salary);
    assert_eq!(total, 120_000);
}

#[test]
fn test_display_all_is_restartable() {
    let registry = setup_registry();

    let first_pass: Vec<String> = registry.display_all().collect();
    let second_pass: Vec<String> = registry.display_all().collect();
    assert_eq!(first_pass.len(), 2);
    assert_eq!(first_pass, second_pass);
}
