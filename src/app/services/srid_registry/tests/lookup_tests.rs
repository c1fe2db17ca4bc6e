//! Tests for SRID registry lookups

use super::*;
use std::sync::Arc;

#[test]
fn test_lookups_are_bidirectional() {
    let registry = create_test_registry();

    for system in registry.systems() {
        assert_eq!(registry.lookup_srid(system.code), Some(system.srid));
        assert_eq!(registry.lookup_national_code(system.srid), Some(system.code));
    }
}

#[test]
fn test_unknown_values_are_not_found() {
    let registry = create_test_registry();

    assert_eq!(registry.lookup_srid(9999), None);
    assert_eq!(registry.lookup_national_code(4326), None);
    assert!(registry.system_for_srid(4326).is_none());
}

#[test]
fn test_system_for_srid() {
    let registry = create_test_registry();
    let system = registry.system_for_srid(25833).unwrap();

    assert_eq!(system.code, 23);
    assert_eq!(system.name, "EUREF89 UTM33");
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(create_test_registry());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.lookup_srid(22))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(25832));
    }
}
