//! Test utilities for the SRID registry

use crate::app::services::srid_registry::SridRegistry;

mod lookup_tests;

/// Small table covering the codes used across the test suite
pub fn create_test_table() -> String {
    "EUREF89 UTM32;EUREF89 UTM sone 32;22;25832\n\
     EUREF89 UTM33;EUREF89 UTM sone 33;23;25833\n\
     EUREF89 NTM10;EUREF89 NTM sone 10;110;5110\n"
        .to_string()
}

/// Registry built from [`create_test_table`]
pub fn create_test_registry() -> SridRegistry {
    SridRegistry::from_reader(create_test_table().as_bytes()).unwrap()
}
