//! Unit tests for the Identifiers module
//!
//! Tests cover creation, parsing, conversion, ordering and display
//! formatting of the integer-backed identifiers.

use core_kernel::ProductId;
use std::collections::HashSet;

mod product_id_tests {
    use super::*;

    #[test]
    fn test_new_keeps_value() {
        let id = ProductId::new(1);
        assert_eq!(id.value(), 1);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ProductId::prefix(), "PRD");
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ProductId::new(3).to_string(), "PRD-3");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let parsed: ProductId = "PRD-12".parse().unwrap();
        assert_eq!(parsed, ProductId::new(12));
    }

    #[test]
    fn test_from_str_without_prefix() {
        let parsed: ProductId = "12".parse().unwrap();
        assert_eq!(parsed, ProductId::new(12));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("PRD-abc".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(ProductId::new(1) < ProductId::new(2));
        assert!(ProductId::new(-1) < ProductId::new(0));
    }

    #[test]
    fn test_hash_distinguishes_values() {
        let ids: HashSet<ProductId> = [1, 2, 2, 3].into_iter().map(ProductId::new).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_json_serialization_is_transparent() {
        let id = ProductId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");

        let deserialized: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
