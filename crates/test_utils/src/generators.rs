//! Property-Based Test Generators
//!
//! Proptest strategies for products and their fields.

use chrono::Duration;
use core_kernel::ProductId;
use domain_catalog::Product;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::TemporalFixtures;

/// Strategy for product IDs, including negative and zero keys
pub fn product_id_strategy() -> impl Strategy<Value = ProductId> {
    (-1_000i64..1_000i64).prop_map(ProductId::new)
}

/// Strategy for prices with two decimal places (0.00 to 99,999.99)
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for prices with up to four decimal places
pub fn fine_price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64, 0u32..=4u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for product names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,30}"
}

/// Strategy for products stamped at or after `t0`
pub fn product_strategy() -> impl Strategy<Value = Product> {
    (product_id_strategy(), name_strategy(), price_strategy(), 0i64..86_400i64).prop_map(
        |(id, name, price, offset)| {
            Product::with_last_modified(
                id,
                name,
                price,
                TemporalFixtures::t0() + Duration::seconds(offset),
            )
        },
    )
}
