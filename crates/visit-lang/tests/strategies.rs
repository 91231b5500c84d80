//! Property-based testing strategies for expression trees.
//!
//! ```rust,ignore
//! mod strategies;
//! use strategies::*;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn test_something(expr in arb_expr()) {
//!         // Your test here
//!     }
//! }
//! ```

use proptest::prelude::*;
use visit_lang::Expr;

/// Strategy for generating number literals.
///
/// Bounded so that products of generated trees stay finite.
pub fn arb_number() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (-20i32..=20).prop_map(Expr::number),
        (-20.0f64..20.0f64).prop_map(Expr::number),
    ]
}

/// Strategy for generating trees built from number, sum and product nodes.
pub fn arb_expr() -> impl Strategy<Value = Expr> {
    arb_number().prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sum(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expr::product(l, r)),
        ]
    })
}

/// Strategy for generating trees that use integer literals only.
pub fn arb_integer_expr() -> impl Strategy<Value = Expr> {
    (0i32..10).prop_map(Expr::number).prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sum(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expr::product(l, r)),
        ]
    })
}

/// Strategy for generating literals across large, fractional and tiny magnitudes.
///
/// Products of these may overflow, so trees built from them are only printed.
pub fn arb_wide_number() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (-999i32..=999, 0i32..=19).prop_map(|(m, k)| Expr::number(m as f64 * 10f64.powi(k))),
        (-999i32..=999, 1i32..=6).prop_map(|(m, k)| Expr::number(m as f64 / 10f64.powi(k))),
        (any::<bool>(), 1i32..=4, 7i32..=12).prop_map(|(negative, d, k)| {
            let value = d as f64 / 10f64.powi(k);
            Expr::number(if negative { -value } else { value })
        }),
    ]
}

/// Strategy for generating trees whose literals come from [`arb_wide_number`].
pub fn arb_wide_expr() -> impl Strategy<Value = Expr> {
    arb_wide_number().prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sum(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expr::product(l, r)),
        ]
    })
}
